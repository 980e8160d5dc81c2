//! OS signal handling for graceful shutdown
//!
//! While the UI is up the terminal is in raw mode, so Ctrl+C reaches the app
//! as a key event and the key handler turns it into a quit. The listeners
//! here cover shutdown requests that arrive from outside: `kill` (SIGTERM),
//! a closed terminal window (SIGHUP), and SIGINT sent by another process or
//! before raw mode is entered.

use std::fmt;

use coursebook_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Which OS request ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    Hangup,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        };
        f.write_str(name)
    }
}

/// Spawn a task that turns the first shutdown signal into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                info!("Received {}, shutting down", signal);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, signal_name: ShutdownSignal| {
        signal(kind).map_err(|e| {
            Error::terminal(format!("Failed to listen for {}: {}", signal_name, e))
        })
    };

    let mut interrupt = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
    let mut terminate = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;
    let mut hangup = listen(SignalKind::hangup(), ShutdownSignal::Hangup)?;

    let received = tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = hangup.recv() => ShutdownSignal::Hangup,
    };
    Ok(received)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
