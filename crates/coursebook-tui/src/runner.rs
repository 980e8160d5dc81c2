//! Main TUI runner - entry point and event loop

use coursebook_app::{Engine, EngineConfig, EngineEvent, Message};
use coursebook_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives.
///
/// Must be called from within a tokio runtime (the Engine spawns its signal
/// listener).
pub fn run(config: EngineConfig) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(config);
    let mut term = terminal::init()?;

    if let Ok(size) = term.size() {
        engine.process_message(Message::Resize {
            width: size.width,
            height: size.height,
        });
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop. Redraws only after the Engine reports a change.
fn run_loop(terminal: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let mut events = engine.subscribe();
    let mut needs_redraw = true;

    while !engine.should_quit() {
        // External messages (signal handler)
        engine.drain_pending_messages();

        if collect_events(&mut events) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|frame| render::view(frame, &mut engine.state))?;
            needs_redraw = false;
        }

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}

/// Drain the event receiver; returns `true` if anything changed
fn collect_events(events: &mut broadcast::Receiver<EngineEvent>) -> bool {
    let mut changed = false;
    loop {
        match events.try_recv() {
            Ok(event) => {
                trace!("Engine event: {}", event.event_type());
                changed = true;
            }
            Err(TryRecvError::Lagged(skipped)) => {
                debug!("Render loop lagged by {} events", skipped);
                changed = true;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_events_reports_change() {
        let (tx, mut rx) = broadcast::channel(4);
        assert!(!collect_events(&mut rx));

        tx.send(EngineEvent::OnboardingDismissed).unwrap();
        tx.send(EngineEvent::SelectionChanged { index: 1 }).unwrap();
        assert!(collect_events(&mut rx));
        assert!(!collect_events(&mut rx));
    }

    #[test]
    fn test_collect_events_treats_lag_as_change() {
        let (tx, mut rx) = broadcast::channel(1);
        tx.send(EngineEvent::Restored).unwrap();
        tx.send(EngineEvent::Restored).unwrap();
        assert!(collect_events(&mut rx));
    }
}
