//! Engine - owner of the application state for the lifetime of the session
//!
//! The views are rebuilt from scratch on every frame; the Engine sits above
//! them. It owns the message channel and the [`AppState`], runs messages
//! through the update loop, and broadcasts [`EngineEvent`]s so frontends know
//! when to redraw.

use std::path::PathBuf;
use std::sync::Arc;

use coursebook_core::Catalog;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::color_scheme::ColorScheme;
use crate::config::{self, Settings};
use crate::engine_event::EngineEvent;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppPhase, AppState};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    show_onboarding: bool,
    expanded: Vec<usize>,
    selected: usize,
    color_scheme: ColorScheme,
    terminal_size: Option<(u16, u16)>,
    phase: AppPhase,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let saved = state.save();
        Self {
            show_onboarding: saved.show_onboarding,
            expanded: saved.expanded,
            selected: saved.selected,
            color_scheme: state.color_scheme,
            terminal_size: state.terminal_size,
            phase: state.phase,
        }
    }
}

/// Startup inputs for the Engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub catalog: Arc<Catalog>,
    pub settings: Settings,
    /// Config file re-read on [`Message::ReloadSettings`]
    pub config_path: Option<PathBuf>,
    /// `--theme` override, which wins over config and terminal detection
    pub cli_color_scheme: Option<ColorScheme>,
}

impl EngineConfig {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Settings::default(),
            config_path: None,
            cli_color_scheme: None,
        }
    }
}

/// Session-scoped owner of the application state.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    config_path: Option<PathBuf>,

    cli_color_scheme: Option<ColorScheme>,

    /// Subscribers receive EngineEvents after each message processing cycle.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create the Engine and start listening for OS signals.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: EngineConfig) -> Self {
        let color_scheme = config::resolve_color_scheme(&config.settings, config.cli_color_scheme);
        info!(
            "Starting with {} courses, {} color scheme",
            config.catalog.len(),
            color_scheme
        );

        let state = AppState::with_settings(config.catalog, config.settings, color_scheme);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            config_path: config.config_path,
            cli_color_scheme: config.cli_color_scheme,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped and the receiver reports `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle, perform any
    /// resulting actions and emit events for what changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        for action in process::process_message(&mut self.state, msg) {
            self.handle_action(action);
        }

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Replace the state with a fresh one built from `settings`, carrying the
    /// view-state across.
    pub fn rebuild(&mut self, settings: Settings) {
        let saved = self.state.save();
        let color_scheme = config::resolve_color_scheme(&settings, self.cli_color_scheme);

        let mut state = AppState::with_settings(self.state.catalog.clone(), settings, color_scheme);
        state.terminal_size = self.state.terminal_size;
        state.phase = self.state.phase;
        state.restore(&saved);
        self.state = state;

        debug!("State rebuilt with {} expanded cards", saved.expanded.len());
        self.emit(EngineEvent::Restored);
    }

    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::ReloadSettings => {
                let settings = match &self.config_path {
                    Some(path) => {
                        info!("Reloading settings from {:?}", path);
                        config::load_settings(path)
                    }
                    None => {
                        debug!("No config file, rebuilding with current settings");
                        self.state.settings.clone()
                    }
                };
                self.rebuild(settings);
            }
        }
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre == post {
            return;
        }

        if pre.show_onboarding && !post.show_onboarding {
            self.emit(EngineEvent::OnboardingDismissed);
        }

        for &index in pre.expanded.iter().filter(|i| !post.expanded.contains(i)) {
            self.emit(EngineEvent::CardToggled {
                index,
                expanded: false,
            });
        }
        for &index in post.expanded.iter().filter(|i| !pre.expanded.contains(i)) {
            self.emit(EngineEvent::CardToggled {
                index,
                expanded: true,
            });
        }

        if pre.selected != post.selected {
            self.emit(EngineEvent::SelectionChanged {
                index: post.selected,
            });
        }

        if pre.color_scheme != post.color_scheme {
            self.emit(EngineEvent::ColorSchemeChanged {
                scheme: post.color_scheme,
            });
        }

        if pre.terminal_size != post.terminal_size {
            if let Some((width, height)) = post.terminal_size {
                self.emit(EngineEvent::Resized { width, height });
            }
        }
    }

    /// send() only fails when nobody is subscribed, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
