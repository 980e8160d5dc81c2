//! coursebook-app - View-state and orchestration for Coursebook
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! onboarding/catalog flow: the state model, messages, the update function,
//! the Engine that owns state above the views, configuration loading and
//! string resources.

pub mod catalog_view_state;
pub mod color_scheme;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod expansion;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod resources;
pub mod signals;
pub mod state;

// Re-export primary types
pub use color_scheme::ColorScheme;
pub use engine::{Engine, EngineConfig};
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Mode, SavedState};
