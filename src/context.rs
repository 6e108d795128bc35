//! Board Context
//!
//! Startup configuration provided via Leptos Context API.

use std::sync::Arc;

use board_core::{BoardConfig, ClientDirectory};
use leptos::prelude::*;

/// Immutable board-wide settings, injected once by [`crate::app::App`]
#[derive(Clone)]
pub struct BoardContext {
    config: Arc<BoardConfig>,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Fixed client table used by every selector
    pub fn clients(&self) -> &ClientDirectory {
        &self.config.clients
    }

    pub fn is_backend_configured(&self) -> bool {
        self.config.backend.is_some()
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
