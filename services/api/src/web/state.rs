//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use diary_docx_core::ports::DocumentRenderer;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
/// Holds nothing mutable: every request builds its document from scratch.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub renderer: Arc<dyn DocumentRenderer>,
}
