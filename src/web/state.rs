//! # Transport Application State
//!
//! Shared state for the inbound event transport: the dispatcher every
//! request hands its envelope to.

use std::sync::Arc;

use crate::dispatcher::EventDispatcher;

/// State shared across transport request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dispatcher receiving every decoded envelope.
    pub dispatcher: Arc<EventDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<EventDispatcher>) -> Self {
        Self { dispatcher }
    }
}
