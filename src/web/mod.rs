//! # Event Transport
//!
//! axum-based HTTP transport for inbound event envelopes. Binds the
//! configured port and path, parses the outer envelope framing, and hands
//! each [`Envelope`](crate::events::Envelope) to the
//! [`EventDispatcher`](crate::dispatcher::EventDispatcher); the dispatch
//! result is mapped onto the HTTP response. Retry policy, if any, belongs
//! to the emitter.

pub mod handlers;
pub mod response_types;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::config::ListenerConfig;
use crate::dispatcher::EventDispatcher;
use crate::error::Result;

pub use handlers::{basic_health, receive_event, InboundEvent, ReceiveResponse};
pub use response_types::{ApiError, ErrorResponse};
pub use state::AppState;

/// Build the transport router for the given listener path.
pub fn router(state: AppState, path: &str) -> Router {
    Router::new()
        .route(path, post(handlers::receive_event))
        .route("/health", get(handlers::basic_health))
        .with_state(state)
}

/// Listen for inbound event envelopes on the configured port and path.
///
/// The dispatcher's callback must be registered before this call;
/// registering afterwards races with in-flight envelopes. Runs until the
/// server terminates, which it treats as an error.
pub async fn listen(config: ListenerConfig, dispatcher: Arc<EventDispatcher>) -> Result<()> {
    config.validate()?;

    let app = router(AppState::new(dispatcher), &config.path);
    let addr = format!("0.0.0.0:{}", config.port);
    let tcp = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        port = config.port,
        path = %config.path,
        "Event listener accepting envelopes"
    );

    axum::serve(tcp, app).await?;
    Ok(())
}
