//! # Event Intake Handlers
//!
//! HTTP handlers for inbound event envelopes and the liveness check.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::debug;

use crate::events::Envelope;
use crate::logging::log_dispatch_operation;
use crate::web::response_types::ApiError;
use crate::web::state::AppState;

/// Outer envelope framing of an inbound event request.
///
/// `data` stays raw here; decoding it is the dispatcher's job once the type
/// tag has selected a shape. An absent `type` is forwarded as the empty
/// identifier and rejected by the dispatcher, so emitters get the same
/// error for "missing" and "unknown".
#[derive(Debug, Deserialize)]
pub struct InboundEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    pub data: Box<RawValue>,
    #[serde(default)]
    pub shkeptncontext: Option<String>,
    /// Event id assigned by the emitting service. Logged, never interpreted.
    #[serde(default)]
    pub id: Option<String>,
}

/// Acknowledgement body for a delivered event.
#[derive(Debug, Serialize)]
pub struct ReceiveResponse {
    pub status: String,
}

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// Inbound event endpoint: POST on the configured listener path.
///
/// Builds an [`Envelope`] from the outer framing and hands it to the
/// dispatcher; the dispatch result is mapped onto the HTTP response
/// (client-shaped rejections to 400, configuration and callback failures
/// to 500). No retries happen here; a failed event is dropped.
pub async fn receive_event(
    State(state): State<AppState>,
    Json(inbound): Json<InboundEvent>,
) -> Result<Json<ReceiveResponse>, ApiError> {
    debug!(
        event_type = %inbound.event_type,
        id = inbound.id.as_deref(),
        shkeptncontext = inbound.shkeptncontext.as_deref(),
        "Received event envelope"
    );

    let mut envelope = Envelope::new(
        inbound.event_type,
        inbound.data.get().as_bytes().to_vec(),
    );
    if let Some(context) = inbound.shkeptncontext {
        envelope = envelope.with_correlation_context(context);
    }

    match state.dispatcher.handle(&envelope) {
        Ok(()) => {
            log_dispatch_operation(
                "receive_event",
                Some(&envelope.event_type),
                envelope.correlation_context.as_deref(),
                "delivered",
                None,
            );
            Ok(Json(ReceiveResponse {
                status: "delivered".to_string(),
            }))
        }
        Err(err) => {
            log_dispatch_operation(
                "receive_event",
                Some(&envelope.event_type),
                envelope.correlation_context.as_deref(),
                "rejected",
                Some(&err.to_string()),
            );
            Err(ApiError::from(err))
        }
    }
}

/// Basic health check endpoint: GET /health
///
/// Simple health check that returns OK if the service is running.
pub async fn basic_health(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
