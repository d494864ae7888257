use thiserror::Error;

use crate::events::EventType;

/// Opaque error type crossing the dispatch-callback boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors produced while turning one envelope into one callback invocation.
///
/// Every variant is local to a single `handle` call; none are fatal to the
/// process and none trigger automatic retry. The transport decides what an
/// error means for the HTTP response.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The envelope's type tag matches none of the recognized identifiers.
    /// Carries the offending identifier verbatim (possibly empty).
    #[error("unrecognized event type '{0}'")]
    UnrecognizedEventType(String),

    /// The raw payload does not conform to the shape selected for its type.
    #[error("failed to decode '{}' event payload{}", .event_type, context_suffix(.correlation_context))]
    PayloadDecode {
        event_type: EventType,
        correlation_context: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    /// Decoding succeeded but nothing is wired to receive the result.
    /// Surfaced distinctly so operators can spot the setup mistake.
    #[error("no dispatch callback registered")]
    NoCallbackRegistered,

    /// An error returned by the registered callback, passed through verbatim.
    #[error("{0}")]
    Callback(BoxError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),
}

fn context_suffix(context: &Option<String>) -> String {
    context
        .as_deref()
        .map(|c| format!(" (shkeptncontext {c})"))
        .unwrap_or_default()
}
