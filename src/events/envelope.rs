//! Wire-level envelope delivered by the transport per inbound request.

/// Inbound unit carrying a type identifier, the opaque payload bytes, and an
/// optional correlation context.
///
/// An envelope is built once per inbound request, is immutable afterwards,
/// and is scoped to a single dispatch call. Exactly one payload shape is
/// selected for it, determined solely by `event_type`.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Event-type identifier from the wire.
    pub event_type: String,
    /// Verbatim bytes of the type-specific payload document.
    pub raw_payload: Vec<u8>,
    /// Cross-service trace/session id (`shkeptncontext`), when present.
    /// Propagated for diagnostics, never interpreted.
    pub correlation_context: Option<String>,
}

impl Envelope {
    /// Create an envelope from a type identifier and raw payload bytes.
    pub fn new(event_type: impl Into<String>, raw_payload: impl Into<Vec<u8>>) -> Self {
        Self {
            event_type: event_type.into(),
            raw_payload: raw_payload.into(),
            correlation_context: None,
        }
    }

    /// Attach the correlation context propagated by the emitting service.
    pub fn with_correlation_context(mut self, context: impl Into<String>) -> Self {
        self.correlation_context = Some(context.into());
        self
    }
}
