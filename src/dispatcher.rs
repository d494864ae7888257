//! # Event Dispatcher
//!
//! Turns one envelope into one callback invocation, or a reported error.
//!
//! The dispatcher owns exactly one piece of shared state: the registered
//! callback slot, guarded by a read-mostly lock so last-writer-wins
//! re-registration is race-free. Ordering between registration and use is
//! still the caller's responsibility; register before the listener starts.
//! `handle` holds no per-call mutable state and is safe to invoke
//! concurrently for different envelopes.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::error::{BoxError, RelayError, Result};
use crate::events::{Envelope, EventPayload};
use crate::registry::schema_for;

/// The single registered handler invoked with each decoded payload.
pub type DispatchCallback =
    Arc<dyn Fn(EventPayload) -> std::result::Result<(), BoxError> + Send + Sync>;

/// Dispatches decoded event payloads to the registered callback.
pub struct EventDispatcher {
    callback: RwLock<Option<DispatchCallback>>,
}

impl EventDispatcher {
    /// Create a dispatcher with no callback registered yet.
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
        }
    }

    /// Create a dispatcher with the callback injected at construction.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(EventPayload) -> std::result::Result<(), BoxError> + Send + Sync + 'static,
    {
        Self {
            callback: RwLock::new(Some(Arc::new(callback))),
        }
    }

    /// Register the dispatch callback, replacing any previous registration.
    pub fn register_callback<F>(&self, callback: F)
    where
        F: Fn(EventPayload) -> std::result::Result<(), BoxError> + Send + Sync + 'static,
    {
        let mut slot = self.callback.write();
        if slot.is_some() {
            warn!("Replacing registered dispatch callback");
        }
        *slot = Some(Arc::new(callback));
        info!("Registered dispatch callback");
    }

    pub fn has_callback(&self) -> bool {
        self.callback.read().is_some()
    }

    /// Handle one inbound envelope.
    ///
    /// Resolves the envelope's type tag against the schema registry, decodes
    /// the raw payload into the selected shape, and invokes the registered
    /// callback exactly once with the decoded value. The callback's result
    /// becomes this call's result, unmodified. No retries, no side effects
    /// beyond the single invocation and log records.
    pub fn handle(&self, envelope: &Envelope) -> Result<()> {
        let start = Instant::now();

        debug!(
            event_type = %envelope.event_type,
            shkeptncontext = envelope.correlation_context.as_deref(),
            payload_bytes = envelope.raw_payload.len(),
            "Handling inbound event envelope"
        );

        let schema = schema_for(&envelope.event_type).ok_or_else(|| {
            warn!(
                event_type = %envelope.event_type,
                shkeptncontext = envelope.correlation_context.as_deref(),
                "Rejected envelope with unrecognized event type"
            );
            RelayError::UnrecognizedEventType(envelope.event_type.clone())
        })?;

        let payload = schema.decode(&envelope.raw_payload).map_err(|source| {
            error!(
                event_type = %schema.event_type,
                shkeptncontext = envelope.correlation_context.as_deref(),
                error = %source,
                "Payload decode failed"
            );
            RelayError::PayloadDecode {
                event_type: schema.event_type,
                correlation_context: envelope.correlation_context.clone(),
                source,
            }
        })?;

        // Clone the callback out of the lock; the guard must never be held
        // across the invocation.
        let callback = self.callback.read().clone();
        let Some(callback) = callback else {
            warn!(
                event_type = %schema.event_type,
                "Decoded event has nowhere to go: no dispatch callback registered"
            );
            return Err(RelayError::NoCallbackRegistered);
        };

        let result = callback(payload).map_err(RelayError::Callback);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => info!(
                event_type = %schema.event_type,
                shkeptncontext = envelope.correlation_context.as_deref(),
                time_ms = elapsed_ms,
                "Event delivered to callback"
            ),
            Err(e) => error!(
                event_type = %schema.event_type,
                shkeptncontext = envelope.correlation_context.as_deref(),
                error = %e,
                time_ms = elapsed_ms,
                "Dispatch callback returned an error"
            ),
        }
        result
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use crate::events::EventType;

    fn envelope_for(event_type: &str, data: serde_json::Value) -> Envelope {
        Envelope::new(event_type, serde_json::to_vec(&data).unwrap())
    }

    /// Dispatcher wired to a counting spy callback.
    fn counting_dispatcher() -> (EventDispatcher, Arc<AtomicUsize>) {
        let invocations = Arc::new(AtomicUsize::new(0));
        let spy_count = invocations.clone();
        let dispatcher = EventDispatcher::with_callback(move |_payload| {
            spy_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        (dispatcher, invocations)
    }

    #[test]
    fn delivers_decoded_payload_to_callback() {
        let (dispatcher, invocations) = counting_dispatcher();
        let envelope = envelope_for("new-artifact", json!({ "service": "cart" }));

        dispatcher.handle(&envelope).unwrap();

        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unrecognized_type_skips_decode_and_callback() {
        let (dispatcher, invocations) = counting_dispatcher();
        let envelope = envelope_for("bogus-event", json!({}));

        let err = dispatcher.handle(&envelope).unwrap_err();

        match err {
            RelayError::UnrecognizedEventType(identifier) => {
                assert_eq!(identifier, "bogus-event");
            }
            other => panic!("expected UnrecognizedEventType, got {other:?}"),
        }
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_type_is_rejected() {
        let (dispatcher, invocations) = counting_dispatcher();
        let envelope = envelope_for("", json!({}));

        let err = dispatcher.handle(&envelope).unwrap_err();

        assert!(matches!(err, RelayError::UnrecognizedEventType(id) if id.is_empty()));
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn decode_failure_skips_callback_and_carries_context() {
        let (dispatcher, invocations) = counting_dispatcher();
        let envelope = envelope_for("new-artifact", json!({ "tag": 42 }))
            .with_correlation_context("ctx-7");

        let err = dispatcher.handle(&envelope).unwrap_err();

        match err {
            RelayError::PayloadDecode {
                event_type,
                correlation_context,
                ..
            } => {
                assert_eq!(event_type, EventType::NewArtifact);
                assert_eq!(correlation_context.as_deref(), Some("ctx-7"));
            }
            other => panic!("expected PayloadDecode, got {other:?}"),
        }
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn missing_callback_fails_after_decode() {
        let dispatcher = EventDispatcher::new();
        let envelope = envelope_for("problem", json!({ "State": "OPEN" }));

        let err = dispatcher.handle(&envelope).unwrap_err();
        assert!(matches!(err, RelayError::NoCallbackRegistered));

        // An undecodable payload still reports the decode failure, not the
        // missing callback.
        let envelope = envelope_for("problem", json!({ "State": 1 }));
        let err = dispatcher.handle(&envelope).unwrap_err();
        assert!(matches!(err, RelayError::PayloadDecode { .. }));
    }

    #[test]
    fn callback_error_passes_through_verbatim() {
        let dispatcher =
            EventDispatcher::with_callback(|_payload| Err("downstream rejected".into()));
        let envelope = envelope_for("tests-finished", json!({}));

        let err = dispatcher.handle(&envelope).unwrap_err();

        match err {
            RelayError::Callback(inner) => {
                assert_eq!(inner.to_string(), "downstream rejected");
            }
            other => panic!("expected Callback, got {other:?}"),
        }
    }

    #[test]
    fn registration_is_last_writer_wins() {
        let dispatcher = EventDispatcher::new();
        assert!(!dispatcher.has_callback());

        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let count = first.clone();
        dispatcher.register_callback(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        let count = second.clone();
        dispatcher.register_callback(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        assert!(dispatcher.has_callback());

        let envelope = envelope_for("deployment-finished", json!({}));
        dispatcher.handle(&envelope).unwrap();

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
