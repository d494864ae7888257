//! # Payload Schema Registry
//!
//! The closed mapping from wire-level event-type identifiers to payload
//! shapes. Dispatch is data-driven: one static table entry per recognized
//! identifier, each pairing the identifier with the decode function for its
//! shape. Adding an event type is a new payload struct plus one table entry.
//!
//! The registry is immutable and read-only after construction; lookups are
//! safe from any thread without synchronization.

use crate::events::payloads::{
    ConfigurationChangedPayload, DeploymentFinishedPayload, EvaluationDonePayload,
    NewArtifactPayload, ProblemPayload, TestsFinishedPayload,
};
use crate::events::{EventPayload, EventType};

/// Decode function turning raw payload bytes into a decoded payload variant.
type DecodeFn = fn(&[u8]) -> serde_json::Result<EventPayload>;

/// Shape descriptor for one recognized event type.
pub struct PayloadSchema {
    /// The event type this schema decodes for.
    pub event_type: EventType,
    /// Exact, case-sensitive wire identifier.
    pub identifier: &'static str,
    decode: DecodeFn,
}

impl PayloadSchema {
    /// Decode raw payload bytes into this schema's shape.
    ///
    /// Standard structured-decode semantics: unknown fields ignored, missing
    /// fields zero-valued, type mismatches on typed fields fail; loosely
    /// typed and deferred/raw fields never fail regardless of JSON shape.
    pub fn decode(&self, raw_payload: &[u8]) -> serde_json::Result<EventPayload> {
        (self.decode)(raw_payload)
    }
}

fn decode_configuration_changed(raw: &[u8]) -> serde_json::Result<EventPayload> {
    serde_json::from_slice::<ConfigurationChangedPayload>(raw)
        .map(EventPayload::ConfigurationChanged)
}

fn decode_deployment_finished(raw: &[u8]) -> serde_json::Result<EventPayload> {
    serde_json::from_slice::<DeploymentFinishedPayload>(raw).map(EventPayload::DeploymentFinished)
}

fn decode_evaluation_done(raw: &[u8]) -> serde_json::Result<EventPayload> {
    serde_json::from_slice::<EvaluationDonePayload>(raw).map(EventPayload::EvaluationDone)
}

fn decode_new_artifact(raw: &[u8]) -> serde_json::Result<EventPayload> {
    serde_json::from_slice::<NewArtifactPayload>(raw).map(EventPayload::NewArtifact)
}

fn decode_tests_finished(raw: &[u8]) -> serde_json::Result<EventPayload> {
    serde_json::from_slice::<TestsFinishedPayload>(raw).map(EventPayload::TestsFinished)
}

fn decode_problem(raw: &[u8]) -> serde_json::Result<EventPayload> {
    serde_json::from_slice::<ProblemPayload>(raw).map(EventPayload::Problem)
}

static SCHEMAS: [PayloadSchema; 6] = [
    PayloadSchema {
        event_type: EventType::ConfigurationChanged,
        identifier: "configuration-changed",
        decode: decode_configuration_changed,
    },
    PayloadSchema {
        event_type: EventType::DeploymentFinished,
        identifier: "deployment-finished",
        decode: decode_deployment_finished,
    },
    PayloadSchema {
        event_type: EventType::EvaluationDone,
        identifier: "evaluation-done",
        decode: decode_evaluation_done,
    },
    PayloadSchema {
        event_type: EventType::NewArtifact,
        identifier: "new-artifact",
        decode: decode_new_artifact,
    },
    PayloadSchema {
        event_type: EventType::TestsFinished,
        identifier: "tests-finished",
        decode: decode_tests_finished,
    },
    PayloadSchema {
        event_type: EventType::Problem,
        identifier: "problem",
        decode: decode_problem,
    },
];

/// Look up the schema for a wire identifier.
///
/// Returns `None` for anything outside the closed set of six, including the
/// empty string. Matching is exact and case-sensitive.
pub fn schema_for(identifier: &str) -> Option<&'static PayloadSchema> {
    SCHEMAS.iter().find(|schema| schema.identifier == identifier)
}

/// All registered schemas, in registration order.
pub fn schemas() -> &'static [PayloadSchema] {
    &SCHEMAS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_recognized_identifier_has_a_schema() {
        for event_type in EventType::ALL {
            let schema = schema_for(event_type.identifier())
                .unwrap_or_else(|| panic!("missing schema for {event_type}"));
            assert_eq!(schema.event_type, event_type);
            assert_eq!(schema.identifier, event_type.identifier());
        }
    }

    #[test]
    fn registry_is_closed() {
        assert_eq!(schemas().len(), EventType::ALL.len());
        assert!(schema_for("bogus-event").is_none());
        assert!(schema_for("").is_none());
        assert!(schema_for("lifecycle.events.problem").is_none());
    }

    #[test]
    fn decode_produces_the_matching_variant() {
        let schema = schema_for("new-artifact").unwrap();
        let payload = schema.decode(br#"{"service":"cart"}"#).unwrap();

        match payload {
            EventPayload::NewArtifact(inner) => assert_eq!(inner.service, "cart"),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn decode_surfaces_structural_mismatch() {
        let schema = schema_for("tests-finished").unwrap();
        let result = schema.decode(br#"{"service":[1,2]}"#);
        assert!(result.is_err());
    }
}
