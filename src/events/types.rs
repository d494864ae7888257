//! Event-type identifiers and the decoded payload sum type.

use std::fmt;

use serde::Serialize;

use crate::events::payloads::{
    ConfigurationChangedPayload, DeploymentFinishedPayload, EvaluationDonePayload,
    NewArtifactPayload, ProblemPayload, TestsFinishedPayload,
};

/// The closed set of recognized event types.
///
/// The wire identifier for each variant lives in the schema registry table;
/// adding a type means adding a payload shape and a table entry, nothing
/// here is extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    ConfigurationChanged,
    DeploymentFinished,
    EvaluationDone,
    NewArtifact,
    TestsFinished,
    Problem,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::ConfigurationChanged,
        EventType::DeploymentFinished,
        EventType::EvaluationDone,
        EventType::NewArtifact,
        EventType::TestsFinished,
        EventType::Problem,
    ];

    /// The exact, case-sensitive wire identifier for this event type.
    pub fn identifier(self) -> &'static str {
        match self {
            EventType::ConfigurationChanged => "configuration-changed",
            EventType::DeploymentFinished => "deployment-finished",
            EventType::EvaluationDone => "evaluation-done",
            EventType::NewArtifact => "new-artifact",
            EventType::TestsFinished => "tests-finished",
            EventType::Problem => "problem",
        }
    }

    /// Resolve a wire identifier, or `None` when it is not one of the six.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        crate::registry::schema_for(identifier).map(|schema| schema.event_type)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A decoded payload on its way to the dispatch callback.
///
/// All six shapes flow through the one callback signature as variants of
/// this sum type; the callback matches on whichever events it cares about.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    ConfigurationChanged(ConfigurationChangedPayload),
    DeploymentFinished(DeploymentFinishedPayload),
    EvaluationDone(EvaluationDonePayload),
    NewArtifact(NewArtifactPayload),
    TestsFinished(TestsFinishedPayload),
    Problem(ProblemPayload),
}

impl EventPayload {
    /// The event type this payload was decoded for.
    pub fn event_type(&self) -> EventType {
        match self {
            EventPayload::ConfigurationChanged(_) => EventType::ConfigurationChanged,
            EventPayload::DeploymentFinished(_) => EventType::DeploymentFinished,
            EventPayload::EvaluationDone(_) => EventType::EvaluationDone,
            EventPayload::NewArtifact(_) => EventType::NewArtifact,
            EventPayload::TestsFinished(_) => EventType::TestsFinished,
            EventPayload::Problem(_) => EventType::Problem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_for_every_type() {
        for event_type in EventType::ALL {
            assert_eq!(
                EventType::from_identifier(event_type.identifier()),
                Some(event_type)
            );
        }
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        assert_eq!(EventType::from_identifier("bogus-event"), None);
        assert_eq!(EventType::from_identifier(""), None);
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert_eq!(EventType::from_identifier("Problem"), None);
        assert_eq!(EventType::from_identifier("NEW-ARTIFACT"), None);
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(EventType::EvaluationDone.to_string(), "evaluation-done");
    }

    #[test]
    fn payload_reports_its_event_type() {
        let payload = EventPayload::Problem(ProblemPayload::default());
        assert_eq!(payload.event_type(), EventType::Problem);
    }
}
