pub mod envelope;
pub mod payloads;
pub mod types;

// Re-export key types for convenience
pub use envelope::Envelope;
pub use payloads::{
    ConfigurationChangedPayload, DeploymentFinishedPayload, EvaluationDetails,
    EvaluationDonePayload, EvaluationWindow, IndicatorResult, NewArtifactPayload,
    ObjectiveCounts, ProblemPayload, TestsFinishedPayload, Violation,
};
pub use types::{EventPayload, EventType};
