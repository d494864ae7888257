//! Payload shapes for the recognized lifecycle event types.
//!
//! One struct per event-type identifier. Field names on the wire are fixed
//! for compatibility with existing emitters: the simple shapes use
//! all-lowercase names (`githuborg`, `teststrategy`, ...), the problem shape
//! uses capitalized names (`ProblemID`, `PID`, ...) as produced by the
//! monitoring webhook integration. Missing fields decode to their zero
//! values; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

/// Payload for a changed service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationChangedPayload {
    pub service: String,
    pub image: String,
    pub tag: String,
    pub project: String,
    pub stage: String,
    #[serde(rename = "githuborg")]
    pub github_org: String,
    #[serde(rename = "teststrategy")]
    pub test_strategy: String,
    #[serde(rename = "deploymentstrategy")]
    pub deployment_strategy: String,
}

/// Payload for a completed deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentFinishedPayload {
    #[serde(rename = "githuborg")]
    pub github_org: String,
    pub project: String,
    #[serde(rename = "teststrategy")]
    pub test_strategy: String,
    #[serde(rename = "deploymentstrategy")]
    pub deployment_strategy: String,
    pub stage: String,
    pub service: String,
    pub image: String,
    pub tag: String,
}

/// Payload for a completed test run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestsFinishedPayload {
    #[serde(rename = "githuborg")]
    pub github_org: String,
    pub project: String,
    #[serde(rename = "teststrategy")]
    pub test_strategy: String,
    #[serde(rename = "deploymentstrategy")]
    pub deployment_strategy: String,
    pub stage: String,
    pub service: String,
    pub image: String,
    pub tag: String,
}

/// Payload for receipt of a new build artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewArtifactPayload {
    #[serde(rename = "githuborg")]
    pub github_org: String,
    pub project: String,
    #[serde(rename = "teststrategy")]
    pub test_strategy: String,
    #[serde(rename = "deploymentstrategy")]
    pub deployment_strategy: String,
    pub stage: String,
    pub service: String,
    pub image: String,
    pub tag: String,
}

/// Payload for a completed quality evaluation.
///
/// The nested detail record comes back from the metrics source and is not
/// guaranteed to be strongly typed, especially within `indicatorResults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationDonePayload {
    #[serde(rename = "githuborg")]
    pub github_org: String,
    pub project: String,
    #[serde(rename = "teststrategy")]
    pub test_strategy: String,
    #[serde(rename = "deploymentstrategy")]
    pub deployment_strategy: String,
    pub stage: String,
    pub service: String,
    pub image: String,
    pub tag: String,
    #[serde(rename = "evaluationpassed")]
    pub evaluation_passed: bool,
    #[serde(rename = "evaluationdetails")]
    pub evaluation_details: EvaluationDetails,
}

/// Detail record of one evaluation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationDetails {
    pub options: EvaluationWindow,
    #[serde(rename = "totalScore")]
    pub total_score: i64,
    pub objectives: ObjectiveCounts,
    #[serde(rename = "indicatorResults")]
    pub indicator_results: Vec<IndicatorResult>,
    pub result: String,
}

/// Time window the evaluation covered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationWindow {
    #[serde(rename = "timeStart")]
    pub time_start: i64,
    #[serde(rename = "timeEnd")]
    pub time_end: i64,
}

/// Pass/warning thresholds the evaluation was scored against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveCounts {
    pub pass: i64,
    pub warning: i64,
}

/// Score and violations for a single indicator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorResult {
    pub id: String,
    pub violations: Vec<Violation>,
    pub score: i64,
}

/// One threshold violation reported by an indicator.
///
/// `value` and `threshold` accept any JSON shape the metrics source sends.
/// `key` is kept as raw JSON and parsed later, if ever.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Violation {
    pub value: Value,
    pub key: Option<Box<RawValue>>,
    pub breach: String,
    pub threshold: Value,
}

/// Payload for a detected problem, primarily created via the monitoring
/// webhook integration. `ProblemDetails` and `ImpactedEntities` stay raw
/// JSON; their schema is owned by the integration and may vary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemPayload {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "ProblemID")]
    pub problem_id: String,
    #[serde(rename = "PID")]
    pub pid: String,
    #[serde(rename = "ProblemTitle")]
    pub problem_title: String,
    #[serde(rename = "ProblemDetails")]
    pub problem_details: Option<Box<RawValue>>,
    #[serde(rename = "ImpactedEntities")]
    pub impacted_entities: Option<Box<RawValue>>,
    #[serde(rename = "ImpactedEntity")]
    pub impacted_entity: String,
}
