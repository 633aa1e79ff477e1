//! Types for harness results and run summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single spec and, if it failed, why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecCase {
    pub description: String,

    /// Present only for failing specs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SpecCase {
    pub fn passed(&self) -> bool {
        self.error_message.is_none()
    }
}

/// A named group of specs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub description: String,

    /// Harness query that reruns only this suite
    pub filter: String,

    pub specs: Vec<SpecCase>,
}

/// Aggregate counters reported by the harness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "specs")]
    pub total_specs: u64,

    pub failures: u64,

    #[serde(rename = "time")]
    pub elapsed_seconds: f64,
}

/// What one harness run produced
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The harness reported an error instead of results
    ServerError { message: String },

    /// The harness ran the specs
    SpecResult { suites: Vec<Suite>, stats: Stats },

    /// The output did not match either payload shape
    ParseFailure { reason: String },
}

impl RunOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            RunOutcome::ServerError { .. } => OutcomeKind::ServerError,
            RunOutcome::SpecResult { .. } => OutcomeKind::SpecResult,
            RunOutcome::ParseFailure { .. } => OutcomeKind::ParseFailure,
        }
    }
}

/// Outcome category recorded in a run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    ServerError,
    SpecResult,
    ParseFailure,
    /// The browser process could not be started or read
    ProcessFailure,
}

/// Result of a single request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestReport {
    /// Spec group filter (None for the full suite)
    pub filter: Option<String>,

    pub outcome: OutcomeKind,

    /// Text sent to the console
    pub message: String,

    pub passed: bool,
}

/// Result of a complete runner invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// True only if every request passed
    pub success: bool,

    pub started_at: DateTime<Utc>,

    pub finished_at: DateTime<Utc>,

    /// One entry per resolved request, in run order
    pub requests: Vec<RequestReport>,
}
