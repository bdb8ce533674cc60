// src/probe/outcome.rs
// =============================================================================
// Values produced by probing.
//
// A ProbeOutcome is either a fully populated ExposedEndpoint or the Empty
// marker. There is no half-filled state: a status code without a decoded
// body never leaves the worker.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An endpoint that answered with a non-terminal status and a JSON body.
///
/// Serialized as `{"url": ..., "status_code": ..., "body": ...}` in the
/// results file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposedEndpoint {
    pub url: String,
    pub status_code: u16,
    pub body: Value,
}

/// What probing one candidate URL produced
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Exposed(ExposedEndpoint),
    /// Terminal status, exhausted retries or a rejected request
    Empty,
}

impl ProbeOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, ProbeOutcome::Empty)
    }

    pub fn into_exposed(self) -> Option<ExposedEndpoint> {
        match self {
            ProbeOutcome::Exposed(endpoint) => Some(endpoint),
            ProbeOutcome::Empty => None,
        }
    }
}

/// One fetch worker's result: the outcome plus how many attempts failed
/// with a retryable error along the way
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerReport {
    pub outcome: ProbeOutcome,
    pub failed_attempts: u32,
}

/// Everything a scan produced, one outcome per candidate in input order
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub outcomes: Vec<ProbeOutcome>,
    /// Sum of every worker's failed attempts, for diagnostics only
    pub failed_attempts: u64,
}

impl ScanReport {
    // Folds worker reports (already in input order) into a scan report
    pub fn from_workers(reports: Vec<WorkerReport>) -> Self {
        let failed_attempts = reports.iter().map(|r| u64::from(r.failed_attempts)).sum();
        let outcomes = reports.into_iter().map(|r| r.outcome).collect();
        Self { outcomes, failed_attempts }
    }

    pub fn exposed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_empty()).count()
    }

    /// Drops the empty markers, keeping the input order of the rest
    pub fn exposed(self) -> Vec<ExposedEndpoint> {
        self.outcomes
            .into_iter()
            .filter_map(ProbeOutcome::into_exposed)
            .collect()
    }
}
