// src/probe/mod.rs
// =============================================================================
// The probing engine.
//
// Submodules:
// - gate: bounds how many requests are in flight at once
// - worker: fetches one URL with retries and classifies the result
// - orchestrator: fans the candidate list out over workers, collects reports
// - outcome: the values that flow between them
// =============================================================================

mod gate;
mod orchestrator;
mod outcome;
mod worker;

pub use orchestrator::scan;
pub use outcome::{ExposedEndpoint, ScanReport};
