// src/targets/mod.rs
// =============================================================================
// Everything needed before probing starts.
//
// Submodules:
// - scheme: decides http vs https for the domain and builds the base URL
// - candidates: expands the base URL into the list of endpoints to probe
// =============================================================================

mod candidates;
mod scheme;

pub use candidates::{candidate_urls, strip_scheme};
pub use scheme::{normalize_domain, probe_scheme, resolve_target, Scheme};
