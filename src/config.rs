// src/config.rs
// =============================================================================
// Probe configuration and its defaults.
//
// A ProbeConfig is built once (from the CLI) and then only read. Every worker
// in a scan sees the same values, so nothing here is mutated mid-scan.
// =============================================================================

use crate::error::{Error, Result};
use std::time::Duration;

/// How many probes may have a request in flight at once
pub const DEFAULT_CONCURRENCY: usize = 51;

/// Attempts allowed per candidate URL before giving up
pub const DEFAULT_RETRY_BUDGET: u32 = 5;

/// Timeout applied to every candidate GET
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client-wide timeout, also used by the scheme probe
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(60);

/// Where results land when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "results.json";

/// Status codes that prove an endpoint is not exposed
pub const TERMINAL_STATUS_CODES: [u16; 4] = [400, 403, 404, 500];

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/85.0.4183.102 Safari/537.36";

// Settings shared by the scheme prober, the workers and the orchestrator
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Capacity of the concurrency gate
    pub concurrency: usize,
    /// Attempts per URL; only retryable transport failures consume one
    pub retry_budget: u32,
    pub request_timeout: Duration,
    pub session_timeout: Duration,
    /// Responses with one of these codes end the URL with an empty outcome
    pub terminal_statuses: Vec<u16>,
    pub user_agent: String,
    /// Candidate probes skip certificate checks, targets are often self-signed
    pub accept_invalid_certs: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            retry_budget: DEFAULT_RETRY_BUDGET,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            session_timeout: DEFAULT_SESSION_TIMEOUT,
            terminal_statuses: TERMINAL_STATUS_CODES.to_vec(),
            user_agent: USER_AGENT.to_string(),
            accept_invalid_certs: true,
        }
    }
}

impl ProbeConfig {
    /// Returns true when `status` means "checked, not exposed"
    pub fn is_terminal(&self, status: u16) -> bool {
        self.terminal_statuses.contains(&status)
    }

    // Rejects values that would make a scan meaningless or hang forever
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.retry_budget == 0 {
            return Err(Error::InvalidConfig(
                "retry budget must be at least 1".to_string(),
            ));
        }
        if self.request_timeout.is_zero() || self.session_timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::InvalidConfig("user agent must not be empty".to_string()));
        }
        Ok(())
    }
}
