// src/probe/worker.rs
// =============================================================================
// The fetch worker: takes one candidate URL to completion.
//
// Flow for one URL:
// 1. Take a slot from the concurrency gate (held until we return)
// 2. GET the URL, up to `retry_budget` times
//    - non-terminal status + JSON body  -> Exposed, done
//    - terminal status (400/403/404/500) -> Empty, done (no retry)
//    - transport failure                -> count it, try again
//    - rejected request / non-JSON body -> Empty, done
// 3. Budget used up -> Empty
//
// The worker shares the client and the gate with its siblings and nothing
// else. Its failure count travels back in the WorkerReport.
// =============================================================================

use super::gate::ConcurrencyGate;
use super::outcome::{ExposedEndpoint, ProbeOutcome, WorkerReport};
use crate::config::ProbeConfig;
use crate::error::FetchError;
use reqwest::Client;
use tracing::{debug, info, warn};

// What a single completed exchange amounted to
#[derive(Debug)]
enum Attempt {
    Exposed(ExposedEndpoint),
    Terminal(u16),
}

pub async fn fetch(
    client: &Client,
    gate: &ConcurrencyGate,
    config: &ProbeConfig,
    url: &str,
) -> WorkerReport {
    debug!("Request to {} queued", url);

    let _slot = match gate.acquire().await {
        Ok(slot) => slot,
        Err(e) => {
            warn!("Skipping {}: {}", url, e);
            return WorkerReport { outcome: ProbeOutcome::Empty, failed_attempts: 0 };
        }
    };

    let mut attempts_remaining = config.retry_budget;
    let mut failed_attempts = 0;

    while attempts_remaining > 0 {
        match attempt(client, config, url).await {
            Ok(Attempt::Exposed(endpoint)) => {
                info!(
                    "{} exposed user data (HTTP {}, retries left: {})",
                    url, endpoint.status_code, attempts_remaining
                );
                return WorkerReport {
                    outcome: ProbeOutcome::Exposed(endpoint),
                    failed_attempts,
                };
            }
            Ok(Attempt::Terminal(status)) => {
                debug!("{} not exposed (HTTP {})", url, status);
                return WorkerReport { outcome: ProbeOutcome::Empty, failed_attempts };
            }
            Err(e) if e.is_retryable() => {
                failed_attempts += 1;
                attempts_remaining -= 1;
                warn!("Failed attempt {} for {}: {}", failed_attempts, url, e);
            }
            Err(e) => {
                debug!("Giving up on {}: {}", url, e);
                return WorkerReport { outcome: ProbeOutcome::Empty, failed_attempts };
            }
        }
    }

    debug!("{} exhausted its retry budget", url);
    WorkerReport { outcome: ProbeOutcome::Empty, failed_attempts }
}

// One GET against `url`
//
// The body is read as raw bytes first: a connection dropped mid-body is a
// transport failure, while bytes that aren't JSON are a decode failure.
async fn attempt(client: &Client, config: &ProbeConfig, url: &str) -> Result<Attempt, FetchError> {
    let response = client
        .get(url)
        .timeout(config.request_timeout)
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status = response.status().as_u16();
    if config.is_terminal(status) {
        return Ok(Attempt::Terminal(status));
    }

    let bytes = response.bytes().await.map_err(FetchError::from_reqwest)?;
    let body = serde_json::from_slice(&bytes).map_err(FetchError::Decode)?;

    Ok(Attempt::Exposed(ExposedEndpoint {
        url: url.to_string(),
        status_code: status,
        body,
    }))
}
