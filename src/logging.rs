// src/logging.rs
// =============================================================================
// Sets up the tracing subscriber.
//
// - stderr, one line per event, so the results file and stdout stay clean
// - DEBUG with --verbose, INFO otherwise
// - LOGLEVEL (e.g. "debug" or "wp_user_probe=trace") overrides both
// - the HTTP stack is capped at warn unless LOGLEVEL says otherwise
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const LOGLEVEL_ENV: &str = "LOGLEVEL";

const QUIET_DEPENDENCIES: [&str; 3] = ["hyper=warn", "reqwest=warn", "rustls=warn"];

pub fn init(verbose: bool) -> Result<()> {
    let filter = build_filter(verbose, std::env::var(LOGLEVEL_ENV).ok().as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))
}

fn build_filter(verbose: bool, loglevel: Option<&str>) -> Result<EnvFilter> {
    if let Some(directives) = loglevel.filter(|value| !value.trim().is_empty()) {
        return EnvFilter::try_new(directives.trim().to_lowercase())
            .map_err(|e| anyhow!("invalid {} value '{}': {}", LOGLEVEL_ENV, directives, e));
    }

    let level = if verbose { "debug" } else { "info" };
    let mut directives = vec![level];
    directives.extend(QUIET_DEPENDENCIES);
    Ok(EnvFilter::new(directives.join(",")))
}
