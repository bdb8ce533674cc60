// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Work out whether the domain speaks https or http
// 3. Generate the candidate endpoint list and probe it concurrently
// 4. Write every endpoint that leaked JSON to the results file
// 5. Exit with 0 on success, 1 on any fatal error
//
// Individual URL failures never stop the scan. Only setup problems
// (arguments, logging, client construction) and writing the results file
// are fatal.
// =============================================================================

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod probe;
mod targets;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::ProbeConfig;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let started = Instant::now();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            if tracing::dispatcher::has_been_set() {
                error!("Failed with: {:#}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            1
        }
    };

    debug!("Time consumption: {:.3}s", started.elapsed().as_secs_f64());
    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    debug!("Main started");

    let config = cli.probe_config();
    config.validate().context("invalid probe settings")?;

    let found = scan_domain(&cli.domain, &config, &cli.output).await?;

    println!("✅ {} exposed endpoint(s) written to {}", found, cli.output.display());
    Ok(())
}

// The whole pipeline for one domain
//
// Returns how many exposed endpoints were written to `output`.
async fn scan_domain(domain: &str, config: &ProbeConfig, output: &Path) -> Result<usize> {
    let domain = targets::normalize_domain(domain);

    let scheme = targets::probe_scheme(domain, config.session_timeout)
        .await
        .context("scheme probe failed")?;
    debug!("Target scheme: {}", scheme);

    let target = targets::resolve_target(scheme, domain)?;
    debug!("Target: {}", target);

    let candidates = targets::candidate_urls(&target);
    println!("🔍 Probing {} candidate endpoint(s) on {}", candidates.len(), target);

    let report = probe::scan(&candidates, config).await?;
    let exposed = report.exposed();

    output::write_results(output, &exposed)
        .with_context(|| format!("could not save results for {}", target))?;

    Ok(exposed.len())
}
