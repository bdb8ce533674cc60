// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: point it at a domain and it probes that domain
// for WordPress REST endpoints that expose user details.
//
// Several flags fall back to environment variables (clap's `env` feature):
//   DEFAULT_DEBUGGING           -> --verbose
//   RESULT_FILE_NAME            -> --output
//   LIMIT_OF_ATTEMPTS_TO_RETRY  -> --retries
// =============================================================================

use crate::config::{
    ProbeConfig, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT_FILE, DEFAULT_RETRY_BUDGET,
};
use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "wp-user-probe",
    version,
    about = "Find WordPress REST endpoints that leak user details",
    long_about = "wp-user-probe checks a domain for misconfigured WordPress REST endpoints \
                  (/wp-json/wp/v2/users, numbered user IDs, rest_route forms) and writes \
                  every endpoint that answered with JSON to a results file."
)]
pub struct Cli {
    /// Target domain (e.g., example.com)
    ///
    /// A leading http:// or https:// is ignored; the scheme is probed.
    #[arg(short, long)]
    pub domain: String,

    /// Verbose debug messages
    #[arg(
        short,
        long,
        env = "DEFAULT_DEBUGGING",
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Output file name
    #[arg(short, long, env = "RESULT_FILE_NAME", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Attempts per URL before giving up on transport errors
    #[arg(short, long, env = "LIMIT_OF_ATTEMPTS_TO_RETRY", default_value_t = DEFAULT_RETRY_BUDGET)]
    pub retries: u32,

    /// Maximum number of requests in flight at once
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Client-wide timeout in seconds (also used by the scheme probe)
    #[arg(long, default_value_t = 60)]
    pub session_timeout: u64,
}

impl Cli {
    // Turns the parsed flags into the configuration the probe engine reads
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            concurrency: self.concurrency,
            retry_budget: self.retries,
            request_timeout: Duration::from_secs(self.timeout),
            session_timeout: Duration::from_secs(self.session_timeout),
            ..ProbeConfig::default()
        }
    }
}


// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why FalseyValueParser for --verbose?
//    - The flag can also come from DEFAULT_DEBUGGING
//    - With this parser "0", "false", "no", "off" (and an unset variable)
//      mean off; anything else means on
//
// 2. Why PathBuf for --output?
//    - It's a filesystem path, not arbitrary text
//    - PathBuf handles platform-specific separators for us
// -----------------------------------------------------------------------------
