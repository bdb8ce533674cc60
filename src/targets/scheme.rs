// src/targets/scheme.rs
// =============================================================================
// Works out whether a target speaks HTTPS or plain HTTP, then builds the
// base URL the candidate generator starts from.
//
// The probe is a single best-effort HTTPS GET against the bare domain:
// - any completed exchange, whatever the status code, means HTTPS works
// - any transport failure (refused, TLS handshake, timeout) means HTTP
// There are no retries here.
// =============================================================================

use crate::error::{Error, Result};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Strips an accidental scheme and trailing slashes from user input
//
// "https://example.com/" and "example.com" both become "example.com".
pub fn normalize_domain(domain: &str) -> &str {
    super::strip_scheme(domain.trim()).trim_end_matches('/')
}

// Probes https://{domain} once and reports which scheme to use
//
// Certificates are verified here, so a broken certificate also falls back
// to plain HTTP.
pub async fn probe_scheme(domain: &str, timeout: Duration) -> Result<Scheme> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(Error::Client)?;

    let url = format!("https://{}", domain);
    match client.get(&url).send().await {
        Ok(response) => {
            debug!("HTTPS probe answered with {}", response.status());
            Ok(Scheme::Https)
        }
        Err(e) => {
            debug!("HTTPS probe to {} failed, falling back to http: {}", url, e);
            Ok(Scheme::Http)
        }
    }
}

// Joins scheme and domain into a validated base URL
//
// Returns the string form without a trailing slash, ready for
// candidate_urls().
pub fn resolve_target(scheme: Scheme, domain: &str) -> Result<String> {
    let raw = format!("{}://{}", scheme, domain);
    let parsed = Url::parse(&raw).map_err(|source| Error::InvalidTarget {
        target: raw.clone(),
        source,
    })?;

    if parsed.host_str().is_none() {
        return Err(Error::InvalidTarget {
            target: raw,
            source: url::ParseError::EmptyHost,
        });
    }

    Ok(raw)
}
