// src/probe/orchestrator.rs
// =============================================================================
// Drives a whole candidate list through the gate and the fetch workers.
//
// One worker future is created per URL up front; the gate, not the number of
// futures, decides how many talk to the network at once. join_all hands the
// reports back in input order no matter which finished first, and a worker
// that comes back empty has no effect on its siblings.
//
// The HTTP client (and its connection pool) lives exactly as long as one
// call to scan(): it is built at the top and dropped on return.
// =============================================================================

use super::gate::ConcurrencyGate;
use super::outcome::{ScanReport, WorkerReport};
use super::worker;
use crate::config::ProbeConfig;
use crate::error::{Error, Result};
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, info};

// Builds the client shared read-only by every worker of a scan
pub fn build_client(config: &ProbeConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.session_timeout)
        .user_agent(config.user_agent.as_str())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(Error::Client)
}

// Probes every URL and returns one outcome per URL, in input order
pub async fn scan(urls: &[String], config: &ProbeConfig) -> Result<ScanReport> {
    config.validate()?;

    let client = build_client(config)?;
    let gate = ConcurrencyGate::new(config.concurrency);

    info!(
        "Probing {} candidate(s) with concurrency {} and retry budget {}",
        urls.len(),
        gate.capacity(),
        config.retry_budget
    );

    let workers = urls
        .iter()
        .map(|url| worker::fetch(&client, &gate, config, url));
    let reports: Vec<WorkerReport> = join_all(workers).await;

    let report = ScanReport::from_workers(reports);
    debug!("Number of failed attempts: {}", report.failed_attempts);
    info!(
        "Scan finished: {} of {} candidate(s) exposed data",
        report.exposed_count(),
        urls.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn released_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_empty_candidate_list() {
        let report = scan(&[], &ProbeConfig::default()).await.unwrap();
        assert!(report.outcomes.is_empty());
        assert_eq!(report.failed_attempts, 0);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let config = ProbeConfig { concurrency: 0, ..ProbeConfig::default() };
        let result = scan(&["http://127.0.0.1/".to_string()], &config).await;
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_outcomes_follow_input_order() {
        let mock_server = MockServer::start().await;

        // The first URL answers last
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"order": "slow"}))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": "fast"})))
            .mount(&mock_server)
            .await;

        let urls = vec![
            format!("{}/slow", mock_server.uri()),
            format!("{}/missing", mock_server.uri()),
            format!("{}/fast", mock_server.uri()),
        ];
        let report = scan(&urls, &ProbeConfig::default()).await.unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert!(report.outcomes[1].is_empty());

        let exposed = report.exposed();
        assert_eq!(exposed.len(), 2);
        assert_eq!(exposed[0].url, urls[0]);
        assert_eq!(exposed[1].url, urls[2]);
    }

    #[tokio::test]
    async fn test_failing_url_does_not_affect_others() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .mount(&mock_server)
            .await;

        let config = ProbeConfig {
            retry_budget: 3,
            request_timeout: Duration::from_millis(500),
            ..ProbeConfig::default()
        };
        let urls = vec![
            format!("http://127.0.0.1:{}/wp-json/wp/v2/users", released_port()),
            format!("{}/wp-json/wp/v2/users", mock_server.uri()),
            "/wp-json/wp/v2/users/1".to_string(),
        ];
        let report = scan(&urls, &config).await.unwrap();

        assert_eq!(report.failed_attempts, 3);
        assert!(report.outcomes[0].is_empty());
        assert!(!report.outcomes[1].is_empty());
        assert!(report.outcomes[2].is_empty());
    }

    #[tokio::test]
    async fn test_small_gate_still_completes_every_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(20)
            .mount(&mock_server)
            .await;

        let config = ProbeConfig { concurrency: 2, ..ProbeConfig::default() };
        let urls: Vec<String> = (0..20)
            .map(|i| format!("{}/wp-json/wp/v2/users/{}", mock_server.uri(), i))
            .collect();
        let report = scan(&urls, &config).await.unwrap();

        assert_eq!(report.exposed_count(), 20);
    }
}
