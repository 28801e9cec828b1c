use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant};
use vacancy_stats::config::SuperJobSettings;
use vacancy_stats::{Aggregator, RequestPacer, SuperJobSource, VacancyError};

fn source(server: &MockServer, delay_ms: u64) -> SuperJobSource {
    let settings = SuperJobSettings {
        endpoint: server.url("/2.0/vacancies/"),
        search_prefix: String::new(),
        town: "Moscow".to_string(),
        request_delay_ms: delay_ms,
        ..Default::default()
    };
    SuperJobSource::new(reqwest::Client::new(), settings, "test-token".to_string())
}

#[tokio::test]
async fn test_pages_until_empty_page() -> Result<()> {
    let server = MockServer::start();

    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .header("X-Api-App-Id", "test-token")
            .query_param("keyword", "Python")
            .query_param("town", "Moscow")
            .query_param("period", "30")
            .query_param("catalogues", "48")
            .query_param("page", "0");
        then.status(200).json_body(json!({
            "total": 42,
            "objects": [
                {"payment_from": 100000, "payment_to": 0, "currency": "rub"},
                {"payment_from": 0, "payment_to": 0, "currency": "rub"},
                {"payment_from": 2000, "payment_to": 3000, "currency": "usd"}
            ]
        }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .query_param("keyword", "Python")
            .query_param("page", "1");
        then.status(200).json_body(json!({
            "total": 42,
            "objects": [
                {"payment_from": 0, "payment_to": 100000, "currency": "rub"}
            ]
        }));
    });
    let last = server.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .query_param("keyword", "Python")
            .query_param("page", "2");
        then.status(200).json_body(json!({"total": 42, "objects": []}));
    });

    let stat = Aggregator::new(source(&server, 0))
        .collect_language("Python")
        .await?;

    first.assert();
    second.assert();
    last.assert();
    assert_eq!(stat.vacancies_found, 42);
    assert_eq!(stat.vacancies_processed, 2);
    assert_eq!(stat.average_salary, Some((120_000 + 80_000) / 2));
    Ok(())
}

#[tokio::test]
async fn test_delay_between_page_requests() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/").query_param("page", "0");
        then.status(200).json_body(json!({
            "total": 1,
            "objects": [{"payment_from": 1000, "payment_to": 0, "currency": "rub"}]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/").query_param("page", "1");
        then.status(200).json_body(json!({"total": 1, "objects": []}));
    });

    let started = Instant::now();
    Aggregator::new(source(&server, 80))
        .collect_language("Go")
        .await?;
    assert!(started.elapsed() >= Duration::from_millis(80));

    let started = Instant::now();
    Aggregator::new(source(&server, 80).with_pacer(RequestPacer::disabled()))
        .collect_language("Go")
        .await?;
    assert!(started.elapsed() < Duration::from_millis(80));
    Ok(())
}

#[tokio::test]
async fn test_error_status_aborts() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(500);
    });

    let err = Aggregator::new(source(&server, 0))
        .collect(&["Go"])
        .await
        .unwrap_err();

    mock.assert_hits(1);
    assert!(matches!(err, VacancyError::UnexpectedStatus { status: 500, .. }));
}
