use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use price_api::error::ErrorBody;
use price_api::{router, AppState, ForecastResponse};
use price_store::PriceStore;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tower::ServiceExt;

// Helper function to build a router over a small three-year table
fn create_test_app() -> axum::Router {
    let mut file = NamedTempFile::new().unwrap();

    let months = 36;
    let header: Vec<String> = (0..months).map(|i| format!("m{}", i)).collect();
    writeln!(file, "Commodities,{}", header.join(",")).unwrap();

    // Trend plus yearly seasonality plus a deterministic irregular component
    let onion: Vec<String> = (0..months)
        .map(|i| {
            let value = 100.0
                + 0.9 * i as f64
                + 15.0 * (2.0 * std::f64::consts::PI * (i % 12) as f64 / 12.0).sin()
                + ((i * 17 + 7) % 13) as f64;
            format!("{:.2}", value)
        })
        .collect();
    writeln!(file, "Onion,{}", onion.join(",")).unwrap();

    let potato: Vec<String> = (0..months)
        .map(|i| format!("{:.2}", 60.0 + 0.4 * i as f64 + ((i * 11 + 3) % 7) as f64))
        .collect();
    writeln!(file, "Potato,{}", potato.join(",")).unwrap();

    let store = PriceStore::from_csv(file.path()).unwrap();
    router(AppState::new(store, Duration::from_secs(30)))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_commodities_returns_source_order() {
    let app = create_test_app();
    let (status, body) = get(app, "/commodities").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(names, vec!["Onion".to_string(), "Potato".to_string()]);
}

#[tokio::test]
async fn test_forecast_shape_end_to_end() {
    let app = create_test_app();
    let (status, body) = get(app, "/forecast/Onion").await;

    assert_eq!(status, StatusCode::OK);
    let response: ForecastResponse = serde_json::from_slice(&body).unwrap();

    // Historical segment covers the full 36-month span
    assert_eq!(response.historical.len(), 36);
    assert_eq!(
        response.historical[0].date,
        NaiveDate::from_ymd_opt(2014, 1, 31).unwrap()
    );
    assert_eq!(
        response.historical[35].date,
        NaiveDate::from_ymd_opt(2016, 12, 31).unwrap()
    );

    // Forecast segment: 60 months from the fixed 2025-01 origin
    assert_eq!(response.forecast.len(), 60);
    assert_eq!(
        response.forecast[0].date,
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    );
    assert_eq!(
        response.forecast[59].date,
        NaiveDate::from_ymd_opt(2029, 12, 31).unwrap()
    );
    for pair in response.forecast.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }

    assert!(response.rmse >= 0.0);
}

#[tokio::test]
async fn test_forecast_is_deterministic_across_requests() {
    let app = create_test_app();

    let (_, first) = get(app.clone(), "/forecast/Potato").await;
    let (_, second) = get(app, "/forecast/Potato").await;

    let first: ForecastResponse = serde_json::from_slice(&first).unwrap();
    let second: ForecastResponse = serde_json::from_slice(&second).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_commodity_is_404() {
    let app = create_test_app();
    let (status, body) = get(app, "/forecast/Tomato").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert!(error.error.contains("Tomato"));
}

#[tokio::test]
async fn test_root_banner() {
    let app = create_test_app();
    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}
