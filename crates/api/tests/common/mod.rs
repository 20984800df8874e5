use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use jusho_api::config::{LogFormat, ServerConfig};
use jusho_api::router::build_app_router;
use jusho_api::state::AppState;
use jusho_core::FieldValidator;
use jusho_db::repositories::{AddressMasterRepo, PostalMasterRepo};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        lookup_timeout_ms: 2000,
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Fixed "today" so birth-date rules are deterministic.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Build the full application router over `pool`, with the same middleware
/// stack `main.rs` uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state =
        AppState::new(pool, config.clone()).with_validator(FieldValidator::with_today(today()));
    build_app_router(state, &config)
}

/// Seed one postal-master row and its address-master rows.
pub async fn seed_shinjuku(pool: &PgPool) {
    PostalMasterRepo::upsert(pool, "1600023", "東京都", "新宿区西新宿")
        .await
        .unwrap();
    AddressMasterRepo::create(pool, "1600023", "東京都", "新宿区", "以下に掲載がない場合")
        .await
        .unwrap();
    AddressMasterRepo::create(pool, "1600023", "東京都", "新宿区", "西新宿（次のビルを除く）")
        .await
        .unwrap();
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
