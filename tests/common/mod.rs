#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use class_booking_service::adapters::memory::{
    InMemoryBookingStore, InMemoryClassStore, InMemoryMemberStore, InMemoryProbe,
};
use class_booking_service::api::handlers::AppState;
use class_booking_service::api::router::create_router;
use class_booking_service::application::ServiceDependencies;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates a test pool and applies the migrations
///
/// Returns `None` when DATABASE_URL is unset so Postgres-backed tests can be
/// skipped on machines without a database.
pub async fn create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Empties every table
pub async fn cleanup_database(pool: &PgPool) {
    sqlx::query("TRUNCATE TABLE bookings, classes, members")
        .execute(pool)
        .await
        .expect("Failed to truncate tables");
}

/// Router wired to fresh in-memory stores
///
/// The probe is returned so tests can simulate a store outage.
pub fn in_memory_app() -> (Router, Arc<InMemoryProbe>) {
    let probe = Arc::new(InMemoryProbe::new());

    let service_deps = ServiceDependencies {
        member_store: Arc::new(InMemoryMemberStore::new()),
        class_store: Arc::new(InMemoryClassStore::new()),
        booking_store: Arc::new(InMemoryBookingStore::new()),
    };

    (app_with(service_deps, probe.clone()), probe)
}

/// Router wired to the given dependencies
pub fn app_with(service_deps: ServiceDependencies, store_probe: Arc<InMemoryProbe>) -> Router {
    create_router(Arc::new(AppState::new(service_deps, store_probe)))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Asserts the status and returns the `error` code of the body
pub async fn expect_error(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    let body: Value = read_json(response).await;
    assert!(body["message"].is_string());
    body["error"].as_str().unwrap().to_string()
}
