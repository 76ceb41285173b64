use axum::http::StatusCode;
use class_booking_service::adapters::memory::{
    InMemoryBookingStore, InMemoryClassStore, InMemoryProbe,
};
use class_booking_service::api::types::*;
use class_booking_service::application::ServiceDependencies;
use class_booking_service::domain::{
    MemberId, Page,
    commands::UpdateMember,
    member::{Member, NewMember},
};
use class_booking_service::ports::{MemberStore, Result as StoreResult, StoreError};
use async_trait::async_trait;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;
use uuid::Uuid;

mod common;

use common::{expect_error, in_memory_app, read_json, send, send_raw};

// ============================================================================
// Helpers
// ============================================================================

async fn create_member(app: &axum::Router, name: &str) -> MemberResponse {
    let response = send(app, "POST", "/members", Some(json!({ "name": name }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}

async fn create_class(
    app: &axum::Router,
    name: &str,
    start_date: &str,
    end_date: &str,
    capacity: i32,
) -> ClassResponse {
    let response = send(
        app,
        "POST",
        "/classes",
        Some(json!({
            "name": name,
            "start_date": start_date,
            "end_date": end_date,
            "capacity": capacity,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}

/// Member store whose every call fails with a backend error
struct BrokenMemberStore;

fn outage() -> StoreError {
    StoreError::backend(std::io::Error::other("connection reset"))
}

#[async_trait]
impl MemberStore for BrokenMemberStore {
    async fn add(&self, _member: NewMember) -> StoreResult<Member> {
        Err(outage())
    }

    async fn get_by_id(&self, _member_id: MemberId) -> StoreResult<Member> {
        Err(outage())
    }

    async fn update(&self, _member_id: MemberId, _update: UpdateMember) -> StoreResult<Member> {
        Err(outage())
    }

    async fn delete(&self, _member_id: MemberId) -> StoreResult<()> {
        Err(outage())
    }

    async fn list(&self, _page: Page) -> StoreResult<Vec<Member>> {
        Err(outage())
    }
}

fn app_with_broken_members() -> axum::Router {
    common::app_with(
        ServiceDependencies {
            member_store: Arc::new(BrokenMemberStore),
            class_store: Arc::new(InMemoryClassStore::new()),
            booking_store: Arc::new(InMemoryBookingStore::new()),
        },
        Arc::new(InMemoryProbe::new()),
    )
}

// ============================================================================
// Booking flow
// ============================================================================

#[tokio::test]
async fn test_full_booking_flow() {
    let (app, _) = in_memory_app();

    let alice = create_member(&app, "Alice").await;
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.created_at, alice.updated_at);

    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;
    assert_eq!(yoga.capacity, 10);

    // Book
    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({
            "member_id": alice.id,
            "class_id": yoga.id,
            "class_date": "2024-01-15",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let booking: BookingResponse = read_json(response).await;
    assert_eq!(booking.member_id, alice.id);
    assert_eq!(booking.class_id, yoga.id);
    assert_eq!(booking.class_date.to_string(), "2024-01-15");

    // Read back
    let response = send(&app, "GET", &format!("/bookings/{}", booking.id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: BookingResponse = read_json(response).await;
    assert_eq!(fetched, booking);

    // Listed
    let response = send(&app, "GET", "/bookings", None).await;
    let bookings: Vec<BookingResponse> = read_json(response).await;
    assert_eq!(bookings, vec![booking.clone()]);

    // Cancel
    let response = send(&app, "DELETE", &format!("/bookings/{}", booking.id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", &format!("/bookings/{}", booking.id), None).await;
    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "NOT_FOUND");
}

#[rstest]
#[case::first_day("2024-01-01")]
#[case::last_day("2024-01-31")]
#[tokio::test]
async fn test_booking_on_class_boundaries(#[case] class_date: &str) {
    let (app, _) = in_memory_app();
    let alice = create_member(&app, "Alice").await;
    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;

    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "member_id": alice.id, "class_id": yoga.id, "class_date": class_date })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[rstest]
#[case::day_before("2023-12-31")]
#[case::day_after("2024-02-01")]
#[tokio::test]
async fn test_booking_outside_class_range(#[case] class_date: &str) {
    let (app, _) = in_memory_app();
    let alice = create_member(&app, "Alice").await;
    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;

    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "member_id": alice.id, "class_id": yoga.id, "class_date": class_date })),
    )
    .await;

    assert_eq!(
        expect_error(response, StatusCode::UNPROCESSABLE_ENTITY).await,
        "INVALID_CLASS_DATE"
    );

    let bookings: Vec<BookingResponse> = read_json(send(&app, "GET", "/bookings", None).await).await;
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_booking_unknown_member() {
    let (app, _) = in_memory_app();
    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;

    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({
            "member_id": Uuid::new_v4(),
            "class_id": yoga.id,
            "class_date": "2024-01-10",
        })),
    )
    .await;

    assert_eq!(
        expect_error(response, StatusCode::UNPROCESSABLE_ENTITY).await,
        "MEMBER_NOT_FOUND"
    );
}

#[tokio::test]
async fn test_booking_unknown_class() {
    let (app, _) = in_memory_app();
    let alice = create_member(&app, "Alice").await;

    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({
            "member_id": alice.id,
            "class_id": Uuid::new_v4(),
            "class_date": "2024-01-10",
        })),
    )
    .await;

    assert_eq!(
        expect_error(response, StatusCode::UNPROCESSABLE_ENTITY).await,
        "CLASS_NOT_FOUND"
    );
}

#[tokio::test]
async fn test_booking_survives_member_deletion() {
    let (app, _) = in_memory_app();
    let alice = create_member(&app, "Alice").await;
    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;

    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "member_id": alice.id, "class_id": yoga.id, "class_date": "2024-01-05" })),
    )
    .await;
    let booking: BookingResponse = read_json(response).await;

    let response = send(&app, "DELETE", &format!("/members/{}", alice.id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", &format!("/bookings/{}", booking.id), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Members and classes
// ============================================================================

#[tokio::test]
async fn test_member_crud() {
    let (app, _) = in_memory_app();
    let alice = create_member(&app, "Alice").await;

    let response = send(
        &app,
        "PATCH",
        &format!("/members/{}", alice.id),
        Some(json!({ "name": "Alice Smith" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: MemberResponse = read_json(response).await;
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.created_at, alice.created_at);
    assert!(updated.updated_at >= alice.updated_at);

    // Empty patch returns the member as stored
    let response = send(&app, "PATCH", &format!("/members/{}", alice.id), Some(json!({}))).await;
    let unchanged: MemberResponse = read_json(response).await;
    assert_eq!(unchanged, updated);

    let response = send(&app, "DELETE", &format!("/members/{}", alice.id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is still a success
    let response = send(&app, "DELETE", &format!("/members/{}", alice.id), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", &format!("/members/{}", alice.id), None).await;
    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "NOT_FOUND");
}

#[rstest]
#[case::empty_name(json!({ "name": "" }))]
#[case::missing_name(json!({}))]
#[tokio::test]
async fn test_add_member_invalid(#[case] body: Value) {
    let (app, _) = in_memory_app();

    let response = send(&app, "POST", "/members", Some(body)).await;

    assert_eq!(
        expect_error(response, StatusCode::UNPROCESSABLE_ENTITY).await,
        "INVALID_DATA"
    );
}

#[tokio::test]
async fn test_update_unknown_member_is_404() {
    let (app, _) = in_memory_app();

    let response = send(
        &app,
        "PATCH",
        &format!("/members/{}", Uuid::new_v4()),
        Some(json!({ "name": "Bob" })),
    )
    .await;

    assert_eq!(expect_error(response, StatusCode::NOT_FOUND).await, "NOT_FOUND");
}

#[rstest]
#[case::empty_name(json!({ "name": "", "start_date": "2024-01-01", "end_date": "2024-01-31", "capacity": 10 }))]
#[case::zero_capacity(json!({ "name": "Yoga", "start_date": "2024-01-01", "end_date": "2024-01-31", "capacity": 0 }))]
#[case::negative_capacity(json!({ "name": "Yoga", "start_date": "2024-01-01", "end_date": "2024-01-31", "capacity": -3 }))]
#[case::start_after_end(json!({ "name": "Yoga", "start_date": "2024-02-01", "end_date": "2024-01-31", "capacity": 10 }))]
#[tokio::test]
async fn test_add_class_invalid(#[case] body: Value) {
    let (app, _) = in_memory_app();

    let response = send(&app, "POST", "/classes", Some(body)).await;

    assert_eq!(
        expect_error(response, StatusCode::UNPROCESSABLE_ENTITY).await,
        "INVALID_DATA"
    );
}

#[tokio::test]
async fn test_single_day_class_is_valid() {
    let (app, _) = in_memory_app();

    let class = create_class(&app, "Spin", "2024-03-03", "2024-03-03", 1).await;

    assert_eq!(class.start_date, class.end_date);
}

#[tokio::test]
async fn test_class_update() {
    let (app, _) = in_memory_app();
    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;

    let response = send(
        &app,
        "PATCH",
        &format!("/classes/{}", yoga.id),
        Some(json!({ "capacity": 20, "end_date": "2024-02-29" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: ClassResponse = read_json(response).await;
    assert_eq!(updated.name, "Yoga");
    assert_eq!(updated.capacity, 20);
    assert_eq!(updated.end_date.to_string(), "2024-02-29");

    // Moving the start past the stored end is rejected
    let response = send(
        &app,
        "PATCH",
        &format!("/classes/{}", yoga.id),
        Some(json!({ "start_date": "2024-03-01" })),
    )
    .await;
    assert_eq!(
        expect_error(response, StatusCode::UNPROCESSABLE_ENTITY).await,
        "INVALID_DATA"
    );

    let response = send(&app, "GET", &format!("/classes/{}", yoga.id), None).await;
    let current: ClassResponse = read_json(response).await;
    assert_eq!(current, updated);
}

#[tokio::test]
async fn test_class_delete_is_idempotent() {
    let (app, _) = in_memory_app();
    let yoga = create_class(&app, "Yoga", "2024-01-01", "2024-01-31", 10).await;

    for _ in 0..2 {
        let response = send(&app, "DELETE", &format!("/classes/{}", yoga.id), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = send(&app, "GET", &format!("/classes/{}", yoga.id), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_members_pages_in_creation_order() {
    let (app, _) = in_memory_app();
    for i in 0..5 {
        create_member(&app, &format!("member-{i}")).await;
    }

    let response = send(&app, "GET", "/members?limit=2&page=1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let members: Vec<MemberResponse> = read_json(response).await;

    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["member-2", "member-3"]);
}

#[tokio::test]
async fn test_list_limit_is_clamped() {
    let (app, _) = in_memory_app();
    for i in 0..105 {
        create_class(&app, &format!("class-{i}"), "2024-01-01", "2024-01-02", 5).await;
    }

    for uri in ["/classes", "/classes?limit=0", "/classes?limit=500"] {
        let classes: Vec<ClassResponse> = read_json(send(&app, "GET", uri, None).await).await;
        assert_eq!(classes.len(), 100, "{uri}");
    }

    let classes: Vec<ClassResponse> =
        read_json(send(&app, "GET", "/classes?limit=100&page=1", None).await).await;
    assert_eq!(classes.len(), 5);
}

#[tokio::test]
async fn test_list_empty_returns_array() {
    let (app, _) = in_memory_app();

    let response = send(&app, "GET", "/members", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = read_json(response).await;
    assert_eq!(body, json!([]));
}

// ============================================================================
// Malformed requests
// ============================================================================

#[rstest]
#[case::malformed_json("POST", "/members", "{\"name\":")]
#[case::empty_body("POST", "/classes", "")]
#[case::wrong_type("POST", "/bookings", "{\"member_id\": 12, \"class_id\": 3, \"class_date\": \"x\"}")]
#[case::bad_date("POST", "/classes", "{\"name\":\"Yoga\",\"start_date\":\"01/01/2024\",\"end_date\":\"2024-01-31\",\"capacity\":1}")]
#[tokio::test]
async fn test_malformed_body_is_400(
    #[case] method: &str,
    #[case] uri: &str,
    #[case] body: &'static str,
) {
    let (app, _) = in_memory_app();

    let response = send_raw(&app, method, uri, body).await;

    assert_eq!(expect_error(response, StatusCode::BAD_REQUEST).await, "BAD_REQUEST");
}

#[tokio::test]
async fn test_empty_body_message() {
    let (app, _) = in_memory_app();

    let response = send_raw(&app, "POST", "/members", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.message, "missing body");
}

#[rstest]
#[case::member("/members/not-a-uuid")]
#[case::class("/classes/42")]
#[case::booking("/bookings/xyz")]
#[tokio::test]
async fn test_invalid_id_is_400(#[case] uri: &str) {
    let (app, _) = in_memory_app();

    let response = send(&app, "GET", uri, None).await;

    assert_eq!(expect_error(response, StatusCode::BAD_REQUEST).await, "BAD_REQUEST");
}

#[rstest]
#[case::negative_limit("/members?limit=-1")]
#[case::text_page("/bookings?page=abc")]
#[tokio::test]
async fn test_invalid_query_is_400(#[case] uri: &str) {
    let (app, _) = in_memory_app();

    let response = send(&app, "GET", uri, None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_json(response).await;
    assert!(body.message.starts_with("query params are invalid"));
}

// ============================================================================
// Store failures and health
// ============================================================================

#[tokio::test]
async fn test_store_failure_is_500_with_generic_message() {
    let app = app_with_broken_members();

    let response = send(&app, "GET", "/members", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = read_json(response).await;
    assert_eq!(body.error, "INTERNAL_ERROR");
    assert_eq!(body.message, "An unexpected error occurred");
}

#[tokio::test]
async fn test_booking_member_lookup_failure_is_500() {
    let app = app_with_broken_members();
    let response = send(
        &app,
        "POST",
        "/classes",
        Some(json!({ "name": "Yoga", "start_date": "2024-01-01", "end_date": "2024-01-31", "capacity": 3 })),
    )
    .await;
    let yoga: ClassResponse = read_json(response).await;

    let response = send(
        &app,
        "POST",
        "/bookings",
        Some(json!({ "member_id": Uuid::new_v4(), "class_id": yoga.id, "class_date": "2024-01-02" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_readiness() {
    let (app, probe) = in_memory_app();

    let response = send(&app, "GET", "/v1/readiness", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: HealthResponse = read_json(response).await;
    assert_eq!(body.status, "ok");

    probe.set_available(false);

    let response = send(&app, "GET", "/v1/readiness", None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: HealthResponse = read_json(response).await;
    assert_eq!(body.status, "db not ready");
}

#[tokio::test]
async fn test_liveness_ignores_store_state() {
    let (app, probe) = in_memory_app();
    probe.set_available(false);

    let response = send(&app, "GET", "/v1/liveness", None).await;

    assert_eq!(response.status(), StatusCode::OK);
}
