use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, bookings, classes, health, members};

/// Creates the API router
///
/// Members:  POST /members, GET|PATCH|DELETE /members/:id, GET /members
/// Classes:  POST /classes, GET|PATCH|DELETE /classes/:id, GET /classes
/// Bookings: POST /bookings, GET|DELETE /bookings/:id, GET /bookings
/// Health:   GET /v1/readiness, GET /v1/liveness
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Members
        .route("/members", post(members::add_member).get(members::list_members))
        .route(
            "/members/:id",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        // Classes
        .route("/classes", post(classes::add_class).get(classes::list_classes))
        .route(
            "/classes/:id",
            get(classes::get_class)
                .patch(classes::update_class)
                .delete(classes::delete_class),
        )
        // Bookings
        .route(
            "/bookings",
            post(bookings::book_class).get(bookings::list_bookings),
        )
        .route(
            "/bookings/:id",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        // Health
        .route("/v1/readiness", get(health::readiness))
        .route("/v1/liveness", get(health::liveness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
