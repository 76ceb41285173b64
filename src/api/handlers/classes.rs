use crate::domain::{ClassId, PageInfo};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::application;
use crate::api::{
    error::ApiError,
    types::{AddClassRequest, ClassResponse, PageQuery, UpdateClassRequest},
};

/// POST /classes
///
/// Rules enforced:
/// - name is not empty
/// - capacity is positive
/// - start_date is not after end_date
pub async fn add_class(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddClassRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClassResponse>), ApiError> {
    let Json(req) = payload?;

    let class = application::add_class(&state.service_deps, req.into_command()).await?;

    Ok((StatusCode::CREATED, Json(class.into())))
}

/// GET /classes/:id
pub async fn get_class(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ClassResponse>, ApiError> {
    let Path(class_id) = path?;

    let class = application::get_class(&state.service_deps, ClassId::from_uuid(class_id)).await?;

    Ok(Json(class.into()))
}

/// PATCH /classes/:id
///
/// Any subset of name, start_date, end_date, capacity. The class after the
/// update must satisfy the same rules as on creation.
pub async fn update_class(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateClassRequest>, JsonRejection>,
) -> Result<Json<ClassResponse>, ApiError> {
    let Path(class_id) = path?;
    let Json(req) = payload?;

    let class = application::update_class(
        &state.service_deps,
        ClassId::from_uuid(class_id),
        req.into_command(),
    )
    .await?;

    Ok(Json(class.into()))
}

/// DELETE /classes/:id
pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(class_id) = path?;

    application::delete_class(&state.service_deps, ClassId::from_uuid(class_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /classes?page=&limit=
pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<ClassResponse>>, ApiError> {
    let Query(query) = query?;

    let classes = application::list_classes(&state.service_deps, PageInfo::from(query)).await?;

    Ok(Json(classes.into_iter().map(ClassResponse::from).collect()))
}
