use crate::domain::{MemberId, PageInfo};
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
    types::{AddMemberRequest, MemberResponse, PageQuery, UpdateMemberRequest},
};

/// POST /members
pub async fn add_member(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let Json(req) = payload?;

    let member = application::add_member(&state.service_deps, req.into_command()).await?;

    Ok((StatusCode::CREATED, Json(member.into())))
}

/// GET /members/:id
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MemberResponse>, ApiError> {
    let Path(member_id) = path?;

    let member = application::get_member(
        &state.service_deps,
        MemberId::from_uuid(member_id),
    )
    .await?;

    Ok(Json(member.into()))
}

/// PATCH /members/:id
///
/// Only `name` can change. An empty object returns the member unchanged.
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateMemberRequest>, JsonRejection>,
) -> Result<Json<MemberResponse>, ApiError> {
    let Path(member_id) = path?;
    let Json(req) = payload?;

    let member = application::update_member(
        &state.service_deps,
        MemberId::from_uuid(member_id),
        req.into_command(),
    )
    .await?;

    Ok(Json(member.into()))
}

/// DELETE /members/:id
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(member_id) = path?;

    application::delete_member(&state.service_deps, MemberId::from_uuid(member_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /members?page=&limit=
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let Query(query) = query?;

    let members = application::list_members(&state.service_deps, PageInfo::from(query)).await?;

    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}
