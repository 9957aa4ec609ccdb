//! Member API endpoints

use api_types::member::{MemberNew, MemberView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

pub async fn create(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
    Json(payload): Json<MemberNew>,
) -> Result<(StatusCode, Json<MemberView>), ServerError> {
    let mut engine = state.engine.write().await;
    let member = engine.add_member(group_id, &payload.name)?;

    Ok((StatusCode::CREATED, Json(views::member(&member))))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<MemberView>>, ServerError> {
    let engine = state.engine.read().await;
    let members = engine.members(group_id)?;

    Ok(Json(members.iter().map(views::member).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((group_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MemberView>, ServerError> {
    let engine = state.engine.read().await;
    let member = engine.member(group_id, member_id)?;

    Ok(Json(views::member(member)))
}

/// Removal is refused with 409 while the member still appears in any
/// expense; deleting those expenses first is the caller's job.
pub async fn delete(
    State(state): State<ServerState>,
    Path((group_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.remove_member(group_id, member_id)?;

    Ok(StatusCode::NO_CONTENT)
}
