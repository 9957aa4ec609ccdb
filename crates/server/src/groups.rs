//! Group API endpoints

use api_types::group::{GroupNew, GroupView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GroupNew>,
) -> Result<(StatusCode, Json<GroupView>), ServerError> {
    let mut engine = state.engine.write().await;
    let group = engine.new_group(&payload.name)?;
    tracing::info!(group_id = %group.id, "group created");

    Ok((StatusCode::CREATED, Json(views::group(&group))))
}

pub async fn list(State(state): State<ServerState>) -> Json<Vec<GroupView>> {
    let engine = state.engine.read().await;
    Json(engine.groups().into_iter().map(views::group).collect())
}

pub async fn get(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<GroupView>, ServerError> {
    let engine = state.engine.read().await;
    let group = engine.group(group_id)?;

    Ok(Json(views::group(group)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_group(group_id)?;
    tracing::info!(%group_id, "group deleted");

    Ok(StatusCode::NO_CONTENT)
}
