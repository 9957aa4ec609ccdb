//! Balance API endpoints

use api_types::balance::BalanceView;
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

/// Balances are recomputed from the group's current expense list on every
/// request.
pub async fn get(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<BalanceView>>, ServerError> {
    let engine = state.engine.read().await;
    let balances = engine.balances(group_id)?;

    Ok(Json(balances.iter().map(views::balance).collect()))
}
