//! Settlement API endpoints

use api_types::settlement::SettlementPlanView;
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

pub async fn get(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<SettlementPlanView>, ServerError> {
    let engine = state.engine.read().await;
    let plan = engine.settlement_plan(group_id)?;

    Ok(Json(views::settlement_plan(&plan)))
}
