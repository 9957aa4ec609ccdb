//! Expense API endpoints

use api_types::expense::{ExpenseNew, ExpenseView};
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
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let mut engine = state.engine.write().await;
    let expense = engine.add_expense(
        group_id,
        &payload.description,
        payload.amount,
        payload.payer_id,
        &payload.participant_ids,
    )?;
    tracing::debug!(%group_id, expense_id = %expense.id, "expense recorded");

    Ok((StatusCode::CREATED, Json(views::expense(&expense))))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let engine = state.engine.read().await;
    let expenses = engine.expenses(group_id)?;

    Ok(Json(expenses.iter().map(views::expense).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((group_id, expense_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ExpenseView>, ServerError> {
    let engine = state.engine.read().await;
    let expense = engine.expense(group_id, expense_id)?;

    Ok(Json(views::expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path((group_id, expense_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ServerError> {
    let mut engine = state.engine.write().await;
    engine.delete_expense(group_id, expense_id)?;

    Ok(StatusCode::NO_CONTENT)
}
