//! Budgets API endpoints.
//!
//! Both `POST /budgets` and `PUT /budgets/{category}` are unconditional
//! upserts; they only differ in where the category comes from and in the
//! status they answer with.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    ServerError, parse_payload,
    server::ServerState,
    types::budget::{BudgetList, BudgetNew, BudgetUpdate},
};

pub async fn list(State(state): State<ServerState>) -> Json<BudgetList> {
    Json(state.engine.list_budgets().await)
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let Json(payload) = payload?;
    let budget: BudgetNew = parse_payload(payload)?;
    state.engine.upsert_budget(budget.category, budget.amount).await;

    Ok(StatusCode::CREATED)
}

pub async fn update(
    State(state): State<ServerState>,
    category: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(category) = category?;
    let Json(payload) = payload?;
    let budget: BudgetUpdate = parse_payload(payload)?;
    state.engine.upsert_budget(category, budget.amount).await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<ServerState>,
    category: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(category) = category?;
    state.engine.delete_budget(&category).await?;

    Ok(StatusCode::NO_CONTENT)
}
