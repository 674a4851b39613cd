//! Transactions API endpoints

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use engine::Record;
use serde_json::Value;

use crate::{ServerError, server::ServerState, types::transaction::TransactionList};

pub async fn list(State(state): State<ServerState>) -> Json<TransactionList> {
    Json(state.engine.list_transactions().await)
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ServerError> {
    let Json(payload) = payload?;
    let transaction = state.engine.create_transaction(payload).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn replace(
    State(state): State<ServerState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let transaction = state.engine.replace_transaction(id, payload).await?;

    Ok(Json(transaction))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_transaction(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
