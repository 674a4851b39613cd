//! Categories API endpoints.
//!
//! Categories can be listed, created and deleted. There is no replace.

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

use crate::{ServerError, server::ServerState, types::category::CategoryList};

pub async fn list(State(state): State<ServerState>) -> Json<CategoryList> {
    Json(state.engine.list_categories().await)
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ServerError> {
    let Json(payload) = payload?;
    let category = state.engine.create_category(payload).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_category(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
