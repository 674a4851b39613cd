use api_types::error::ErrorBody;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use server::{ServerState, router, run_with_listener};

mod budgets;
mod categories;
mod server;
mod transactions;

pub mod types {
    pub mod transaction {
        /// Body of `GET /transactions`.
        pub type TransactionList = Vec<engine::Record>;
    }

    pub mod category {
        /// Body of `GET /categories`.
        pub type CategoryList = Vec<engine::Record>;
    }

    pub mod budget {
        pub use api_types::budget::{BudgetList, BudgetNew, BudgetUpdate};
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::OutOfRange(_) | EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Malformed(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };
        tracing::warn!(status = status.as_u16(), "request rejected: {error}");

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

/// Decode a typed body out of an already parsed JSON value.
///
/// Missing or mistyped fields are reported as [`EngineError::Malformed`].
fn parse_payload<T: DeserializeOwned>(value: Value) -> Result<T, ServerError> {
    serde_json::from_value(value).map_err(|err| EngineError::Malformed(err.to_string()).into())
}
