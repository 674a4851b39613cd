use axum::{
    Json, Router,
    routing::{delete, get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::{budgets, categories, transactions};
use api_types::health::Health;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Turn a configured prefix into something `Router::nest` accepts.
///
/// Returns `None` when the routes belong at the root.
fn normalize_base_path(base_path: &str) -> Option<String> {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

fn api(state: ServerState) -> Router {
    Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/{id}",
            put(transactions::replace).delete(transactions::delete),
        )
        .route("/budgets", get(budgets::list).post(budgets::create))
        .route(
            "/budgets/{category}",
            put(budgets::update).delete(budgets::delete),
        )
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route("/categories/{id}", delete(categories::delete))
        .with_state(state)
}

/// Build the full application router.
///
/// Resource routes are mounted under `base_path` (empty for the root);
/// `/health` always stays at the root.
pub fn router(engine: Arc<Engine>, base_path: &str) -> Router {
    let api = api(ServerState { engine });
    let app = match normalize_base_path(base_path) {
        Some(prefix) => Router::new().nest(&prefix, api),
        None => api,
    };

    app.route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run_with_listener(
    engine: Engine,
    base_path: &str,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine), base_path)).await
}
