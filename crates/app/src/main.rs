mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pocketbook={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let store = settings.store;
    let engine = engine::Engine::builder()
        .addressing(store.addressing)
        .transaction_policy(store.transactions)
        .category_policy(store.categories)
        .build();
    tracing::info!(
        addressing = engine.addressing().as_str(),
        "in-memory store ready"
    );

    let http = settings.server;
    let bind = http.bind.unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, http.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    if let Err(err) = server::run_with_listener(engine, &http.base_path, listener).await {
        tracing::error!("server failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
