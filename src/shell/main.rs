use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use foodgram::modules::interactions::adapters::outbound::interaction_store_in_memory::InMemoryInteractionStore;
use foodgram::modules::interactions::adapters::outbound::recipe_catalog_in_memory::InMemoryRecipeCatalog;
use foodgram::modules::interactions::adapters::outbound::seed::load_seed;
use foodgram::modules::interactions::adapters::outbound::subscription_store_in_memory::InMemorySubscriptionStore;
use foodgram::modules::interactions::adapters::outbound::users_in_memory::InMemoryUsers;
use foodgram::shell::config::Config;
use foodgram::shell::graphql::build_schema;
use foodgram::shell::http::router;
use foodgram::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    let (catalog, users) = match &config.seed_path {
        Some(path) => load_seed(path).await?,
        None => {
            info!("no seed configured, starting with an empty catalog");
            (InMemoryRecipeCatalog::new(), InMemoryUsers::new())
        }
    };

    let state = AppState::new(
        Arc::new(InMemoryInteractionStore::new()),
        Arc::new(catalog),
        Arc::new(InMemorySubscriptionStore::new()),
        Arc::new(users),
        config.duplicate_add,
        config.base_url.clone(),
    );
    let schema = build_schema(state.clone());
    let app = router(state, schema);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(duplicate_add = ?config.duplicate_add, "listening on http://{}", config.addr);
    info!("GraphQL endpoint: http://{}/gql", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
