use std::sync::Arc;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use log::info;
use pokeproxy_service::{
    AppState,
    ServiceConfig,
    router,
};
use pokeproxy_upstream::{
    PokeApiDataStore,
    ResponseCache,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::parse();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let cache = Arc::new(ResponseCache::new(config.cache_options()));
    let data = PokeApiDataStore::new(config.upstream_config(), cache)
        .context("failed to create upstream client")?;
    let app = router(AppState::new(Arc::new(data)));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "listening on {} with upstream {}",
        config.bind, config.upstream_url
    );
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
