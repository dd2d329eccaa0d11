use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use grid_client::StoreError;
use telemetry_service::{
    config::AppConfig,
    http::{self, AppState},
    metrics_server, notify, observability,
    store::{NoopStore, PgStore, TelemetryStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;

    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr);
    }

    // An unconfigured or placeholder store URI is not fatal: serve demo
    // mode against the no-op store instead.
    let (store, change_feed): (Arc<dyn TelemetryStore>, notify::Subscription) =
        match PgStore::connect(&cfg.store).await {
            Ok(pg) => {
                let feed = notify::subscribe(pg.pool(), |event| {
                    tracing::debug!(table = %event.table, op = %event.op, "store change event");
                })
                .await?;
                tracing::info!("connected to backend store");
                (Arc::new(pg), feed)
            }
            Err(StoreError::NotConfigured) => {
                tracing::warn!("no backend store configured; serving demo mode");
                (Arc::new(NoopStore), notify::Subscription::inert())
            }
            Err(e) => return Err(e.into()),
        };

    let app = http::router(AppState { store });

    let addr: SocketAddr = cfg.http.bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "telemetry service listening");
    axum::serve(listener, app.into_make_service()).await?;

    change_feed.unsubscribe();
    Ok(())
}
