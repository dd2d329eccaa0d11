//! Push-based change feed. The schema's NOTIFY triggers (see
//! `sql/schema/01_notify_triggers.sql`) raise one event per row change on
//! the readings and alerts tables; this module fans them into a single
//! callback. No filtering or debouncing happens here; that is the
//! caller's responsibility.

use sqlx::postgres::{PgListener, PgPool};
use tokio::task::JoinHandle;

use grid_client::StoreError;

/// Channels the schema triggers NOTIFY on.
const CHANNELS: &[&str] = &["power_readings_changed", "alerts_changed"];

/// One row-level change event as emitted by the triggers.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub op: String,
    pub row: serde_json::Value,
}

/// Handle for an established change feed. Dropping it (or calling
/// [`Subscription::unsubscribe`]) tears the channel down.
pub struct Subscription {
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    /// An inert subscription that never fires, for demo mode.
    pub fn inert() -> Self {
        Self { handle: None }
    }

    pub fn unsubscribe(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Subscribe `callback` to every insert/update/delete on the readings and
/// alerts tables. Each event invokes the callback with the raw payload.
pub async fn subscribe<F>(pool: &PgPool, callback: F) -> Result<Subscription, StoreError>
where
    F: Fn(ChangeEvent) + Send + Sync + 'static,
{
    let mut listener = PgListener::connect_with(pool)
        .await
        .map_err(StoreError::Connect)?;
    listener
        .listen_all(CHANNELS.iter().copied())
        .await
        .map_err(StoreError::Read)?;

    let handle = tokio::spawn(async move {
        loop {
            match listener.recv().await {
                Ok(notification) => {
                    metrics::counter!("change_events_total").increment(1);
                    match serde_json::from_str::<ChangeEvent>(notification.payload()) {
                        Ok(event) => callback(event),
                        Err(e) => tracing::warn!(
                            channel = notification.channel(),
                            error = %e,
                            "dropping malformed change payload"
                        ),
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "change listener connection lost");
                    break;
                }
            }
        }
    });

    Ok(Subscription {
        handle: Some(handle),
    })
}
