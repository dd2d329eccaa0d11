pub mod aggregate;
pub mod config;
pub mod http;
pub mod metrics_server;
pub mod mock;
pub mod notify;
pub mod observability;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use store::{NoopStore, PgStore, TelemetryStore};
