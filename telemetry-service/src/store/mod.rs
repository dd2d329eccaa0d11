mod noop;
mod pg;

pub use noop::NoopStore;
pub use pg::PgStore;

use async_trait::async_trait;
use grid_client::domain::{
    Alert, DailySummary, Inverter, InverterRefresh, NewInverter, Reading, Station, SummaryDelta,
};
use grid_client::StoreError;
use time::{Date, OffsetDateTime};

/// Alert reads default to the ten newest rows unless the caller asks for
/// more.
pub const DEFAULT_ALERT_LIMIT: i64 = 10;

/// Capability surface of the backing row store.
///
/// One instance is constructed at process start and passed by reference
/// into every aggregator; there is no process-wide singleton. [`PgStore`]
/// is the live backend, [`NoopStore`] stands in when none is configured.
#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Newest reading by timestamp, optionally for one station.
    async fn latest_reading(&self, station_id: Option<i64>)
        -> Result<Option<Reading>, StoreError>;

    /// All readings at or after `since`, oldest first.
    async fn readings_since(
        &self,
        since: OffsetDateTime,
        station_id: Option<i64>,
    ) -> Result<Vec<Reading>, StoreError>;

    /// Summary rows for one calendar date, optionally for one station.
    async fn summaries_on(
        &self,
        date: Date,
        station_id: Option<i64>,
    ) -> Result<Vec<DailySummary>, StoreError>;

    /// Active alerts, newest first, capped at `limit`.
    async fn active_alerts(&self, limit: i64) -> Result<Vec<Alert>, StoreError>;

    /// All stations currently marked active.
    async fn active_stations(&self) -> Result<Vec<Station>, StoreError>;

    /// Append one reading to the telemetry stream.
    async fn insert_reading(&self, reading: &Reading) -> Result<(), StoreError>;

    /// Atomically roll one reading's contribution into the summary row
    /// keyed by `(station_id, date)`.
    async fn accumulate_summary(
        &self,
        station_id: i64,
        date: Date,
        delta: &SummaryDelta,
    ) -> Result<(), StoreError>;

    /// A station's inverters ordered by code.
    async fn inverters_for(&self, station_id: i64) -> Result<Vec<Inverter>, StoreError>;

    /// Create one inverter.
    async fn insert_inverter(&self, inverter: &NewInverter) -> Result<(), StoreError>;

    /// Overwrite an inverter's live fields.
    async fn refresh_inverter(&self, id: i64, refresh: &InverterRefresh)
        -> Result<(), StoreError>;
}
