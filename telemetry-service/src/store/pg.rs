use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use time::{Date, OffsetDateTime};

use grid_client::db::{
    alert_queries, inverter_queries, reading_queries, station_queries, summary_queries,
};
use grid_client::domain::{
    Alert, DailySummary, Inverter, InverterRefresh, NewInverter, Reading, Station, SummaryDelta,
};
use grid_client::StoreError;

use crate::config::StoreConfig;
use crate::store::TelemetryStore;

/// Live store backed by a Postgres-wire connection pool.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect using the configured URI, refusing placeholder values with
    /// [`StoreError::NotConfigured`] so the caller can fall back to the
    /// no-op store.
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, StoreError> {
        if !cfg.is_configured() {
            return Err(StoreError::NotConfigured);
        }

        let pool = PgPoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect(&cfg.uri)
            .await
            .map_err(StoreError::Connect)?;

        Ok(Self { pool })
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for facilities that need their own connection
    /// (the change notifier's LISTEN session).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TelemetryStore for PgStore {
    async fn latest_reading(
        &self,
        station_id: Option<i64>,
    ) -> Result<Option<Reading>, StoreError> {
        reading_queries::latest_reading(&self.pool, station_id).await
    }

    async fn readings_since(
        &self,
        since: OffsetDateTime,
        station_id: Option<i64>,
    ) -> Result<Vec<Reading>, StoreError> {
        reading_queries::readings_since(&self.pool, since, station_id).await
    }

    async fn summaries_on(
        &self,
        date: Date,
        station_id: Option<i64>,
    ) -> Result<Vec<DailySummary>, StoreError> {
        summary_queries::summaries_on(&self.pool, date, station_id).await
    }

    async fn active_alerts(&self, limit: i64) -> Result<Vec<Alert>, StoreError> {
        alert_queries::active_alerts(&self.pool, limit).await
    }

    async fn active_stations(&self) -> Result<Vec<Station>, StoreError> {
        station_queries::active_stations(&self.pool).await
    }

    async fn insert_reading(&self, reading: &Reading) -> Result<(), StoreError> {
        reading_queries::insert_reading(&self.pool, reading).await
    }

    async fn accumulate_summary(
        &self,
        station_id: i64,
        date: Date,
        delta: &SummaryDelta,
    ) -> Result<(), StoreError> {
        summary_queries::accumulate_summary(&self.pool, station_id, date, delta).await
    }

    async fn inverters_for(&self, station_id: i64) -> Result<Vec<Inverter>, StoreError> {
        inverter_queries::inverters_for(&self.pool, station_id).await
    }

    async fn insert_inverter(&self, inverter: &NewInverter) -> Result<(), StoreError> {
        inverter_queries::insert_inverter(&self.pool, inverter).await
    }

    async fn refresh_inverter(
        &self,
        id: i64,
        refresh: &InverterRefresh,
    ) -> Result<(), StoreError> {
        inverter_queries::refresh_inverter(&self.pool, id, refresh).await
    }
}
