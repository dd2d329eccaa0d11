use async_trait::async_trait;
use time::{Date, OffsetDateTime};

use grid_client::domain::{
    Alert, DailySummary, Inverter, InverterRefresh, NewInverter, Reading, Station, SummaryDelta,
};
use grid_client::StoreError;

use crate::store::TelemetryStore;

/// Stand-in store for unconfigured (demo/offline) operation and for
/// server-rendered code paths with no reachable backend. Every read
/// resolves empty and every write resolves without effect; nothing
/// throws.
pub struct NoopStore;

#[async_trait]
impl TelemetryStore for NoopStore {
    async fn latest_reading(
        &self,
        _station_id: Option<i64>,
    ) -> Result<Option<Reading>, StoreError> {
        Ok(None)
    }

    async fn readings_since(
        &self,
        _since: OffsetDateTime,
        _station_id: Option<i64>,
    ) -> Result<Vec<Reading>, StoreError> {
        Ok(Vec::new())
    }

    async fn summaries_on(
        &self,
        _date: Date,
        _station_id: Option<i64>,
    ) -> Result<Vec<DailySummary>, StoreError> {
        Ok(Vec::new())
    }

    async fn active_alerts(&self, _limit: i64) -> Result<Vec<Alert>, StoreError> {
        Ok(Vec::new())
    }

    async fn active_stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert_reading(&self, _reading: &Reading) -> Result<(), StoreError> {
        Ok(())
    }

    async fn accumulate_summary(
        &self,
        _station_id: i64,
        _date: Date,
        _delta: &SummaryDelta,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn inverters_for(&self, _station_id: i64) -> Result<Vec<Inverter>, StoreError> {
        Ok(Vec::new())
    }

    async fn insert_inverter(&self, _inverter: &NewInverter) -> Result<(), StoreError> {
        Ok(())
    }

    async fn refresh_inverter(
        &self,
        _id: i64,
        _refresh: &InverterRefresh,
    ) -> Result<(), StoreError> {
        Ok(())
    }
}
