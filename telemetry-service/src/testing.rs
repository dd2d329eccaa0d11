//! In-memory [`TelemetryStore`] double for unit tests. Mirrors the
//! backend's accumulate semantics so generator and aggregator tests can
//! run without a live store.

use std::sync::Mutex;

use async_trait::async_trait;
use time::{Date, OffsetDateTime};

use grid_client::domain::{
    Alert, DailySummary, Inverter, InverterRefresh, NewInverter, Reading, Station, SummaryDelta,
    CO2_TON_PER_KWH, TARIFF_RMB_PER_KWH,
};
use grid_client::StoreError;

use crate::store::TelemetryStore;

#[derive(Default)]
pub struct MemoryStore {
    stations: Vec<Station>,
    alerts: Vec<Alert>,
    readings: Mutex<Vec<Reading>>,
    summaries: Mutex<Vec<DailySummary>>,
    inverters: Mutex<Vec<Inverter>>,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn with_station(id: i64, name: &str, capacity_mw: f64) -> Self {
        Self {
            stations: vec![Station {
                id,
                name: name.to_string(),
                longitude: 94.5,
                latitude: 40.1,
                capacity_mw,
                status: "active".to_string(),
            }],
            ..Self::default()
        }
    }

    /// A store whose reads all fail, for error-path tests.
    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn push_reading(&self, reading: Reading) {
        self.readings.lock().unwrap().push(reading);
    }

    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn summary_for(&self, station_id: i64, date: Date) -> Option<DailySummary> {
        self.summaries
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.station_id == station_id && s.date == date)
            .cloned()
    }

    pub fn inverters_snapshot(&self, station_id: i64) -> Vec<Inverter> {
        self.inverters
            .lock()
            .unwrap()
            .iter()
            .filter(|inv| inv.station_id == station_id)
            .cloned()
            .collect()
    }

    pub fn reading_count(&self) -> usize {
        self.readings.lock().unwrap().len()
    }

    fn read_guard(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            Err(StoreError::Read(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TelemetryStore for MemoryStore {
    async fn latest_reading(
        &self,
        station_id: Option<i64>,
    ) -> Result<Option<Reading>, StoreError> {
        self.read_guard()?;
        Ok(self
            .readings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| station_id.map_or(true, |id| r.station_id == id))
            .max_by_key(|r| r.ts)
            .cloned())
    }

    async fn readings_since(
        &self,
        since: OffsetDateTime,
        station_id: Option<i64>,
    ) -> Result<Vec<Reading>, StoreError> {
        self.read_guard()?;
        let mut rows: Vec<Reading> = self
            .readings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.ts >= since && station_id.map_or(true, |id| r.station_id == id))
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.ts);
        Ok(rows)
    }

    async fn summaries_on(
        &self,
        date: Date,
        station_id: Option<i64>,
    ) -> Result<Vec<DailySummary>, StoreError> {
        self.read_guard()?;
        Ok(self
            .summaries
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.date == date && station_id.map_or(true, |id| s.station_id == id))
            .cloned()
            .collect())
    }

    async fn active_alerts(&self, limit: i64) -> Result<Vec<Alert>, StoreError> {
        self.read_guard()?;
        let mut rows: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|a| a.status == "active")
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn active_stations(&self) -> Result<Vec<Station>, StoreError> {
        self.read_guard()?;
        Ok(self
            .stations
            .iter()
            .filter(|s| s.status == "active")
            .cloned()
            .collect())
    }

    async fn insert_reading(&self, reading: &Reading) -> Result<(), StoreError> {
        self.readings.lock().unwrap().push(reading.clone());
        Ok(())
    }

    async fn accumulate_summary(
        &self,
        station_id: i64,
        date: Date,
        delta: &SummaryDelta,
    ) -> Result<(), StoreError> {
        let mut summaries = self.summaries.lock().unwrap();
        match summaries
            .iter_mut()
            .find(|s| s.station_id == station_id && s.date == date)
        {
            Some(row) => {
                row.total_energy_kwh += delta.energy_kwh;
                row.revenue_rmb = row.total_energy_kwh * TARIFF_RMB_PER_KWH;
                row.co2_reduction_ton = row.total_energy_kwh * CO2_TON_PER_KWH;
                row.peak_power_kw = row.peak_power_kw.max(delta.peak_power_kw);
                row.average_efficiency = delta.average_efficiency;
            }
            None => summaries.push(DailySummary {
                station_id,
                date,
                total_energy_kwh: delta.energy_kwh,
                revenue_rmb: delta.energy_kwh * TARIFF_RMB_PER_KWH,
                co2_reduction_ton: delta.energy_kwh * CO2_TON_PER_KWH,
                peak_power_kw: delta.peak_power_kw,
                average_efficiency: delta.average_efficiency,
            }),
        }
        Ok(())
    }

    async fn inverters_for(&self, station_id: i64) -> Result<Vec<Inverter>, StoreError> {
        self.read_guard()?;
        Ok(self.inverters_snapshot(station_id))
    }

    async fn insert_inverter(&self, inverter: &NewInverter) -> Result<(), StoreError> {
        let mut inverters = self.inverters.lock().unwrap();
        let id = inverters.len() as i64 + 1;
        inverters.push(Inverter {
            id,
            station_id: inverter.station_id,
            inverter_code: inverter.inverter_code.clone(),
            model: inverter.model.clone(),
            status: inverter.refresh.status.clone(),
            current_power_kw: inverter.refresh.current_power_kw,
            temperature_c: inverter.refresh.temperature_c,
            efficiency_pct: inverter.refresh.efficiency_pct,
            last_update: inverter.refresh.last_update,
        });
        Ok(())
    }

    async fn refresh_inverter(
        &self,
        id: i64,
        refresh: &InverterRefresh,
    ) -> Result<(), StoreError> {
        let mut inverters = self.inverters.lock().unwrap();
        if let Some(inv) = inverters.iter_mut().find(|inv| inv.id == id) {
            inv.status = refresh.status.clone();
            inv.current_power_kw = refresh.current_power_kw;
            inv.temperature_c = refresh.temperature_c;
            inv.efficiency_pct = refresh.efficiency_pct;
            inv.last_update = refresh.last_update;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_ALERT_LIMIT;
    use time::macros::datetime;

    fn alert(id: i64, status: &str, created_at: OffsetDateTime) -> Alert {
        Alert {
            id,
            station_id: 1,
            severity: "warning".to_string(),
            status: status.to_string(),
            message: "inverter temperature high".to_string(),
            created_at,
            station_name: Some("Gobi-1".to_string()),
        }
    }

    #[tokio::test]
    async fn latest_reading_on_empty_store_is_none() {
        let store = MemoryStore::with_station(1, "Gobi-1", 50.0);
        assert!(store.latest_reading(Some(1)).await.unwrap().is_none());
        assert!(store.latest_reading(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn station_directory_is_idempotent_between_writes() {
        let store = MemoryStore::with_station(1, "Gobi-1", 50.0);
        let first = store.active_stations().await.unwrap();
        let second = store.active_stations().await.unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].id, second[0].id);
    }

    #[tokio::test]
    async fn active_alerts_are_newest_first_and_capped() {
        let mut store = MemoryStore::with_station(1, "Gobi-1", 50.0);
        for id in 0..15 {
            store.push_alert(alert(
                id,
                "active",
                datetime!(2025-06-01 00:00:00 UTC) + time::Duration::minutes(id),
            ));
        }
        store.push_alert(alert(99, "resolved", datetime!(2025-06-02 00:00:00 UTC)));

        let alerts = store.active_alerts(DEFAULT_ALERT_LIMIT).await.unwrap();
        assert_eq!(alerts.len(), DEFAULT_ALERT_LIMIT as usize);
        assert_eq!(alerts[0].id, 14);
        assert!(alerts.iter().all(|a| a.status == "active"));
    }
}
