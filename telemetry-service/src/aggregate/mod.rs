//! Realtime telemetry aggregation: daily summary roll-ups and the
//! rolling 24-hour power trend. The readers with no local computation
//! (latest reading, alerts, station directory) live directly on
//! [`TelemetryStore`](crate::store::TelemetryStore).

use std::collections::BTreeMap;

use time::{Date, Duration, OffsetDateTime};

use grid_client::domain::{DailySummary, Reading};
use grid_client::StoreError;

use crate::store::TelemetryStore;

/// Fleet-wide roll-up of every station's summary row for one day.
/// Energy, revenue and CO2 are sums; the peak is the fleet maximum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetSummary {
    pub total_energy_kwh: f64,
    pub revenue_rmb: f64,
    pub co2_reduction_ton: f64,
    pub peak_power_kw: f64,
}

/// One hour-of-day bucket of the power trend. `time` is the unpadded
/// label the dashboard charts expect, e.g. `"8:00"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub time: String,
    pub value: f64,
}

/// One station's summary row for `today`, or `None` when the station has
/// not produced a row yet.
pub async fn station_today_summary(
    store: &dyn TelemetryStore,
    today: Date,
    station_id: i64,
) -> Result<Option<DailySummary>, StoreError> {
    let mut rows = store.summaries_on(today, Some(station_id)).await?;
    Ok(if rows.is_empty() {
        None
    } else {
        Some(rows.swap_remove(0))
    })
}

/// The whole fleet's roll-up for `today`. Unlike the single-station read
/// this never yields `None`: zero stations reduce to the zero aggregate.
pub async fn fleet_today_summary(
    store: &dyn TelemetryStore,
    today: Date,
) -> Result<FleetSummary, StoreError> {
    let rows = store.summaries_on(today, None).await?;
    Ok(reduce_fleet(&rows))
}

/// Typed reducer over the fixed-shape summary struct. Stations missing a
/// row simply contribute nothing, which is the same as contributing zero.
pub fn reduce_fleet(rows: &[DailySummary]) -> FleetSummary {
    rows.iter().fold(FleetSummary::default(), |mut acc, row| {
        acc.total_energy_kwh += row.total_energy_kwh;
        acc.revenue_rmb += row.revenue_rmb;
        acc.co2_reduction_ton += row.co2_reduction_ton;
        acc.peak_power_kw = acc.peak_power_kw.max(row.peak_power_kw);
        acc
    })
}

/// Hourly power trend over the 24 hours before `now`, optionally for one
/// station.
pub async fn day_trend(
    store: &dyn TelemetryStore,
    now: OffsetDateTime,
    station_id: Option<i64>,
) -> Result<Vec<TrendPoint>, StoreError> {
    let readings = store
        .readings_since(now - Duration::hours(24), station_id)
        .await?;
    Ok(bucket_by_hour(&readings))
}

/// Group readings by the hour-of-day of their timestamp and average the
/// power within each bucket. Buckets with no readings are omitted rather
/// than zero-filled; output is ordered by numeric hour ascending.
///
/// Bucketing is by hour-of-day, not elapsed-hours-ago: readings from the
/// top of a non-hour-aligned window share a bucket with readings from the
/// bottom when their wall-clock hours coincide.
pub fn bucket_by_hour(readings: &[Reading]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<u8, (f64, u32)> = BTreeMap::new();
    for reading in readings {
        let entry = buckets.entry(reading.ts.hour()).or_insert((0.0, 0));
        entry.0 += reading.power_kw;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(hour, (sum, count))| TrendPoint {
            time: format!("{hour}:00"),
            value: sum / f64::from(count),
        })
        .collect()
}
