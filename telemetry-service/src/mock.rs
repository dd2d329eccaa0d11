//! Demo-mode data synthesis. Exercises the same write paths a real
//! device gateway would: append a reading, roll it into today's summary,
//! keep the station's inverter fleet fresh.

use rand::Rng;
use time::OffsetDateTime;

use grid_client::domain::{InverterRefresh, NewInverter, Reading, Station, SummaryDelta};
use grid_client::StoreError;

use crate::store::TelemetryStore;

/// Every station carries exactly this many inverters once seeded.
pub const INVERTERS_PER_STATION: usize = 4;
const INVERTER_MODEL: &str = "SUN2000-100KTL";

/// Synthesize one telemetry pass for every active station.
///
/// Stations are independent: one station's failure is logged and counted,
/// the remaining stations still run, and the first error is returned at
/// the end so the trigger endpoint can report the pass as failed.
pub async fn generate_mock_data<R: Rng>(
    store: &dyn TelemetryStore,
    rng: &mut R,
    now: OffsetDateTime,
) -> Result<(), StoreError> {
    let stations = store.active_stations().await?;

    let mut first_error = None;
    for station in &stations {
        if let Err(e) = seed_station(store, rng, now, station).await {
            metrics::counter!("mock_station_failures_total").increment(1);
            tracing::warn!(station = station.id, error = %e, "mock pass failed for station");
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn seed_station<R: Rng>(
    store: &dyn TelemetryStore,
    rng: &mut R,
    now: OffsetDateTime,
    station: &Station,
) -> Result<(), StoreError> {
    let reading = synthesize_reading(rng, now, station);
    store.insert_reading(&reading).await?;

    let delta = SummaryDelta::from_reading(reading.power_kw, reading.efficiency_pct);
    store
        .accumulate_summary(station.id, now.date(), &delta)
        .await?;

    let inverters = store.inverters_for(station.id).await?;
    if inverters.is_empty() {
        for index in 1..=INVERTERS_PER_STATION {
            store
                .insert_inverter(&NewInverter {
                    station_id: station.id,
                    inverter_code: format!("INV-{}-{}", station.name, index),
                    model: INVERTER_MODEL.to_string(),
                    refresh: random_refresh(rng, now),
                })
                .await?;
        }
    } else {
        for inverter in &inverters {
            store
                .refresh_inverter(inverter.id, &random_refresh(rng, now))
                .await?;
        }
    }

    Ok(())
}

fn synthesize_reading<R: Rng>(rng: &mut R, now: OffsetDateTime, station: &Station) -> Reading {
    // Instantaneous power tops out at 80% of rated capacity.
    let power_ceiling_kw = station.capacity_mw * 1000.0 * 0.8;
    let power_kw = if power_ceiling_kw > 0.0 {
        rng.gen_range(0.0..power_ceiling_kw)
    } else {
        0.0
    };

    Reading {
        station_id: station.id,
        ts: now,
        power_kw,
        voltage_v: 220.0 + rng.gen_range(0.0..20.0),
        current_a: 100.0 + rng.gen_range(0.0..50.0),
        temperature_c: 25.0 + rng.gen_range(0.0..15.0),
        efficiency_pct: 85.0 + rng.gen_range(0.0..10.0),
    }
}

fn random_refresh<R: Rng>(rng: &mut R, now: OffsetDateTime) -> InverterRefresh {
    InverterRefresh {
        status: if rng.gen_bool(0.9) { "normal" } else { "warning" }.to_string(),
        current_power_kw: rng.gen_range(0.0..100.0),
        temperature_c: 30.0 + rng.gen_range(0.0..20.0),
        efficiency_pct: 90.0 + rng.gen_range(0.0..8.0),
        last_update: now,
    }
}
