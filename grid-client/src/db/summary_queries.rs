use sqlx::PgPool;
use time::Date;

use crate::domain::{DailySummary, SummaryDelta, CO2_TON_PER_KWH, TARIFF_RMB_PER_KWH};
use crate::error::StoreError;

const SUMMARY_COLUMNS: &str = "station_id, date, total_energy_kwh, revenue_rmb, \
                               co2_reduction_ton, peak_power_kw, average_efficiency";

/// Fetch the summary rows for one calendar date, optionally narrowed to
/// one station. Stations without a row for the date are simply absent.
pub async fn summaries_on(
    pool: &PgPool,
    date: Date,
    station_id: Option<i64>,
) -> Result<Vec<DailySummary>, StoreError> {
    let rows = match station_id {
        Some(id) => {
            sqlx::query_as::<_, DailySummary>(&format!(
                r#"
                SELECT {SUMMARY_COLUMNS}
                FROM daily_summaries
                WHERE date = $1 AND station_id = $2
                "#
            ))
            .bind(date)
            .bind(id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, DailySummary>(&format!(
                r#"
                SELECT {SUMMARY_COLUMNS}
                FROM daily_summaries
                WHERE date = $1
                "#
            ))
            .bind(date)
            .fetch_all(pool)
            .await
        }
    };

    rows.map_err(StoreError::Read)
}

/// Roll one reading's contribution into a station's summary row for `date`.
///
/// A single atomic insert-or-accumulate so that two concurrent writers for
/// the same (station, date) cannot lose an update: energy adds, revenue and
/// CO2 are recomputed from the new cumulative energy, the peak takes
/// GREATEST, and the average efficiency is overwritten with the latest
/// reading's value.
pub async fn accumulate_summary(
    pool: &PgPool,
    station_id: i64,
    date: Date,
    delta: &SummaryDelta,
) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO daily_summaries
            (station_id, date, total_energy_kwh, revenue_rmb,
             co2_reduction_ton, peak_power_kw, average_efficiency)
        VALUES ($1, $2, $3, $3 * $4, $3 * $5, $6, $7)
        ON CONFLICT (station_id, date) DO UPDATE SET
            total_energy_kwh   = daily_summaries.total_energy_kwh + EXCLUDED.total_energy_kwh,
            revenue_rmb        = (daily_summaries.total_energy_kwh + EXCLUDED.total_energy_kwh) * $4,
            co2_reduction_ton  = (daily_summaries.total_energy_kwh + EXCLUDED.total_energy_kwh) * $5,
            peak_power_kw      = GREATEST(daily_summaries.peak_power_kw, EXCLUDED.peak_power_kw),
            average_efficiency = EXCLUDED.average_efficiency
        "#,
    )
    .bind(station_id)
    .bind(date)
    .bind(delta.energy_kwh)
    .bind(TARIFF_RMB_PER_KWH)
    .bind(CO2_TON_PER_KWH)
    .bind(delta.peak_power_kw)
    .bind(delta.average_efficiency)
    .execute(pool)
    .await
    .map(|_| ())
    .map_err(StoreError::Write)
}
