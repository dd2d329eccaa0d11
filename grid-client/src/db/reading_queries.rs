use sqlx::PgPool;
use time::OffsetDateTime;

use crate::domain::Reading;
use crate::error::StoreError;

const READING_COLUMNS: &str =
    "station_id, ts, power_kw, voltage_v, current_a, temperature_c, efficiency_pct";

/// Fetch the single newest reading, optionally narrowed to one station.
/// Returns `None` when the station has no readings at all.
pub async fn latest_reading(
    pool: &PgPool,
    station_id: Option<i64>,
) -> Result<Option<Reading>, StoreError> {
    let row = match station_id {
        Some(id) => {
            sqlx::query_as::<_, Reading>(&format!(
                r#"
                SELECT {READING_COLUMNS}
                FROM power_readings
                WHERE station_id = $1
                ORDER BY ts DESC
                LIMIT 1
                "#
            ))
            .bind(id)
            .fetch_optional(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Reading>(&format!(
                r#"
                SELECT {READING_COLUMNS}
                FROM power_readings
                ORDER BY ts DESC
                LIMIT 1
                "#
            ))
            .fetch_optional(pool)
            .await
        }
    };

    row.map_err(StoreError::Read)
}

/// Fetch all readings at or after `since`, oldest first.
pub async fn readings_since(
    pool: &PgPool,
    since: OffsetDateTime,
    station_id: Option<i64>,
) -> Result<Vec<Reading>, StoreError> {
    let rows = match station_id {
        Some(id) => {
            sqlx::query_as::<_, Reading>(&format!(
                r#"
                SELECT {READING_COLUMNS}
                FROM power_readings
                WHERE ts >= $1 AND station_id = $2
                ORDER BY ts
                "#
            ))
            .bind(since)
            .bind(id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Reading>(&format!(
                r#"
                SELECT {READING_COLUMNS}
                FROM power_readings
                WHERE ts >= $1
                ORDER BY ts
                "#
            ))
            .bind(since)
            .fetch_all(pool)
            .await
        }
    };

    rows.map_err(StoreError::Read)
}

/// Append one reading to the telemetry stream.
pub async fn insert_reading(pool: &PgPool, reading: &Reading) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO power_readings
            (station_id, ts, power_kw, voltage_v, current_a, temperature_c, efficiency_pct)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(reading.station_id)
    .bind(reading.ts)
    .bind(reading.power_kw)
    .bind(reading.voltage_v)
    .bind(reading.current_a)
    .bind(reading.temperature_c)
    .bind(reading.efficiency_pct)
    .execute(pool)
    .await
    .map(|_| ())
    .map_err(StoreError::Write)
}
