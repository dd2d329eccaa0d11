use sqlx::PgPool;

use crate::domain::{Inverter, InverterRefresh, NewInverter};
use crate::error::StoreError;

/// Fetch a station's inverters ordered by code.
pub async fn inverters_for(pool: &PgPool, station_id: i64) -> Result<Vec<Inverter>, StoreError> {
    sqlx::query_as::<_, Inverter>(
        r#"
        SELECT id, station_id, inverter_code, model, status,
               current_power_kw, temperature_c, efficiency_pct, last_update
        FROM inverters
        WHERE station_id = $1
        ORDER BY inverter_code
        "#,
    )
    .bind(station_id)
    .fetch_all(pool)
    .await
    .map_err(StoreError::Read)
}

/// Create one inverter; the store assigns the row id.
pub async fn insert_inverter(pool: &PgPool, inverter: &NewInverter) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        INSERT INTO inverters
            (station_id, inverter_code, model, status,
             current_power_kw, temperature_c, efficiency_pct, last_update)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(inverter.station_id)
    .bind(&inverter.inverter_code)
    .bind(&inverter.model)
    .bind(&inverter.refresh.status)
    .bind(inverter.refresh.current_power_kw)
    .bind(inverter.refresh.temperature_c)
    .bind(inverter.refresh.efficiency_pct)
    .bind(inverter.refresh.last_update)
    .execute(pool)
    .await
    .map(|_| ())
    .map_err(StoreError::Write)
}

/// Overwrite an existing inverter's live fields and bump `last_update`.
pub async fn refresh_inverter(
    pool: &PgPool,
    id: i64,
    refresh: &InverterRefresh,
) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        UPDATE inverters
        SET status = $2,
            current_power_kw = $3,
            temperature_c = $4,
            efficiency_pct = $5,
            last_update = $6
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&refresh.status)
    .bind(refresh.current_power_kw)
    .bind(refresh.temperature_c)
    .bind(refresh.efficiency_pct)
    .bind(refresh.last_update)
    .execute(pool)
    .await
    .map(|_| ())
    .map_err(StoreError::Write)
}
