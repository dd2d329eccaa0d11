use sqlx::PgPool;

use crate::domain::Station;
use crate::error::StoreError;

/// Fetch every station currently marked active. An empty fleet is an
/// empty vec, not an error.
pub async fn active_stations(pool: &PgPool) -> Result<Vec<Station>, StoreError> {
    sqlx::query_as::<_, Station>(
        r#"
        SELECT id, name, longitude, latitude, capacity_mw, status
        FROM stations
        WHERE status = 'active'
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(StoreError::Read)
}
