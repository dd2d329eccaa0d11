use sqlx::PgPool;

use crate::domain::Alert;
use crate::error::StoreError;

/// Fetch currently active alerts, newest first, capped at `limit`.
///
/// The station name comes from a LEFT JOIN so an alert whose station row
/// has gone missing still comes back, with `station_name` unset.
pub async fn active_alerts(pool: &PgPool, limit: i64) -> Result<Vec<Alert>, StoreError> {
    sqlx::query_as::<_, Alert>(
        r#"
        SELECT
            a.id,
            a.station_id,
            a.severity,
            a.status,
            a.message,
            a.created_at,
            s.name AS station_name
        FROM alerts a
        LEFT JOIN stations s ON s.id = a.station_id
        WHERE a.status = 'active'
        ORDER BY a.created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(StoreError::Read)
}
