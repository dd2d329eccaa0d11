use time::OffsetDateTime;

/// An alert raised by external threshold detection. `station_name` is
/// denormalized at read time; a missing station relation leaves it `None`
/// rather than failing the query.
#[derive(Debug, Clone, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alert {
    pub id: i64,
    pub station_id: i64,
    pub severity: String,
    pub status: String,
    pub message: String,
    pub created_at: OffsetDateTime,
    pub station_name: Option<String>,
}
