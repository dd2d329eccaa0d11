use time::OffsetDateTime;

/// One telemetry sample from a station. Append-only: rows are never
/// updated once written.
#[derive(Debug, Clone, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reading {
    pub station_id: i64,
    pub ts: OffsetDateTime,
    pub power_kw: f64,
    pub voltage_v: f64,
    pub current_a: f64,
    pub temperature_c: f64,
    pub efficiency_pct: f64,
}
