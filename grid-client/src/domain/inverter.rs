use time::OffsetDateTime;

/// A DC/AC inverter inside a station. Created lazily the first time a
/// station is seeded and refreshed on every pass afterwards.
#[derive(Debug, Clone, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inverter {
    pub id: i64,
    pub station_id: i64,
    pub inverter_code: String,
    pub model: String,
    pub status: String,
    pub current_power_kw: f64,
    pub temperature_c: f64,
    pub efficiency_pct: f64,
    pub last_update: OffsetDateTime,
}

/// An inverter about to be created; the store assigns the row id.
#[derive(Debug, Clone)]
pub struct NewInverter {
    pub station_id: i64,
    pub inverter_code: String,
    pub model: String,
    pub refresh: InverterRefresh,
}

/// The mutable slice of an inverter row updated by a periodic refresh.
#[derive(Debug, Clone)]
pub struct InverterRefresh {
    pub status: String,
    pub current_power_kw: f64,
    pub temperature_c: f64,
    pub efficiency_pct: f64,
    pub last_update: OffsetDateTime,
}
