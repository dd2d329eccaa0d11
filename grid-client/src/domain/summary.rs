use time::Date;

/// Fixed tariff converting cumulative energy into revenue.
pub const TARIFF_RMB_PER_KWH: f64 = 0.85;
/// Fixed grid emission factor converting cumulative energy into CO2 offset.
pub const CO2_TON_PER_KWH: f64 = 0.0007;
/// Devices sample on a five-minute tick, so one reading contributes
/// `power_kw / 12` kWh to the day's total.
pub const SAMPLES_PER_HOUR: f64 = 12.0;

/// Per-station, per-day accumulated metrics. Keyed by `(station_id, date)`
/// and upserted as readings arrive; within one day `total_energy_kwh` and
/// `peak_power_kw` never decrease.
#[derive(Debug, Clone, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailySummary {
    pub station_id: i64,
    pub date: Date,
    pub total_energy_kwh: f64,
    pub revenue_rmb: f64,
    pub co2_reduction_ton: f64,
    pub peak_power_kw: f64,
    pub average_efficiency: f64,
}

/// The contribution of a single reading to a day's summary row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryDelta {
    pub energy_kwh: f64,
    pub peak_power_kw: f64,
    pub average_efficiency: f64,
}

impl SummaryDelta {
    pub fn from_reading(power_kw: f64, efficiency_pct: f64) -> Self {
        Self {
            energy_kwh: power_kw / SAMPLES_PER_HOUR,
            peak_power_kw: power_kw,
            average_efficiency: efficiency_pct,
        }
    }
}
