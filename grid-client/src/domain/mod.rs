mod alert;
mod inverter;
mod reading;
mod station;
mod summary;

pub use alert::Alert;
pub use inverter::{Inverter, InverterRefresh, NewInverter};
pub use reading::Reading;
pub use station::Station;
pub use summary::{
    DailySummary, SummaryDelta, CO2_TON_PER_KWH, SAMPLES_PER_HOUR, TARIFF_RMB_PER_KWH,
};
