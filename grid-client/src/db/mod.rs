pub mod alert_queries;
pub mod inverter_queries;
pub mod reading_queries;
pub mod station_queries;
pub mod summary_queries;
