/// A physical generation/storage site. Provisioned out-of-band; this
/// layer only ever reads stations.
#[derive(Debug, Clone, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub capacity_mw: f64,
    pub status: String,
}
