/// Errors surfaced by the store layer. Queries do not retry; callers see
/// the underlying driver error unmodified.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    Read(#[source] sqlx::Error),
    #[error("store write failed: {0}")]
    Write(#[source] sqlx::Error),
    #[error("store connection failed: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("no backend store configured")]
    NotConfigured,
}
