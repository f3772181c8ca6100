#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown opportunity: {0}")]
    UnknownOpportunity(u64),
    #[error("no completed assessment for member: {0}")]
    ProfileNotFound(String),
}
