use thiserror::Error;

/// Errors surfaced by the account store. None are retried internally;
/// the calling layer owns retry and timeout policy.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("account not found")]
    NotFound,

    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl StoreError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Unavailable(other),
        }
    }
}
