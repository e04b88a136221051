use crate::exchange_rates_api::ApiError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected `/convert <amount> <from> to <to>`")]
    Structure,

    #[error("invalid amount {0:?}")]
    Amount(String),

    #[error("invalid currency code {0:?}")]
    CurrencyFormat(String),

    #[error("rate provider answered with status {0}")]
    Status(StatusCode),

    #[error("rate provider unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("rate provider rejected the request: {0}")]
    Rejected(ApiError),

    #[error("malformed rates response: {0}")]
    Decode(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("currency {0} is not in the rate table")]
    CurrencyNotFound(String),

    #[error(transparent)]
    Unexpected(Box<dyn std::error::Error + Send + Sync>),
}

/// Category of an [`Error`] as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Structure,
    Numeric,
    Fetch,
    NotFound,
    Unexpected,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            Structure => ErrorKind::Structure,
            Amount(_) | CurrencyFormat(_) => ErrorKind::Numeric,
            Status(_) | Transport(_) | Rejected(_) => ErrorKind::Fetch,
            CurrencyNotFound(_) => ErrorKind::NotFound,
            // A body we cannot read is reported with its detail, like any
            // other unclassified failure.
            Decode(_) | Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}
