#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("pricing service authentication failed: {0}")]
    Auth(String),

    #[error("pricing service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("unknown device: {0}")]
    UnknownDevice(String),

    #[error("device matches more than one vendor: {0}")]
    AmbiguousDevice(String),

    #[error("no price in catalog for usage type: {0}")]
    MissingPriceData(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed price record: {0}")]
    PriceData(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CostError>;
