use thiserror::Error;

pub type TickResult<T> = Result<T, TickError>;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
