use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid ISO country code: {0:?}")]
    InvalidIsoCode(String),
    #[error("invalid phone code: {0:?}")]
    InvalidPhoneCode(String),
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
