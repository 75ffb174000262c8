use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Failed to write response: {0}")]
    WriteFailed(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Service name too long: {0}")]
    ServiceNameTooLong(String),

    #[error("No next handler in chain")]
    NoNextHandler,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
