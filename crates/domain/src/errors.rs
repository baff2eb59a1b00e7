use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Upstream resolution failed: {0}")]
    UpstreamFailure(String),
}
