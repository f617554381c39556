use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Failed to load cache snapshot {path}: {reason}")]
    CacheLoadFailure { path: String, reason: String },

    #[error("Failed to persist cache snapshot: {0}")]
    PersistenceError(String),

    #[error("Upstream resolver did not answer in time")]
    UpstreamTimeout,

    #[error("Upstream socket error: {0}")]
    UpstreamSocketError(String),

    #[error("Listen socket error: {0}")]
    ListenSocketError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
