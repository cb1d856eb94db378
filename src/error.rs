use thiserror::Error;

/// Failures surfaced by the data-access layer. "Not found" is never an error
/// here; lookups signal absence through `Option` instead.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("database connection failed: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
