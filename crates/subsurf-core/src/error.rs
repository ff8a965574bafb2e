use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubsurfError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed file: {0}")]
    MalformedFile(String),

    #[error("Inconsistent topology: {0}")]
    InconsistentTopology(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SubsurfError>;
