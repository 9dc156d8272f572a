use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompactError {
    #[error("Root must be a sequence or mapping, got {kind}")]
    ScalarRoot { kind: &'static str },
    #[error("Cycle detected at {path}")]
    Cycle { path: String },
    #[error("Container already mutably borrowed at {path}")]
    Borrowed { path: String },
    #[error("Nesting depth exceeds limit of {limit} at {path}")]
    DepthExceeded { limit: usize, path: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::convert::Infallible> for CompactError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, CompactError>;
