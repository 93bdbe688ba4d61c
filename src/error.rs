use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaError>;

#[derive(Debug, Error)]
pub enum CaError {
    /// Malformed user input: empty names, out-of-range levels, unknown
    /// profiles, bad menu selections. Shown to the user and recoverable
    /// inside the interactive shell.
    #[error("{0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CaError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
