use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChromaError {
    #[error("invalid color format: {input:?} (expected 6 hex digits, optional leading '#')")]
    InvalidColorFormat { input: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

impl ChromaError {
    pub fn invalid_color(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChromaError>;
