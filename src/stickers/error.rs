use thiserror::Error;

#[derive(Error, Debug)]
pub enum StickerError {
    #[error("Invalid box count: {0:?}")]
    InvalidBoxCount(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl StickerError {
    /// True for errors caused by what the user typed, as opposed to setup or I/O failures.
    pub fn is_user_input(&self) -> bool {
        matches!(self, StickerError::InvalidBoxCount(_))
    }
}

pub type Result<T> = std::result::Result<T, StickerError>;
