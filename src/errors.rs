use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing of files and HTTP bodies
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction or usage
    #[error("HTTP error: {0}")]
    Http(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Base58 / Base58Check decoding
    #[error("Base58 error: {0}")]
    Base58(#[from] Base58Error),
}

/// Base58 decoding and checksum errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Error {
    /// Symbol outside the Base58 alphabet
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Decoded value needs more bytes than the caller asked for
    #[error("decoded value does not fit in {requested} bytes")]
    Overflow { requested: usize },

    /// Buffer too short to carry a 4-byte checksum
    #[error("payload too short for a 4-byte checksum")]
    TooShort,

    /// Trailing checksum does not match double-SHA256 of the payload
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

impl From<glob::PatternError> for AppError {
    fn from(err: glob::PatternError) -> Self {
        AppError::Config(format!("Glob pattern error: {}", err))
    }
}

impl From<glob::GlobError> for AppError {
    fn from(err: glob::GlobError) -> Self {
        AppError::Io(err.into())
    }
}
