use std::fmt;
use std::path::PathBuf;

/// Result type alias for tracesum core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tracesum core operations
#[derive(Debug)]
pub enum Error {
    /// I/O errors from the filesystem
    Io(std::io::Error),

    /// A required log file (or its node directory) does not exist
    MissingLog(PathBuf),

    /// CSV decoding errors
    Csv(csv::Error),

    /// Malformed or inconsistent log contents
    Log(String),

    /// Statistics calculation errors
    Stats(String),

    /// Other errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::MissingLog(path) => write!(f, "Missing log file: {}", path.display()),
            Error::Csv(e) => write!(f, "CSV error: {e}"),
            Error::Log(msg) => write!(f, "Log error: {msg}"),
            Error::Stats(msg) => write!(f, "Statistics error: {msg}"),
            Error::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
