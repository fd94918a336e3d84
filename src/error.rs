//! Error types for the poster sorter.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the poster sorter.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    // Catalog errors
    #[error("{service} request failed: {message}")]
    CatalogRequest { service: &'static str, message: String },

    #[error("{service} response did not match the expected schema: {message}")]
    Schema { service: &'static str, message: String },

    #[error("No results found for '{0}'")]
    EmptyResult(String),

    #[error("No selection made for '{0}'")]
    Unresolved(String),

    // Library manager errors
    #[error("Not found in library: {0}")]
    NotInLibrary(String),

    #[error("Library entry has no usable path: {0}")]
    MissingPath(String),

    #[error("Library path {path} is not inside root folder {root}")]
    PathOutsideRoot { path: String, root: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Config parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error should abort the whole run rather than a single item.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound(_)
                | Error::Config(_)
                | Error::Toml(_)
                | Error::PathNotFound(_)
                | Error::NotADirectory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(Error::Config("missing api_key".into()).is_fatal());
        assert!(Error::NotADirectory("/tmp/x".into()).is_fatal());
        assert!(!Error::EmptyResult("Alien".into()).is_fatal());
        assert!(!Error::Unresolved("Alien".into()).is_fatal());
        assert!(!Error::CatalogRequest {
            service: "TMDB",
            message: "401".into()
        }
        .is_fatal());
    }
}
