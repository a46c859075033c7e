//! Error types for the Noty core library.

use thiserror::Error;

/// All errors that can occur within the Noty core library.
#[derive(Debug, Error)]
pub enum NotyError {
    /// A SQLite operation on the local store failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A page ID was requested that does not exist in the page index.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// A block ID was requested that does not exist on the open page.
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// The opened file is not a valid Noty local store.
    #[error("Invalid store: {0}")]
    InvalidStore(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored page data could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NotyError`].
pub type Result<T> = std::result::Result<T, NotyError>;

impl NotyError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::PageNotFound(_) => "Page no longer exists".to_string(),
            Self::BlockNotFound(_) => "Block no longer exists".to_string(),
            Self::InvalidStore(_) => "Could not open the notes file".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_not_found_message() {
        let e = NotyError::PageNotFound("abc".to_string());
        assert_eq!(e.to_string(), "Page not found: abc");
        assert_eq!(e.user_message(), "Page no longer exists");
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let e: NotyError = parse.into();
        assert!(e.user_message().starts_with("Data format error"));
    }
}
