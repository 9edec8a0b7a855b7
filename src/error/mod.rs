//! Error types and handling infrastructure for directory listing

use anyhow::Error;
use std::path::PathBuf;

/// Core error types for the listing process
#[derive(Debug, thiserror::Error)]
pub enum ListingErrorKind {
    #[error("Input path does not exist: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Traversal error: {message}")]
    Traversal {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ListingErrorKind {
    pub fn traversal(message: String, path: Option<PathBuf>) -> Self {
        Self::Traversal { message, path }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn serialization(message: String) -> Self {
        Self::Serialization { message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Path the failure refers to, when one is known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InputNotFound { path } | Self::NotADirectory { path } => Some(path),
            Self::Traversal { path, .. } | Self::Io { path, .. } => path.as_ref(),
            Self::Serialization { .. } | Self::Configuration { .. } => None,
        }
    }
}

/// Main error type for listing operations
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("{kind}")]
    Listing {
        kind: ListingErrorKind,
        #[source]
        source: Option<Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ListingError {
    pub fn listing(kind: ListingErrorKind) -> Self {
        Self::Listing { kind, source: None }
    }

    pub fn listing_with_source(kind: ListingErrorKind, source: Error) -> Self {
        Self::Listing {
            kind,
            source: Some(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::listing(ListingErrorKind::configuration(message.into()))
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Categorized kind, if this error carries one
    pub fn kind(&self) -> Option<&ListingErrorKind> {
        match self {
            Self::Listing { kind, .. } => Some(kind),
            Self::Other(_) => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Listing { kind, .. } => match kind {
                ListingErrorKind::Traversal {
                    message,
                    path: Some(path),
                } => format!("Failed to read {}: {}", path.display(), message),
                ListingErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("Failed to write {}: {}", path.display(), message),
                _ => kind.to_string(),
            },
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

impl From<walkdir::Error> for ListingError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        let message = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        Self::listing_with_source(ListingErrorKind::traversal(message, path), err.into())
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::listing_with_source(
            ListingErrorKind::serialization(err.to_string()),
            err.into(),
        )
    }
}

/// Result type for listing operations
pub type ListingResult<T> = Result<T, ListingError>;
