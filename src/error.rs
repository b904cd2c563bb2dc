//! Error types for subset operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for subset operations
pub type Result<T> = std::result::Result<T, SubsetError>;

/// Every failure is fatal to the invocation that hit it.
#[derive(Error, Debug)]
pub enum SubsetError {
    /// One or more requested category names are absent from the categories table
    #[error("Category not found: {}", names.join(", "))]
    CategoryNotFound { names: Vec<String> },

    /// No category names were given at all
    #[error("No categories requested")]
    EmptySelection,

    /// An image file referenced by an annotation does not exist in the source directory
    #[error("Image file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Unparseable JSON, missing top-level keys or broken cross references
    #[error("Malformed annotation file {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// Read, write or permission failures
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SubsetError {
    pub fn category_not_found<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CategoryNotFound {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn missing_file<P: AsRef<Path>>(path: P) -> Self {
        Self::MissingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn malformed<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::MalformedInput {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Attach the offending path to an I/O error
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Map a serde_json failure: I/O problems stay I/O, everything else is malformed input
    pub fn from_json<P: AsRef<Path>>(path: P, err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::io(path, err.into())
        } else {
            Self::malformed(path, err.to_string())
        }
    }
}
