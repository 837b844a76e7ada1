//! Error types.
//!
//! Lookups that find nothing are not errors in this crate; they return
//! `Option`. The types here cover the two genuinely fallible surfaces:
//! rejecting an invalid configuration, and file I/O.

use thiserror::Error;

#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// A configuration value was rejected at construction time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A bounded structure was asked to hold zero entries.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}

/// A file helper failed.
///
/// Each variant names the operation and carries the path it was applied to,
/// with the underlying [`io::Error`] as its source.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum FileError {
    /// Reading a file failed.
    #[error("failed to read {path}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing or appending to a file failed.
    #[error("failed to write {path}")]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Querying file metadata failed.
    #[error("failed to stat {path}")]
    Metadata {
        /// File that was inspected.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Creating or listing a directory failed.
    #[error("directory operation failed on {path}")]
    Directory {
        /// Directory that was accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

#[cfg(feature = "std")]
impl FileError {
    /// Returns the path the failed operation was applied to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Read { path, .. }
            | FileError::Write { path, .. }
            | FileError::Metadata { path, .. }
            | FileError::Directory { path, .. } => path,
        }
    }

    /// Returns the kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FileError::Read { source, .. }
            | FileError::Write { source, .. }
            | FileError::Metadata { source, .. }
            | FileError::Directory { source, .. } => source.kind(),
        }
    }
}
