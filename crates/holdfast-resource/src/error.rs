//! Error types for resource loading.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while building a vector from a resource.
///
/// Loading is all-or-nothing: when any of these is returned, no partially
/// built container escapes and every object allocated so far has been
/// released.
#[derive(Debug)]
pub enum ResourceLoadError {
    /// The resource path does not exist.
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },
    /// Reading the resource failed.
    Io {
        /// The path being read, when loading from the filesystem.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The resource is not well-formed JSON.
    Malformed(serde_json::Error),
    /// The document root is not a sequence.
    RootNotSequence {
        /// Kind of the root value that was found instead.
        found: &'static str,
    },
    /// A `null` value was found; slots cannot be empty.
    NullValue {
        /// JSON pointer (RFC 6901) to the offending value.
        pointer: String,
    },
    /// Containers are nested deeper than the configured limit.
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
    /// The file is larger than the configured limit.
    TooLarge {
        /// Size of the file in bytes.
        bytes: u64,
        /// The configured maximum size.
        limit: u64,
    },
}

impl ResourceLoadError {
    /// Classify an I/O failure on `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: Some(path.to_path_buf()),
                source,
            }
        }
    }

    /// Attach `path` to an I/O error raised while reading it.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Io { path: None, source } => Self::from_io(path, source),
            other => other,
        }
    }
}

impl fmt::Display for ResourceLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "resource not found: {}", path.display()),
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "I/O error reading {}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "I/O error: {source}"),
            Self::Malformed(e) => write!(f, "malformed resource: {e}"),
            Self::RootNotSequence { found } => {
                write!(f, "resource root must be a sequence, found {found}")
            }
            Self::NullValue { pointer } => {
                write!(f, "null value at '{pointer}' cannot be stored")
            }
            Self::DepthExceeded { limit } => {
                write!(f, "resource nesting exceeds depth limit {limit}")
            }
            Self::TooLarge { bytes, limit } => {
                write!(f, "resource is {bytes} bytes, limit is {limit} bytes")
            }
        }
    }
}

impl Error for ResourceLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ResourceLoadError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::Io {
                path: None,
                source: e.into(),
            }
        } else {
            Self::Malformed(e)
        }
    }
}

impl From<io::Error> for ResourceLoadError {
    fn from(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
