//! Load failures. Both variants are terminal for a single load attempt.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The path could not be opened or read as text.
    #[error("Failed to open OBJ file: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but produced no positions or no triangles.
    #[error("OBJ file is empty or has no usable faces: {}", path.display())]
    EmptyOrUnsupported { path: PathBuf },
}

/// Coarse classification for callers that only branch on the failure kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadErrorKind {
    NotFound,
    EmptyOrUnsupported,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::NotFound { .. } => LoadErrorKind::NotFound,
            LoadError::EmptyOrUnsupported { .. } => LoadErrorKind::EmptyOrUnsupported,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = LoadError::NotFound {
            path: PathBuf::from("missing.obj"),
            source: io::Error::new(io::ErrorKind::NotFound, "nope"),
        };
        assert_eq!(err.kind(), LoadErrorKind::NotFound);
        assert!(err.to_string().contains("missing.obj"));

        let err = LoadError::EmptyOrUnsupported {
            path: PathBuf::from("empty.obj"),
        };
        assert_eq!(err.kind(), LoadErrorKind::EmptyOrUnsupported);
        assert!(err.to_string().contains("empty.obj"));
    }
}
