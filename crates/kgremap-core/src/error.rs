//! Error taxonomy for the remapping pipeline.
//!
//! Every variant names the file it came from; line-oriented variants also
//! carry the 1-based line number so a diagnostic can point at the record.

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use crate::sink::OutputFormat;

pub type Result<T> = std::result::Result<T, RemapError>;

/// Which lookup table an identifier was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Entity,
    Relation,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::Entity => f.write_str("entity"),
            IdKind::Relation => f.write_str("relation"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemapError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{}:{line}: expected {expected} tab-separated fields, found {found}",
        path.display()
    )]
    Format {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}:{line}: unknown {kind} identifier `{id}`", path.display())]
    Lookup {
        path: PathBuf,
        line: usize,
        kind: IdKind,
        id: String,
    },

    #[error("{}:{line}: short id `{value}` is not a valid index: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error(
        "{}:{line}: identifier `{id}` already defined on line {first_line}",
        path.display()
    )]
    DuplicateKey {
        path: PathBuf,
        line: usize,
        id: String,
        first_line: usize,
    },

    #[error("{}: failed to encode {format} output: {message}", path.display())]
    Encode {
        path: PathBuf,
        format: OutputFormat,
        message: String,
    },

    #[error("{}: failed to decode {format} input: {message}", path.display())]
    Decode {
        path: PathBuf,
        format: OutputFormat,
        message: String,
    },
}

impl RemapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The file the error is attributed to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RemapError::Io { path, .. }
            | RemapError::Format { path, .. }
            | RemapError::Lookup { path, .. }
            | RemapError::Parse { path, .. }
            | RemapError::DuplicateKey { path, .. }
            | RemapError::Encode { path, .. }
            | RemapError::Decode { path, .. } => path,
        }
    }

    /// 1-based line number, for errors tied to a single record.
    pub fn line(&self) -> Option<usize> {
        match self {
            RemapError::Format { line, .. }
            | RemapError::Lookup { line, .. }
            | RemapError::Parse { line, .. }
            | RemapError::DuplicateKey { line, .. } => Some(*line),
            RemapError::Io { .. } | RemapError::Encode { .. } | RemapError::Decode { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_file_and_line() {
        let err = RemapError::Lookup {
            path: PathBuf::from("data/train.txt"),
            line: 7,
            kind: IdKind::Entity,
            id: "/m/027rn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "data/train.txt:7: unknown entity identifier `/m/027rn`"
        );
        assert_eq!(err.line(), Some(7));
        assert_eq!(err.path(), std::path::Path::new("data/train.txt"));
    }

    #[test]
    fn io_error_has_no_line() {
        let err = RemapError::io(
            "missing/entity2id.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.line(), None);
        assert!(err.to_string().starts_with("missing/entity2id.txt: "));
    }
}
