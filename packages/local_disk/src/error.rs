//! Error types for building and reading directory trees.

use std::io;
use std::path::PathBuf;

use filetree_codec::CodecError;
use filetree_core::NormalizeError;

#[derive(thiserror::Error, Debug)]
pub enum TreeError {
    #[error("{0}")]
    Normalize(#[from] NormalizeError),

    /// An existing file could not be decoded for merge-on-write.
    #[error("{source} for \"{key}\".")]
    FileMerge {
        key: String,
        #[source]
        source: CodecError,
    },

    #[error("Could not encode \"{key}\": {source}")]
    Encode {
        key: String,
        #[source]
        source: CodecError,
    },

    /// A file could not be decoded while reading a tree.
    #[error("Could not decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// Filesystem errors are passed through untouched.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TreeError {
    /// The document key that caused the error, if the error has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            TreeError::Normalize(e) => Some(e.key()),
            TreeError::FileMerge { key, .. } | TreeError::Encode { key, .. } => Some(key),
            TreeError::Decode { .. } | TreeError::Io(_) => None,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, TreeError::Io(_))
    }
}
