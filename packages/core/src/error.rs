//! Error types for normalization.

/// Errors raised while canonicalizing a document.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A key addressing a directory maps to something other than a document.
    #[error("Directory {key} must contain at least one file entry, found {found}.")]
    DirectoryRequiresEntries { key: String, found: &'static str },

    /// A key made only of path separators.
    #[error("Key {key:?} does not name a directory.")]
    EmptyPath { key: String },
}

impl NormalizeError {
    /// The offending key as it appeared in the input.
    pub fn key(&self) -> &str {
        match self {
            NormalizeError::DirectoryRequiresEntries { key, .. } => key,
            NormalizeError::EmptyPath { key } => key,
        }
    }
}
