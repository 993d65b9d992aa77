//! Codec errors.

/// Errors raised by a codec.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The text could not be parsed.
    #[error("decode error ({format}): {message}")]
    Decode { format: String, message: String },

    /// The value could not be rendered as text.
    #[error("encode error ({format}): {message}")]
    Encode { format: String, message: String },
}

impl CodecError {
    pub fn decode(format: impl Into<String>, message: impl ToString) -> Self {
        CodecError::Decode {
            format: format.into(),
            message: message.to_string(),
        }
    }

    pub fn encode(format: impl Into<String>, message: impl ToString) -> Self {
        CodecError::Encode {
            format: format.into(),
            message: message.to_string(),
        }
    }

    /// Name of the codec that failed.
    pub fn format(&self) -> &str {
        match self {
            CodecError::Decode { format, .. } | CodecError::Encode { format, .. } => format,
        }
    }
}
