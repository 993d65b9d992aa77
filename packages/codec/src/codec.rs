//! Codec trait and the built-in codecs.

use filetree_core::Value;

use crate::convert::{json_to_value, value_to_json};
use crate::error::CodecError;

/// Converts between file text and `Value`.
///
/// Implementations must be inverse up to formatting:
/// `decode(encode(v)) == v` for every value the format can represent.
///
/// # Implementing Custom Codecs
///
/// ```rust
/// use filetree_codec::{Codec, CodecError};
/// use filetree_core::Value;
///
/// struct LinesCodec;
///
/// impl Codec for LinesCodec {
///     fn name(&self) -> &str {
///         "lines"
///     }
///
///     fn decode(&self, text: &str) -> Result<Value, CodecError> {
///         Ok(Value::from(text.lines().collect::<Vec<_>>()))
///     }
///
///     fn encode(&self, value: &Value) -> Result<String, CodecError> {
///         match value {
///             Value::Array(items) => Ok(items
///                 .iter()
///                 .filter_map(Value::as_str)
///                 .collect::<Vec<_>>()
///                 .join("\n")),
///             other => Err(CodecError::encode(self.name(), format!("cannot encode {}", other.kind()))),
///         }
///     }
/// }
/// ```
pub trait Codec: Send + Sync {
    /// Short name used in errors and logs.
    fn name(&self) -> &str;

    /// Decode file text into a Value.
    fn decode(&self, text: &str) -> Result<Value, CodecError>;

    /// Encode a Value into file text.
    fn encode(&self, value: &Value) -> Result<String, CodecError>;
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        (**self).decode(text)
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        (**self).encode(value)
    }
}

/// JSON, pretty-printed with two-space indentation.
///
/// This is also the fallback codec for every extension without a codec of
/// its own, including `txt`, `xml`, `js` and `ts`.
///
/// ```rust
/// use filetree_codec::{Codec, JsonCodec};
/// use filetree_core::Value;
///
/// let codec = JsonCodec;
/// let value = Value::from("hello");
///
/// let text = codec.encode(&value).unwrap();
/// assert_eq!(codec.decode(&text).unwrap(), value);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn name(&self) -> &str {
        "json"
    }

    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| CodecError::decode(self.name(), e))?;
        Ok(json_to_value(json))
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        serde_json::to_string_pretty(&value_to_json(value))
            .map_err(|e| CodecError::encode(self.name(), e))
    }
}

/// YAML block style.
///
/// An empty or whitespace-only file decodes to `Value::Null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn name(&self) -> &str {
        "yaml"
    }

    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        let json: serde_json::Value =
            serde_yaml::from_str(text).map_err(|e| CodecError::decode(self.name(), e))?;
        Ok(json_to_value(json))
    }

    fn encode(&self, value: &Value) -> Result<String, CodecError> {
        serde_yaml::to_string(&value_to_json(value)).map_err(|e| CodecError::encode(self.name(), e))
    }
}
