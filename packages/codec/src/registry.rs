//! Codec lookup by file extension.

use std::collections::HashMap;
use std::fmt;

use filetree_core::{extension_of, FileFormat, Value};
use lazy_static::lazy_static;

use crate::codec::{Codec, JsonCodec, YamlCodec};
use crate::error::CodecError;

lazy_static! {
    static ref STANDARD: FormatRegistry = FormatRegistry::standard();
}

/// Routes encode/decode to a codec based on an extension token.
///
/// Lookup is total: tokens without a registered codec resolve to the
/// fallback JSON codec, so any file can be decoded for a merge.
///
/// # Example
///
/// ```rust
/// use filetree_codec::FormatRegistry;
/// use filetree_core::Value;
///
/// let registry = FormatRegistry::global();
///
/// assert_eq!(registry.resolve("yaml").name(), "yaml");
/// assert_eq!(registry.resolve("toml").name(), "json");
///
/// let value = registry.decode("a: 1", "yaml").unwrap();
/// assert_eq!(value.get(&["a"]), Some(&Value::from(1)));
/// ```
pub struct FormatRegistry {
    codecs: HashMap<String, Box<dyn Codec>>,
    fallback: Box<dyn Codec>,
}

impl FormatRegistry {
    /// Create a registry holding only the fallback codec.
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
            fallback: Box::new(JsonCodec),
        }
    }

    /// The standard table: JSON and YAML codecs.
    ///
    /// The remaining recognized tokens (`txt`, `xml`, `js`, `ts`) have no
    /// codec of their own and resolve to the JSON fallback.
    pub fn standard() -> Self {
        Self::new()
            .with(FileFormat::Json.extension(), JsonCodec)
            .with(FileFormat::Yaml.extension(), YamlCodec)
    }

    /// The process-wide standard registry.
    pub fn global() -> &'static FormatRegistry {
        &STANDARD
    }

    /// Register a codec for an extension token, replacing any earlier one.
    pub fn register(&mut self, token: impl Into<String>, codec: impl Codec + 'static) {
        self.codecs.insert(token.into(), Box::new(codec));
    }

    /// Builder form of [`FormatRegistry::register`].
    pub fn with(mut self, token: impl Into<String>, codec: impl Codec + 'static) -> Self {
        self.register(token, codec);
        self
    }

    /// The codec for an extension token.
    pub fn resolve(&self, token: &str) -> &dyn Codec {
        match self.codecs.get(token) {
            Some(codec) => codec.as_ref(),
            None => {
                log::trace!("No codec for '{}', using {}", token, self.fallback.name());
                self.fallback.as_ref()
            }
        }
    }

    /// The codec for a file name, resolved by its extension.
    ///
    /// Names without an extension use the fallback.
    pub fn resolve_name(&self, file_name: &str) -> &dyn Codec {
        match extension_of(file_name) {
            Some(token) => self.resolve(token),
            None => self.fallback.as_ref(),
        }
    }

    pub fn decode(&self, text: &str, token: &str) -> Result<Value, CodecError> {
        self.resolve(token).decode(text)
    }

    pub fn encode(&self, value: &Value, token: &str) -> Result<String, CodecError> {
        self.resolve(token).encode(value)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        f.debug_struct("FormatRegistry")
            .field("tokens", &tokens)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn standard_tokens() {
        let registry = FormatRegistry::standard();
        assert_eq!(registry.resolve("json").name(), "json");
        assert_eq!(registry.resolve("yaml").name(), "yaml");
    }

    #[test]
    fn text_tokens_use_the_json_fallback() {
        let registry = FormatRegistry::standard();
        for token in ["txt", "xml", "js", "ts"] {
            assert_eq!(registry.resolve(token).name(), "json");
        }

        let value = registry.decode("{\"a\": 1}", "xml").unwrap();
        assert_eq!(value.get(&["a"]), Some(&Value::from(1)));
        assert!(registry.decode("<schema/>", "xml").is_err());
    }

    #[test]
    fn unknown_tokens_fall_back_to_json() {
        let registry = FormatRegistry::standard();
        assert_eq!(registry.resolve("md").name(), "json");
        assert_eq!(registry.resolve("").name(), "json");

        let value = registry.decode("{\"a\": 1}", "conf").unwrap();
        assert_eq!(value.get(&["a"]), Some(&Value::from(1)));
    }

    #[test]
    fn resolve_by_file_name() {
        let registry = FormatRegistry::global();
        assert_eq!(registry.resolve_name("ask-states.yaml").name(), "yaml");
        assert_eq!(registry.resolve_name("index.ts").name(), "json");
        assert_eq!(registry.resolve_name("Makefile").name(), "json");
    }

    #[test]
    fn encode_dispatches_by_token() {
        let registry = FormatRegistry::global();
        let value = Value::Map(btree! { "a".into() => Value::from(1) });

        assert_eq!(registry.encode(&value, "json").unwrap(), "{\n  \"a\": 1\n}");
        assert_eq!(registry.encode(&value, "yaml").unwrap(), "a: 1\n");
        assert_eq!(registry.encode(&value, "txt").unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn registered_codecs_override() {
        let registry = FormatRegistry::new().with("yml", YamlCodec);

        assert_eq!(registry.resolve("yml").name(), "yaml");
        assert_eq!(registry.resolve("yaml").name(), "json");
    }

    #[test]
    fn debug_lists_tokens() {
        let debug = format!("{:?}", FormatRegistry::standard());
        assert!(debug.contains("yaml"));
        assert!(debug.contains("fallback"));
    }
}
