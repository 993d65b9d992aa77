//! File format codecs for filetree.
//!
//! A codec turns the text of a file into a `Value` and back. The
//! `FormatRegistry` picks the codec for a file by its extension and always
//! returns one: unknown extensions use JSON.
//!
//! # Example
//!
//! ```rust
//! use filetree_codec::FormatRegistry;
//! use filetree_core::Value;
//!
//! let registry = FormatRegistry::global();
//! let value = registry.decode("{\"hello\": \"world\"}", "json").unwrap();
//! let yaml = registry.encode(&value, "yaml").unwrap();
//!
//! assert_eq!(yaml, "hello: world\n");
//! assert_eq!(registry.decode(&yaml, "yaml").unwrap(), value);
//! ```

mod codec;
mod convert;
mod error;
mod registry;

pub use codec::{Codec, JsonCodec, YamlCodec};
pub use convert::{json_to_value, value_to_json};
pub use error::CodecError;
pub use registry::FormatRegistry;
