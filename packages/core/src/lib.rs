//! Core filetree: documents and their canonical form
//!
//! This layer knows nothing about disks or encodings:
//! - `Value` / `Document`: the in-memory tree describing a directory hierarchy
//! - `parse_key`: decides whether a key is a directory, a file or a property chain
//! - `normalize`: canonicalizes a document so every key's role is unambiguous
//! - `deep_merge`: the merge policy used when writing over existing files
//!
//! # Example
//!
//! ```rust
//! use collection_literals::btree;
//! use filetree_core::{normalize, Document, Value};
//!
//! let doc: Document = btree! {
//!     "dir/a.json".into() => Value::map(),
//!     "dir/b.json".into() => Value::map(),
//! };
//! let expected: Document = btree! {
//!     "dir/".into() => Value::Map(btree! {
//!         "a.json".into() => Value::map(),
//!         "b.json".into() => Value::map(),
//!     }),
//! };
//!
//! assert_eq!(normalize(&doc).unwrap(), expected);
//! ```

mod error;
mod format;
mod merge;
mod normalize;
mod property;
mod segment;
mod value;

pub use error::NormalizeError;
pub use format::{extension_of, FileFormat};
pub use merge::deep_merge;
pub use normalize::{normalize, normalize_into};
pub use property::set_path;
pub use segment::{
    directory_name, parse_key, ParsedKey, PathSegment, PropertyChain, PROPERTY_SEPARATOR,
    SEPARATOR,
};
pub use value::{Document, Value};
