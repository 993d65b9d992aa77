//! Directory trees from documents, and documents from directory trees.
//!
//! `build_directory` normalizes a document and writes it under a root
//! directory, merging structured contents into files that already exist.
//! `read_directory` goes the other way and returns a canonical document.
//!
//! # Example
//!
//! ```rust
//! use collection_literals::btree;
//! use filetree_core::Value;
//! use filetree_local::{build_directory, read_directory};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let doc = btree! {
//!     "config/app.json".into() => Value::Map(btree! {
//!         "server.port".into() => Value::from(8080),
//!     }),
//! };
//!
//! build_directory(&doc, dir.path()).unwrap();
//! let tree = Value::Map(read_directory(dir.path()).unwrap());
//!
//! assert_eq!(
//!     tree.get(&["config/", "app.json", "server", "port"]),
//!     Some(&Value::from(8080))
//! );
//! ```

use std::path::Path;

use filetree_core::Document;

mod error;
mod fs;
mod memory;
mod reader;
mod writer;

pub use error::TreeError;
pub use fs::{Filesystem, LocalFs};
pub use memory::MemoryFs;
pub use reader::TreeReader;
pub use writer::TreeWriter;

/// Normalize `doc` and write it under `root` on the local disk.
pub fn build_directory(doc: &Document, root: &Path) -> Result<(), TreeError> {
    let canonical = normalize(doc)?;
    log::info!("Building {}", root.display());
    TreeWriter::new(LocalFs).write(&canonical, root)
}

/// Read the tree under `root` on the local disk.
pub fn read_directory(root: &Path) -> Result<Document, TreeError> {
    log::info!("Reading {}", root.display());
    TreeReader::new(LocalFs).read(root)
}

/// The canonical form of `doc`.
pub fn normalize(doc: &Document) -> Result<Document, TreeError> {
    Ok(filetree_core::normalize(doc)?)
}
