//! Writes canonical documents out as directory trees.

use std::path::Path;

use filetree_codec::{Codec, FormatRegistry};
use filetree_core::{deep_merge, directory_name, Document, NormalizeError, Value};

use crate::error::TreeError;
use crate::fs::Filesystem;

/// Materializes a canonical document under a root directory.
///
/// Directory markers (`"name/"`) become directories, every other key becomes
/// a file. When a file already exists and the new contents are structured,
/// the existing file is decoded and the new contents are merged into it.
///
/// The document must already be canonical; see `filetree_core::normalize`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use collection_literals::btree;
/// use filetree_core::Value;
/// use filetree_local::{MemoryFs, TreeWriter};
///
/// let mut fs = MemoryFs::new();
/// let doc = btree! {
///     "config/".into() => Value::Map(btree! {
///         "notes.txt".into() => Value::from("remember"),
///     }),
/// };
///
/// TreeWriter::new(&mut fs).write(&doc, Path::new("out")).unwrap();
/// assert_eq!(fs.file(Path::new("out/config/notes.txt")), Some("remember"));
/// ```
pub struct TreeWriter<'r, F> {
    fs: F,
    formats: &'r FormatRegistry,
    merge_existing: bool,
}

impl<F: Filesystem> TreeWriter<'static, F> {
    /// A writer using the standard format registry.
    pub fn new(fs: F) -> Self {
        Self::with_formats(fs, FormatRegistry::global())
    }
}

impl<'r, F: Filesystem> TreeWriter<'r, F> {
    pub fn with_formats(fs: F, formats: &'r FormatRegistry) -> Self {
        Self {
            fs,
            formats,
            merge_existing: true,
        }
    }

    /// Whether structured values are merged into files that already exist.
    /// On by default; when off, existing files are overwritten.
    pub fn merge_existing(mut self, merge: bool) -> Self {
        self.merge_existing = merge;
        self
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Write `doc` under `root`.
    ///
    /// Directories are created only when a file is written into them, so
    /// nothing is created for a document without files. Errors stop the
    /// walk; files written before the error are left in place.
    pub fn write(&mut self, doc: &Document, root: &Path) -> Result<(), TreeError> {
        self.write_dir(doc, root)
    }

    fn write_dir(&mut self, doc: &Document, dir: &Path) -> Result<(), TreeError> {
        for (key, value) in doc {
            match directory_name(key) {
                Some(name) => {
                    let Value::Map(entries) = value else {
                        return Err(NormalizeError::DirectoryRequiresEntries {
                            key: key.clone(),
                            found: value.kind(),
                        }
                        .into());
                    };
                    self.write_dir(entries, &dir.join(name))?;
                }
                None => self.write_file(dir, key, value)?,
            }
        }
        Ok(())
    }

    fn write_file(&mut self, dir: &Path, key: &str, value: &Value) -> Result<(), TreeError> {
        let path = dir.join(key);
        let codec = self.formats.resolve_name(key);

        self.fs.create_dir_all(dir)?;

        let contents = if self.merge_existing && value.is_structured() && self.fs.exists(&path) {
            log::debug!("Merging into {}...", path.display());
            let existing = self.fs.read_to_string(&path)?;
            let mut merged = codec
                .decode(&existing)
                .map_err(|source| TreeError::FileMerge {
                    key: key.to_string(),
                    source,
                })?;
            deep_merge(&mut merged, value.clone());
            render(codec, key, &merged)?
        } else {
            render(codec, key, value)?
        };

        log::debug!("Writing {}...", path.display());
        self.fs.write(&path, &contents)?;
        Ok(())
    }
}

fn render(codec: &dyn Codec, key: &str, value: &Value) -> Result<String, TreeError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => codec.encode(other).map_err(|source| TreeError::Encode {
            key: key.to_string(),
            source,
        }),
    }
}
