//! Reads directory trees back into canonical documents.

use std::path::Path;

use filetree_codec::FormatRegistry;
use filetree_core::{set_path, Document, SEPARATOR};

use crate::error::TreeError;
use crate::fs::Filesystem;

/// Builds a document from the files under a root directory.
///
/// Every subdirectory becomes a `"name/"` key and every file a key holding
/// its decoded contents, so the result is already canonical. Directories
/// without files produce nothing.
pub struct TreeReader<'r, F> {
    fs: F,
    formats: &'r FormatRegistry,
}

impl<F: Filesystem> TreeReader<'static, F> {
    /// A reader using the standard format registry.
    pub fn new(fs: F) -> Self {
        Self::with_formats(fs, FormatRegistry::global())
    }
}

impl<'r, F: Filesystem> TreeReader<'r, F> {
    pub fn with_formats(fs: F, formats: &'r FormatRegistry) -> Self {
        Self { fs, formats }
    }

    /// Read the tree under `root`.
    ///
    /// # Errors
    ///
    /// `TreeError::Io` if `root` or anything below it cannot be listed or
    /// read, `TreeError::Decode` for a file its codec rejects.
    pub fn read(&self, root: &Path) -> Result<Document, TreeError> {
        let mut doc = Document::new();
        let mut keys = Vec::new();
        self.read_dir(root, &mut keys, &mut doc)?;
        Ok(doc)
    }

    fn read_dir(
        &self,
        dir: &Path,
        keys: &mut Vec<String>,
        doc: &mut Document,
    ) -> Result<(), TreeError> {
        for name in self.fs.list_dir(dir)? {
            let path = dir.join(&name);

            if self.fs.is_dir(&path)? {
                keys.push(format!("{}{}", name, SEPARATOR));
                self.read_dir(&path, keys, doc)?;
                keys.pop();
                continue;
            }

            log::debug!("Reading {}...", path.display());
            let text = self.fs.read_to_string(&path)?;
            let value = self
                .formats
                .resolve_name(&name)
                .decode(&text)
                .map_err(|source| TreeError::Decode {
                    path: path.clone(),
                    source,
                })?;

            keys.push(name);
            set_path(doc, keys.as_slice(), value);
            keys.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryFs;
    use collection_literals::btree;
    use filetree_core::Value;

    fn fixture() -> MemoryFs {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/tree/.ask")).unwrap();
        fs.create_dir_all(Path::new("/tree/lambda/src")).unwrap();
        fs.create_dir_all(Path::new("/tree/empty")).unwrap();
        fs.write(Path::new("/tree/skill.json"), "{\"manifest\": {\"version\": 1}}")
            .unwrap();
        fs.write(Path::new("/tree/.ask/config.yaml"), "profile: default\n")
            .unwrap();
        fs.write(Path::new("/tree/lambda/src/index.ts"), "{\"handler\": \"index.handler\"}")
            .unwrap();
        fs
    }

    #[test]
    fn reads_canonical_document() {
        let fs = fixture();
        let doc = TreeReader::new(fs).read(Path::new("/tree")).unwrap();

        let expected: Document = btree! {
            ".ask/".into() => Value::Map(btree! {
                "config.yaml".into() => Value::Map(btree! {
                    "profile".into() => Value::from("default"),
                }),
            }),
            "lambda/".into() => Value::Map(btree! {
                "src/".into() => Value::Map(btree! {
                    "index.ts".into() => Value::Map(btree! {
                        "handler".into() => Value::from("index.handler"),
                    }),
                }),
            }),
            "skill.json".into() => Value::Map(btree! {
                "manifest".into() => Value::Map(btree! {
                    "version".into() => Value::from(1),
                }),
            }),
        };
        assert_eq!(doc, expected);
    }

    #[test]
    fn empty_root_reads_as_empty_document() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/tree")).unwrap();

        assert!(TreeReader::new(fs).read(Path::new("/tree")).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let fs = MemoryFs::new();
        let err = TreeReader::new(fs).read(Path::new("/nope")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn undecodable_file_names_its_path() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/tree/dir")).unwrap();
        fs.write(Path::new("/tree/dir/bad.json"), "{oops").unwrap();

        let err = TreeReader::new(fs).read(Path::new("/tree")).unwrap_err();
        match err {
            TreeError::Decode { path, source } => {
                assert_eq!(path, Path::new("/tree/dir/bad.json"));
                assert_eq!(source.format(), "json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_extensions_decode_as_json() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/tree")).unwrap();
        fs.write(Path::new("/tree/.eslintrc"), "{\"root\": true}").unwrap();

        let doc = TreeReader::new(fs).read(Path::new("/tree")).unwrap();
        assert_eq!(
            doc[".eslintrc"],
            Value::Map(btree! { "root".into() => Value::from(true) })
        );
    }

    #[test]
    fn text_formats_decode_as_json() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/tree")).unwrap();
        fs.write(Path::new("/tree/f.txt"), "{\n  \"b\": 2\n}").unwrap();
        fs.write(Path::new("/tree/plain.xml"), "<schema/>").unwrap();

        let err = TreeReader::new(fs.clone()).read(Path::new("/tree")).unwrap_err();
        assert!(matches!(err, TreeError::Decode { ref path, .. } if path == Path::new("/tree/plain.xml")));

        fs.write(Path::new("/tree/plain.xml"), "{}").unwrap();
        let doc = TreeReader::new(fs).read(Path::new("/tree")).unwrap();
        assert_eq!(
            doc["f.txt"],
            Value::Map(btree! { "b".into() => Value::from(2) })
        );
    }
}
