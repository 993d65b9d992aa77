//! Filesystem primitives used by the tree writer and reader.

use std::fs;
use std::io;
use std::path::Path;

/// The handful of blocking filesystem operations a tree build or read needs.
///
/// Paths are native paths. Errors are plain `io::Error`s and are surfaced to
/// callers unchanged.
pub trait Filesystem {
    /// Check if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Names of the entries directly inside `path`, sorted.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;

    /// Create or truncate the file at `path` with `contents`.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<T: Filesystem + ?Sized> Filesystem for &mut T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        (**self).is_dir(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        (**self).list_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        LocalFs
    }
}

impl Filesystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::metadata(path)?.is_dir())
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        // walkdir reports a missing root on the first entry; stat first so a
        // missing or non-directory root fails like read_dir would.
        if !fs::metadata(path)?.is_dir() {
            return Err(io::Error::other(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut names = Vec::new();
        for entry in walkdir::WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
