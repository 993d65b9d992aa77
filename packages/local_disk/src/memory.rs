//! In-memory filesystem.
//!
//! Holds directories and text files in a sorted map keyed by path. Used for
//! dry runs and for tests that don't need a real disk.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::Filesystem;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(String),
}

/// A `Filesystem` backed by a `BTreeMap`.
///
/// Directories must exist before files are written into them, as on disk.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use filetree_local::{Filesystem, MemoryFs};
///
/// let mut fs = MemoryFs::new();
/// fs.create_dir_all(Path::new("out/config")).unwrap();
/// fs.write(Path::new("out/config/a.json"), "{}").unwrap();
///
/// assert_eq!(fs.list_dir(Path::new("out")).unwrap(), ["config"]);
/// assert_eq!(fs.file(Path::new("out/config/a.json")), Some("{}"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the file at `path`, if there is one.
    pub fn file(&self, path: &Path) -> Option<&str> {
        match self.nodes.get(path) {
            Some(Node::File(contents)) => Some(contents),
            _ => None,
        }
    }

    /// Every file with its contents, in path order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.nodes.iter().filter_map(|(path, node)| match node {
            Node::File(contents) => Some((path.as_path(), contents.as_str())),
            Node::Dir => None,
        })
    }

    /// Every directory, in path order.
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.nodes
            .iter()
            .filter(|(_, node)| matches!(node, Node::Dir))
            .map(|(path, _)| path.as_path())
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => matches!(self.nodes.get(parent), Some(Node::Dir)),
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        match self.nodes.get(path) {
            Some(node) => Ok(matches!(node, Node::Dir)),
            None => Err(not_found(path)),
        }
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        match self.nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => {
                return Err(io::Error::other(format!(
                    "{} is not a directory",
                    path.display()
                )))
            }
            None => return Err(not_found(path)),
        }

        let mut names: Vec<String> = self
            .nodes
            .keys()
            .filter(|child| child.parent() == Some(path))
            .filter_map(|child| child.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.get(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Dir) => Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            ))),
            None => Err(not_found(path)),
        }
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        let mut missing = Vec::new();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            match self.nodes.get(ancestor) {
                Some(Node::Dir) => break,
                Some(Node::File(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} exists and is a file", ancestor.display()),
                    ))
                }
                None => missing.push(ancestor.to_path_buf()),
            }
        }

        for dir in missing {
            log::trace!("Creating {} in memory", dir.display());
            self.nodes.insert(dir, Node::Dir);
        }
        Ok(())
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if !self.parent_exists(path) {
            return Err(not_found(path));
        }
        if let Some(Node::Dir) = self.nodes.get(path) {
            return Err(io::Error::other(format!("{} is a directory", path.display())));
        }

        self.nodes
            .insert(path.to_path_buf(), Node::File(contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_adds_ancestors() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("/out/a/b")).unwrap();

        let dirs: Vec<&Path> = fs.dirs().collect();
        assert_eq!(
            dirs,
            [
                Path::new("/"),
                Path::new("/out"),
                Path::new("/out/a"),
                Path::new("/out/a/b")
            ]
        );
        fs.create_dir_all(Path::new("/out/a/b")).unwrap();
        assert_eq!(fs.dirs().count(), 4);
    }

    #[test]
    fn write_requires_parent() {
        let mut fs = MemoryFs::new();
        let err = fs.write(Path::new("out/f.json"), "{}").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write(Path::new("out/f.json"), "{}").unwrap();
        assert!(fs.exists(Path::new("out/f.json")));
    }

    #[test]
    fn relative_file_at_top_level() {
        let mut fs = MemoryFs::new();
        fs.write(Path::new("f.txt"), "hi").unwrap();
        assert_eq!(fs.read_to_string(Path::new("f.txt")).unwrap(), "hi");
    }

    #[test]
    fn list_dir_returns_direct_children_sorted() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("root/sub/deeper")).unwrap();
        fs.write(Path::new("root/b.json"), "{}").unwrap();
        fs.write(Path::new("root/a.yaml"), "").unwrap();
        fs.write(Path::new("root/sub/c.txt"), "").unwrap();

        assert_eq!(
            fs.list_dir(Path::new("root")).unwrap(),
            ["a.yaml", "b.json", "sub"]
        );
        assert_eq!(
            fs.list_dir(Path::new("root/sub")).unwrap(),
            ["c.txt", "deeper"]
        );
        assert!(fs.list_dir(Path::new("root/sub/deeper")).unwrap().is_empty());
    }

    #[test]
    fn list_dir_errors() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("root")).unwrap();
        fs.write(Path::new("root/f.json"), "{}").unwrap();

        let missing = fs.list_dir(Path::new("nope")).unwrap_err();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
        assert!(fs.list_dir(Path::new("root/f.json")).is_err());
    }

    #[test]
    fn files_and_dirs_do_not_overlap() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("root")).unwrap();
        fs.write(Path::new("root/f.json"), "{}").unwrap();

        assert!(fs.create_dir_all(Path::new("root/f.json/inner")).is_err());
        assert!(fs.write(Path::new("root"), "text").is_err());
        assert!(fs.read_to_string(Path::new("root")).is_err());
        assert!(!fs.is_dir(Path::new("root/f.json")).unwrap());
    }

    #[test]
    fn files_lists_contents_in_path_order() {
        let mut fs = MemoryFs::new();
        fs.create_dir_all(Path::new("r/d")).unwrap();
        fs.write(Path::new("r/z.txt"), "z").unwrap();
        fs.write(Path::new("r/d/a.txt"), "a").unwrap();

        let files: Vec<(&Path, &str)> = fs.files().collect();
        assert_eq!(
            files,
            [(Path::new("r/d/a.txt"), "a"), (Path::new("r/z.txt"), "z")]
        );
        assert_eq!(fs.file(Path::new("r/d")), None);
    }
}
