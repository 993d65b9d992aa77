//! Key parsing.
//!
//! A document key does triple duty: `"a/b/file.json"` is a path through two
//! directories to a file, `"file.json"` is a file token and `"hello.nested"`
//! is a chain of properties. `parse_key` decides the role of a key once, so
//! the normalizer works on structured segments instead of key strings.

use crate::format::FileFormat;

/// The path separator for directory keys.
pub const SEPARATOR: char = '/';

/// The separator between property names in a chain.
pub const PROPERTY_SEPARATOR: char = '.';

/// One component of a key routed through the path separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A directory, rendered as `name/`.
    Directory(String),
    /// A file whose name carries a recognized extension.
    FileLeaf { name: String, format: FileFormat },
}

impl PathSegment {
    /// Classify a single path segment as a file leaf or a directory.
    fn from_path_component(component: &str) -> PathSegment {
        match FileFormat::of_name(component) {
            Some(format) => PathSegment::FileLeaf {
                name: component.to_string(),
                format,
            },
            None => PathSegment::Directory(component.to_string()),
        }
    }

    /// The key this segment occupies in a canonical document.
    pub fn canonical_key(&self) -> String {
        match self {
            PathSegment::Directory(name) => format!("{}{}", name, SEPARATOR),
            PathSegment::FileLeaf { name, .. } => name.clone(),
        }
    }
}

/// A non-empty chain of property names, e.g. `hello.nested`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyChain {
    names: Vec<String>,
}

impl PropertyChain {
    /// Split a key on `.` into property names.
    ///
    /// A key whose split would produce an empty name (`.env`, `a..b`, `a.`)
    /// is kept whole as a single literal name.
    pub fn parse(key: &str) -> PropertyChain {
        let names: Vec<String> = key
            .split(PROPERTY_SEPARATOR)
            .map(|name| name.to_string())
            .collect();

        if names.iter().any(|name| name.is_empty()) {
            return PropertyChain {
                names: vec![key.to_string()],
            };
        }

        PropertyChain { names }
    }

    /// The property names, outermost first. Never empty.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// The role of a whole document key.
///
/// A key without a separator never names a directory, so only `Path`
/// carries directory segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedKey {
    /// A key routed through the path separator. The key's value must be a
    /// document.
    ///
    /// Empty when the key consists only of separators.
    Path(Vec<PathSegment>),
    /// A single name with a recognized extension.
    File { name: String, format: FileFormat },
    /// Any other single name, split into nested properties.
    Property(PropertyChain),
}

/// Decide the role of a document key.
///
/// ```rust
/// use filetree_core::{parse_key, FileFormat, ParsedKey, PathSegment};
///
/// assert_eq!(
///     parse_key("a/file.json"),
///     ParsedKey::Path(vec![
///         PathSegment::Directory("a".to_string()),
///         PathSegment::FileLeaf { name: "file.json".to_string(), format: FileFormat::Json },
///     ])
/// );
/// ```
pub fn parse_key(key: &str) -> ParsedKey {
    let components: Vec<&str> = key.split(SEPARATOR).filter(|c| !c.is_empty()).collect();

    if components.len() > 1 || key.ends_with(SEPARATOR) {
        return ParsedKey::Path(
            components
                .into_iter()
                .map(PathSegment::from_path_component)
                .collect(),
        );
    }

    match FileFormat::of_name(key) {
        Some(format) => ParsedKey::File {
            name: key.to_string(),
            format,
        },
        None => ParsedKey::Property(PropertyChain::parse(key)),
    }
}

/// The directory name of a canonical directory marker (`"dir/"` -> `"dir"`).
pub fn directory_name(key: &str) -> Option<&str> {
    key.strip_suffix(SEPARATOR)
}
