//! Recognized file formats.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXTENSION: Regex = Regex::new(r"\.([^.]+)$").unwrap();
}

/// A file extension recognized as a file token.
///
/// This set is closed. A name whose extension is not listed here is never a
/// file token during normalization, although codecs may still be registered
/// for other extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Json,
    Yaml,
    Txt,
    Xml,
    Js,
    Ts,
}

impl FileFormat {
    /// All recognized formats.
    pub const ALL: [FileFormat; 6] = [
        FileFormat::Json,
        FileFormat::Yaml,
        FileFormat::Txt,
        FileFormat::Xml,
        FileFormat::Js,
        FileFormat::Ts,
    ];

    /// The extension token, without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Txt => "txt",
            FileFormat::Xml => "xml",
            FileFormat::Js => "js",
            FileFormat::Ts => "ts",
        }
    }

    /// Look up a format by its extension token. Matching is case-sensitive.
    pub fn from_extension(token: &str) -> Option<FileFormat> {
        Self::ALL.into_iter().find(|f| f.extension() == token)
    }

    /// The recognized format of a file name, if any.
    ///
    /// ```rust
    /// use filetree_core::FileFormat;
    ///
    /// assert_eq!(FileFormat::of_name("skill.json"), Some(FileFormat::Json));
    /// assert_eq!(FileFormat::of_name("hello.nested"), None);
    /// assert_eq!(FileFormat::of_name("README"), None);
    /// ```
    pub fn of_name(name: &str) -> Option<FileFormat> {
        extension_of(name).and_then(Self::from_extension)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// The raw extension token of a name: the text after the last `.`.
///
/// Returns `None` when the name has no dot or ends with one. The token is
/// not checked against the recognized formats.
pub fn extension_of(name: &str) -> Option<&str> {
    EXTENSION
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
