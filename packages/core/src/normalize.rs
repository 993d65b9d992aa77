//! Canonicalization of documents.
//!
//! The canonical form is the shape the tree writer walks and the tree reader
//! produces:
//!
//! - a key ending in `/` is a directory and holds a canonical document,
//! - a key with a recognized extension is a file and holds its contents,
//! - any other key is a plain property name.
//!
//! Multi-segment keys (`a/b/file.json`) are split into nested directories,
//! and dotted keys (`hello.nested`) are expanded into nested documents.

use crate::error::NormalizeError;
use crate::merge::merge_entry;
use crate::segment::{parse_key, ParsedKey, PathSegment};
use crate::value::{Document, Value};

/// Canonicalize `doc`.
///
/// # Errors
///
/// Returns `NormalizeError::DirectoryRequiresEntries` if a key addressing a
/// directory does not map to a document, and `NormalizeError::EmptyPath` for
/// keys made only of separators. Either aborts the whole call.
///
/// # Example
///
/// ```rust
/// use collection_literals::btree;
/// use filetree_core::{normalize, Value};
///
/// let doc = btree! {
///     "directory/file.json".into() => Value::Map(btree! {
///         "hello.nested".into() => Value::from("world"),
///     }),
/// };
/// let canonical = normalize(&doc).unwrap();
///
/// assert_eq!(
///     Value::Map(canonical).get(&["directory/", "file.json", "hello", "nested"]),
///     Some(&Value::from("world"))
/// );
/// ```
pub fn normalize(doc: &Document) -> Result<Document, NormalizeError> {
    let mut result = Document::new();
    normalize_into(doc, &mut result)?;
    Ok(result)
}

/// Canonicalize `doc`, accumulating into `result`.
///
/// Keys that resolve to an existing map in `result` are deep-merged into it.
pub fn normalize_into(doc: &Document, result: &mut Document) -> Result<(), NormalizeError> {
    for (key, value) in doc {
        match parse_key(key) {
            ParsedKey::Path(segments) => {
                let Value::Map(entries) = value else {
                    return Err(NormalizeError::DirectoryRequiresEntries {
                        key: key.clone(),
                        found: value.kind(),
                    });
                };
                let Some((head, rest)) = segments.split_first() else {
                    return Err(NormalizeError::EmptyPath { key: key.clone() });
                };

                log::trace!("Key '{}' addresses {}", key, head.canonical_key());
                let subtree = nest(rest, entries)?;
                merge_entry(result, head.canonical_key(), Value::Map(subtree));
            }
            ParsedKey::Property(chain) => {
                log::trace!("Key '{}' is a property chain of {}", key, chain.names().len());
                chain.assign(result, value.clone());
            }
            ParsedKey::File { name, .. } => match value {
                Value::Map(contents) => {
                    merge_entry(result, name, Value::Map(normalize(contents)?));
                }
                other => {
                    result.insert(name, other.clone());
                }
            },
        }
    }

    Ok(())
}

/// Wrap `entries` in the directories named by `segments` and canonicalize.
///
/// `nest(["b/", "c.json"], v)` is the canonical form of `{"b/c.json/": v}`.
fn nest(segments: &[PathSegment], entries: &Document) -> Result<Document, NormalizeError> {
    let Some((head, rest)) = segments.split_first() else {
        return normalize(entries);
    };

    let mut subtree = Document::new();
    subtree.insert(head.canonical_key(), Value::Map(nest(rest, entries)?));
    Ok(subtree)
}
