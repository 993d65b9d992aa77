//! Deep assignment into documents.

use crate::segment::PropertyChain;
use crate::value::{Document, Value};

/// Set `value` at `path` inside `tree`, creating intermediate maps as needed.
///
/// The value is stored as-is at the final key, replacing whatever was there.
/// An intermediate key holding something other than a map is replaced by an
/// empty map. An empty path leaves the tree unchanged.
pub fn set_path<K: AsRef<str>>(tree: &mut Document, path: &[K], value: Value) {
    match path {
        [] => {}
        [last] => {
            tree.insert(last.as_ref().to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = tree
                .entry(head.as_ref().to_string())
                .or_insert_with(Value::map);
            match entry {
                Value::Map(map) => set_path(map, rest, value),
                other => {
                    log::trace!(
                        "Replacing {} at '{}' with a map while setting a path",
                        other.kind(),
                        head.as_ref()
                    );
                    let mut map = Document::new();
                    set_path(&mut map, rest, value);
                    *other = Value::Map(map);
                }
            }
        }
    }
}

impl PropertyChain {
    /// Assign `value` at this chain inside `tree`.
    pub fn assign(&self, tree: &mut Document, value: Value) {
        set_path(tree, self.names(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn creates_intermediate_maps() {
        let mut tree = Document::new();
        set_path(&mut tree, &["a", "b", "c"], Value::from(1));

        let expected: Document = btree! {
            "a".into() => Value::Map(btree! {
                "b".into() => Value::Map(btree! {
                    "c".into() => Value::from(1),
                }),
            }),
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn keeps_existing_siblings() {
        let mut tree: Document = btree! {
            "a".into() => Value::Map(btree! {
                "x".into() => Value::from("keep"),
            }),
        };
        set_path(&mut tree, &["a", "y"], Value::from("new"));

        assert_eq!(
            Value::Map(tree.clone()).get(&["a", "x"]),
            Some(&Value::from("keep"))
        );
        assert_eq!(
            Value::Map(tree).get(&["a", "y"]),
            Some(&Value::from("new"))
        );
    }

    #[test]
    fn replaces_scalar_intermediates() {
        let mut tree: Document = btree! {
            "a".into() => Value::from("scalar"),
        };
        set_path(&mut tree, &["a", "b"], Value::from(true));

        assert_eq!(Value::Map(tree).get(&["a", "b"]), Some(&Value::from(true)));
    }

    #[test]
    fn replaces_array_intermediates_at_depth() {
        let mut tree: Document = btree! {
            "a".into() => Value::from(vec![1, 2]),
        };
        set_path(&mut tree, &["a", "b", "c"], Value::from("deep"));

        let expected: Document = btree! {
            "a".into() => Value::Map(btree! {
                "b".into() => Value::Map(btree! {
                    "c".into() => Value::from("deep"),
                }),
            }),
        };
        assert_eq!(tree, expected);
    }

    #[test]
    fn final_key_is_overwritten_not_merged() {
        let mut tree: Document = btree! {
            "a".into() => Value::Map(btree! {
                "old".into() => Value::from(1),
            }),
        };
        set_path(&mut tree, &["a"], Value::map());

        assert_eq!(tree.get("a"), Some(&Value::map()));
    }

    #[test]
    fn empty_path_is_a_no_op() {
        let mut tree = Document::new();
        set_path::<&str>(&mut tree, &[], Value::from(1));
        assert!(tree.is_empty());
    }

    #[test]
    fn chain_assignment() {
        let mut tree = Document::new();
        PropertyChain::parse("hello.nested").assign(&mut tree, Value::from("world"));

        assert_eq!(
            Value::Map(tree).get(&["hello", "nested"]),
            Some(&Value::from("world"))
        );
    }
}
