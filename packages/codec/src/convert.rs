//! Conversions between Value and serde_json::Value.
//!
//! Both structured codecs go through `serde_json::Value`: YAML is parsed into
//! it and rendered from it as well.

use filetree_core::Value;

/// Convert our Value to serde_json::Value.
///
/// JSON has no representation for non-finite floats; they become `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert serde_json::Value to our Value.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        // Integers above i64::MAX arrive as u64 and become floats.
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;

    #[test]
    fn json_to_value_numbers() {
        let json = serde_json::json!({
            "integer": 42,
            "float": 2.75,
            "negative": -100
        });

        let value = json_to_value(json);
        assert_eq!(value.get(&["integer"]), Some(&Value::Integer(42)));
        assert_eq!(value.get(&["negative"]), Some(&Value::Integer(-100)));
        match value.get(&["float"]) {
            Some(Value::Float(f)) => assert!((f - 2.75).abs() < 0.001),
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn large_unsigned_becomes_float() {
        let value = json_to_value(serde_json::json!(u64::MAX));
        assert_eq!(value, Value::Float(u64::MAX as f64));
    }

    #[test]
    fn value_to_json_nested() {
        let value = Value::Map(btree! {
            "dir/".into() => Value::Map(btree! {
                "keywords".into() => Value::from(vec!["hello", "world"]),
                "enabled".into() => Value::from(false),
                "missing".into() => Value::Null,
            }),
        });

        assert_eq!(
            value_to_json(&value),
            serde_json::json!({
                "dir/": {
                    "keywords": ["hello", "world"],
                    "enabled": false,
                    "missing": null
                }
            })
        );
    }

    #[test]
    fn value_to_json_nan_becomes_null() {
        assert_eq!(value_to_json(&Value::Float(f64::NAN)), serde_json::Value::Null);
    }

    #[test]
    fn json_roundtrip() {
        let value = Value::Map(btree! {
            "name".into() => Value::from("Alice"),
            "age".into() => Value::from(30),
            "score".into() => Value::from(9.5),
        });

        assert_eq!(json_to_value(value_to_json(&value)), value);
    }
}
