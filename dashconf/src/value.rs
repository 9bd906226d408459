//! Helpers over configuration values.
//!
//! Configuration values are plain YAML values. These helpers cover the few
//! conversions the accessors need.

pub use serde_yaml::{Mapping, Value};

/// Renders a scalar value as a string.
///
/// Strings are returned as-is; numbers and booleans use their YAML spelling.
/// Null, sequences, mappings and tagged values yield `None`.
///
/// # Examples
///
/// ```
/// use dashconf::value::{scalar_to_string, Value};
///
/// assert_eq!(scalar_to_string(&Value::from("dark")), Some("dark".to_string()));
/// assert_eq!(scalar_to_string(&Value::from(6)), Some("6".to_string()));
/// assert_eq!(scalar_to_string(&Value::Null), None);
/// ```
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Returns an empty YAML sequence.
#[must_use]
pub fn empty_sequence() -> Value {
    Value::Sequence(Vec::new())
}

/// Short lowercase name of a value's type, for diagnostics.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Converts a YAML value into JSON for output.
///
/// Mapping keys that are not strings are rendered with their scalar spelling;
/// tagged values lose their tag. `serde_json::to_value` would instead fail on
/// null or structured keys and keep tags as `{"!tag": value}` wrappers, so the
/// value is walked by hand.
#[must_use]
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_json::Value::from(i)
            } else if let Some(u) = n.as_u64() {
                serde_json::Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
        }
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Mapping(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let key = scalar_to_string(k).unwrap_or_else(|| type_name(k).to_string());
                    (key, to_json(v))
                })
                .collect(),
        ),
        Value::Tagged(tagged) => to_json(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&Value::from(true)).as_deref(), Some("true"));
        assert_eq!(scalar_to_string(&Value::from(1.5)).as_deref(), Some("1.5"));
        assert_eq!(scalar_to_string(&empty_sequence()), None);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&Value::Null), "null");
        assert_eq!(type_name(&Value::from("x")), "string");
        assert_eq!(type_name(&empty_sequence()), "sequence");
        assert_eq!(type_name(&Value::Mapping(Mapping::new())), "mapping");
    }

    #[test]
    fn test_to_json_nested() {
        let value: Value = serde_yaml::from_str(
            "pinned_apps:\n  - sys/*\n  - usr/alice/app\nmenu: 6\nlogo: ~\n",
        )
        .unwrap();
        let json = to_json(&value);
        assert_eq!(
            json,
            serde_json::json!({
                "pinned_apps": ["sys/*", "usr/alice/app"],
                "menu": 6,
                "logo": null,
            })
        );
    }

    #[test]
    fn test_to_json_keys_and_tags() {
        let value: Value =
            serde_yaml::from_str("1: one\ntrue: yes\n~: nothing\nicon: !fa cog\n").unwrap();
        assert_eq!(
            to_json(&value),
            serde_json::json!({
                "1": "one",
                "true": "yes",
                "null": "nothing",
                "icon": "cog",
            })
        );
    }
}
