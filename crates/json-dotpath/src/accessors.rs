//! Typed reads over [`find`](crate::find()).
//!
//! Every getter takes a caller default that is returned when the path does
//! not resolve or the resolved node is not a coercible primitive. Only a
//! malformed path is an error.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::find::{find, find_mut};

/// Check whether `path` resolves to any node, `null` included.
pub fn has_value(root: &Value, path: &str) -> Result<bool> {
    Ok(find(root, path)?.is_some())
}

/// String form of the primitive at `path`, if there is one.
pub fn get_value(root: &Value, path: &str) -> Result<Option<String>> {
    Ok(find(root, path)?.and_then(coerce_string))
}

/// # Example
///
/// ```
/// use json_dotpath::get_string;
/// use serde_json::json;
///
/// let doc = json!({"a": {"n": 7, "s": "x", "o": {}}});
/// assert_eq!(get_string(&doc, "a.s", "?").unwrap(), "x");
/// assert_eq!(get_string(&doc, "a.n", "?").unwrap(), "7");
/// assert_eq!(get_string(&doc, "a.o", "?").unwrap(), "?");
/// assert_eq!(get_string(&doc, "a.missing", "?").unwrap(), "?");
/// ```
pub fn get_string(root: &Value, path: &str, default: &str) -> Result<String> {
    Ok(get_value(root, path)?.unwrap_or_else(|| default.to_string()))
}

pub fn get_bool(root: &Value, path: &str, default: bool) -> Result<bool> {
    Ok(find(root, path)?.and_then(coerce_bool).unwrap_or(default))
}

pub fn get_int(root: &Value, path: &str, default: i32) -> Result<i32> {
    Ok(find(root, path)?
        .and_then(coerce_i64)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(default))
}

/// Full-width integer read; values outside `i64` yield `default`.
pub fn get_long(root: &Value, path: &str, default: i64) -> Result<i64> {
    Ok(find(root, path)?.and_then(coerce_i64).unwrap_or(default))
}

/// The object at `path`; `None` if missing or not an object.
pub fn find_object<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Map<String, Value>>> {
    Ok(find(root, path)?.and_then(Value::as_object))
}

/// The array at `path`; `None` if missing or not an array.
pub fn find_array<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Vec<Value>>> {
    Ok(find(root, path)?.and_then(Value::as_array))
}

pub fn find_object_mut<'a>(
    root: &'a mut Value,
    path: &str,
) -> Result<Option<&'a mut Map<String, Value>>> {
    Ok(find_mut(root, path)?.and_then(Value::as_object_mut))
}

pub fn find_array_mut<'a>(root: &'a mut Value, path: &str) -> Result<Option<&'a mut Vec<Value>>> {
    Ok(find_mut(root, path)?.and_then(Value::as_array_mut))
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "s": "text",
            "n": 42,
            "big": 9_000_000_000i64,
            "neg": -7,
            "f": 1.5,
            "t": true,
            "ts": "TRUE",
            "ns": " 12 ",
            "nil": null,
            "obj": {"k": "v"},
            "arr": [1, 2],
        })
    }

    #[test]
    fn test_get_string() {
        let d = doc();
        assert_eq!(get_string(&d, "s", "?").unwrap(), "text");
        assert_eq!(get_string(&d, "n", "?").unwrap(), "42");
        assert_eq!(get_string(&d, "f", "?").unwrap(), "1.5");
        assert_eq!(get_string(&d, "t", "?").unwrap(), "true");
        assert_eq!(get_string(&d, "nil", "?").unwrap(), "?");
        assert_eq!(get_string(&d, "obj", "?").unwrap(), "?");
        assert_eq!(get_string(&d, "arr", "?").unwrap(), "?");
        assert_eq!(get_string(&d, "obj.k", "?").unwrap(), "v");
    }

    #[test]
    fn test_get_value_without_default() {
        let d = doc();
        assert_eq!(get_value(&d, "s").unwrap(), Some("text".to_string()));
        assert_eq!(get_value(&d, "missing").unwrap(), None);
    }

    #[test]
    fn test_get_bool() {
        let d = doc();
        assert!(get_bool(&d, "t", false).unwrap());
        assert!(get_bool(&d, "ts", false).unwrap());
        assert!(get_bool(&d, "n", true).unwrap());
        assert!(!get_bool(&d, "s", false).unwrap());
        assert!(get_bool(&d, "missing", true).unwrap());
    }

    #[test]
    fn test_get_int() {
        let d = doc();
        assert_eq!(get_int(&d, "n", 0).unwrap(), 42);
        assert_eq!(get_int(&d, "neg", 0).unwrap(), -7);
        assert_eq!(get_int(&d, "ns", 0).unwrap(), 12);
        assert_eq!(get_int(&d, "big", -1).unwrap(), -1);
        assert_eq!(get_int(&d, "f", -1).unwrap(), -1);
        assert_eq!(get_int(&d, "s", -1).unwrap(), -1);
    }

    #[test]
    fn test_get_long_full_width() {
        let d = doc();
        assert_eq!(get_long(&d, "big", 0).unwrap(), 9_000_000_000);
        assert_eq!(get_long(&d, "n", 0).unwrap(), 42);
        assert_eq!(get_long(&d, "missing", 5).unwrap(), 5);
    }

    #[test]
    fn test_has_value() {
        let d = doc();
        assert!(has_value(&d, "nil").unwrap());
        assert!(has_value(&d, "arr[1]").unwrap());
        assert!(!has_value(&d, "arr[2]").unwrap());
        assert!(has_value(&d, "arr[x]").is_err());
    }

    #[test]
    fn test_find_object_and_array() {
        let d = doc();
        assert_eq!(find_object(&d, "obj").unwrap().map(|m| m.len()), Some(1));
        assert!(find_object(&d, "arr").unwrap().is_none());
        assert_eq!(find_array(&d, "arr").unwrap().map(|a| a.len()), Some(2));
        assert!(find_array(&d, "obj").unwrap().is_none());
        assert!(find_array(&d, "missing").unwrap().is_none());
    }

    #[test]
    fn test_mutable_views() {
        let mut d = doc();
        find_array_mut(&mut d, "arr").unwrap().unwrap().push(json!(3));
        find_object_mut(&mut d, "obj")
            .unwrap()
            .unwrap()
            .insert("k2".to_string(), json!(1));
        assert_eq!(d["arr"], json!([1, 2, 3]));
        assert_eq!(d["obj"], json!({"k": "v", "k2": 1}));
        assert!(find_array_mut(&mut d, "obj").unwrap().is_none());
    }

    #[test]
    fn test_malformed_path_is_error() {
        let d = doc();
        assert!(get_string(&d, "arr[-1]", "?").is_err());
        assert!(get_int(&d, "arr[1", 0).is_err());
    }
}
