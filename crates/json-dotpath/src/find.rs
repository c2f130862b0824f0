use serde_json::Value;

use crate::error::Result;
use crate::segment::DotPath;
use crate::types::{Segment, SegmentKind};

/// Find a value in a JSON document by dot path.
///
/// Returns `Ok(None)` when any step does not resolve: a missing key, an
/// intermediate node that is not an object, a field that is not an array, or
/// an index past the end. The empty path resolves to `root`.
///
/// # Errors
///
/// Malformed bracket syntax is reported even when the tree would not have
/// resolved the path anyway.
///
/// # Example
///
/// ```
/// use json_dotpath::find;
/// use serde_json::json;
///
/// let doc = json!({"a": {"arr": [{"name": "x"}]}});
/// assert_eq!(find(&doc, "a.arr[0].name").unwrap(), Some(&json!("x")));
/// assert_eq!(find(&doc, "a.arr[1].name").unwrap(), None);
/// assert!(find(&doc, "a.arr[x]").is_err());
/// ```
pub fn find<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let path = DotPath::parse(path)?;
    Ok(find_parsed(root, path.segments()))
}

/// Mutable counterpart of [`find`]. Never creates anything.
pub fn find_mut<'a>(root: &'a mut Value, path: &str) -> Result<Option<&'a mut Value>> {
    let path = DotPath::parse(path)?;
    Ok(find_parsed_mut(root, path.segments()))
}

pub(crate) fn find_parsed<'a>(root: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = root;
    for seg in segments {
        let Value::Object(map) = current else {
            return None;
        };
        current = match &seg.kind {
            SegmentKind::Object | SegmentKind::Primitive => map.get(&seg.name)?,
            SegmentKind::Array { field, index } => match map.get(field)? {
                Value::Array(arr) => arr.get(*index)?,
                _ => return None,
            },
        };
    }
    Some(current)
}

pub(crate) fn find_parsed_mut<'a>(
    root: &'a mut Value,
    segments: &[Segment],
) -> Option<&'a mut Value> {
    let mut current = root;
    for seg in segments {
        let Value::Object(map) = current else {
            return None;
        };
        current = match &seg.kind {
            SegmentKind::Object | SegmentKind::Primitive => map.get_mut(&seg.name)?,
            SegmentKind::Array { field, index } => match map.get_mut(field)? {
                Value::Array(arr) => arr.get_mut(*index)?,
                _ => return None,
            },
        };
    }
    Some(current)
}
