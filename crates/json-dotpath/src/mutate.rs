//! Write walk: resolves the slot a path names, creating missing structure.

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::error::{DotPathError, Result};
use crate::find::find_parsed_mut;
use crate::segment::{format_path, DotPath};
use crate::types::{NodeKind, Segment, SegmentKind, WriteTarget};

/// Resolve the slot `path` writes into, creating missing objects and arrays
/// on the way. The empty path resolves to `None`.
///
/// Arrays shorter than a requested index are padded with empty objects up to
/// and including that index. The leaf itself is not created; assign through
/// the returned [`WriteTarget`].
///
/// # Errors
///
/// - [`DotPathError::UnexpectedType`] when a node on the path exists with a
///   kind the path cannot descend through (including a non-object root).
///   Structure created for earlier segments is kept.
/// - Syntax errors from [`DotPath::parse`].
///
/// # Example
///
/// ```
/// use json_dotpath::prepare_write;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let target = prepare_write(&mut doc, "a.arr[2].name").unwrap();
/// target.unwrap().assign(json!("x"));
/// assert_eq!(doc, json!({"a": {"arr": [{}, {}, {"name": "x"}]}}));
/// ```
pub fn prepare_write<'a>(root: &'a mut Value, path: &str) -> Result<Option<WriteTarget<'a>>> {
    let parsed = DotPath::parse(path)?;
    prepare_write_parsed(root, &parsed, path)
}

pub(crate) fn prepare_write_parsed<'a>(
    root: &'a mut Value,
    path: &DotPath,
    raw: &str,
) -> Result<Option<WriteTarget<'a>>> {
    let segments = path.segments();
    let mut current = root;

    for (i, seg) in segments.iter().enumerate() {
        let map = match current {
            Value::Object(map) => map,
            other => {
                return Err(DotPathError::UnexpectedType {
                    expected: NodeKind::Object,
                    found: NodeKind::of(other),
                    path: raw.to_string(),
                })
            }
        };

        match &seg.kind {
            SegmentKind::Primitive => {
                trace!("write target '{}' resolved to field '{}'", raw, seg.name);
                return Ok(Some(WriteTarget::Field {
                    parent: map,
                    name: seg.name.clone(),
                }));
            }
            SegmentKind::Object => {
                if !map.contains_key(&seg.name) {
                    debug!(
                        "creating object '{}' for '{}'",
                        format_path(&segments[..=i]),
                        raw
                    );
                }
                current = map
                    .entry(seg.name.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
            }
            SegmentKind::Array { field, index } => {
                let array = array_slot(map, field, *index, &segments[..=i], raw)?;
                if path.is_terminal(i) {
                    trace!("write target '{}' resolved to element {}", raw, index);
                    return Ok(Some(WriteTarget::Element {
                        array,
                        index: *index,
                    }));
                }
                current = &mut array[*index];
            }
        }
    }

    Ok(None)
}

/// Fetch or create the array under `field`, padded so `index` exists.
fn array_slot<'a>(
    map: &'a mut Map<String, Value>,
    field: &str,
    index: usize,
    prefix: &[Segment],
    raw: &str,
) -> Result<&'a mut Vec<Value>> {
    let slot = map.entry(field.to_string()).or_insert_with(|| {
        debug!("creating array '{}' for '{}'", field, raw);
        Value::Array(Vec::new())
    });
    let array = match slot {
        Value::Array(array) => array,
        other => {
            return Err(DotPathError::UnexpectedType {
                expected: NodeKind::Array,
                found: NodeKind::of(other),
                path: raw.to_string(),
            })
        }
    };
    if index >= array.len() {
        debug!(
            "padding '{}' from {} to {} elements",
            format_path(prefix),
            array.len(),
            index + 1
        );
        array.resize_with(index + 1, || Value::Object(Map::new()));
    }
    Ok(array)
}

/// Set the value at `path`, creating intermediate structure as needed.
///
/// Any existing child under the terminal name is replaced. Writing to the
/// empty path is a no-op.
///
/// # Example
///
/// ```
/// use json_dotpath::{set_value, get_string};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set_value(&mut doc, "parent.id", "42").unwrap();
/// set_value(&mut doc, "parent.flag", true).unwrap();
/// set_value(&mut doc, "parent.child", json!({"k": 1})).unwrap();
/// assert_eq!(get_string(&doc, "parent.id", "").unwrap(), "42");
/// ```
pub fn set_value<V: Into<Value>>(root: &mut Value, path: &str, value: V) -> Result<()> {
    if let Some(target) = prepare_write(root, path)? {
        target.assign(value.into());
    }
    Ok(())
}

/// Replace whatever is at `path` with a new empty array and return it.
///
/// # Errors
///
/// [`DotPathError::NotAnObject`] if `root` is not an object, or the empty
/// path was given; otherwise as [`prepare_write`].
pub fn create_array<'a>(root: &'a mut Value, path: &str) -> Result<&'a mut Vec<Value>> {
    if !root.is_object() {
        return Err(DotPathError::NotAnObject {
            path: path.to_string(),
        });
    }
    let target = prepare_write(root, path)?.ok_or_else(|| DotPathError::NotAnObject {
        path: path.to_string(),
    })?;
    target
        .assign(Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| DotPathError::NotAnObject {
            path: path.to_string(),
        })
}

/// Remove the field named by the last segment of `path` from the object its
/// parent path resolves to, returning the removed value.
///
/// A missing parent, a parent that is not an object, or a missing field is a
/// no-op. A bracketed last segment names no object field and removes nothing.
///
/// # Example
///
/// ```
/// use json_dotpath::remove_field;
/// use serde_json::json;
///
/// let mut doc = json!({"parent": {"id": "42"}});
/// assert_eq!(remove_field(&mut doc, "parent.id").unwrap(), Some(json!("42")));
/// assert_eq!(doc, json!({"parent": {}}));
/// ```
pub fn remove_field(root: &mut Value, path: &str) -> Result<Option<Value>> {
    let parsed = DotPath::parse(path)?;
    let Some((last, parent)) = parsed.segments().split_last() else {
        return Ok(None);
    };
    if last.is_array() {
        return Ok(None);
    }
    Ok(remove_from(root, parent, &last.name))
}

/// Remove `field` from the object at `parent_path`.
pub fn remove_field_at(root: &mut Value, parent_path: &str, field: &str) -> Result<Option<Value>> {
    let parent = DotPath::parse(parent_path)?;
    Ok(remove_from(root, parent.segments(), field))
}

fn remove_from(root: &mut Value, parent: &[Segment], field: &str) -> Option<Value> {
    let removed = match find_parsed_mut(root, parent) {
        Some(Value::Object(map)) => map.remove(field),
        _ => None,
    };
    if removed.is_some() {
        debug!("removed field '{}' from '{}'", field, format_path(parent));
    }
    removed
}
