use serde_json::Value;

use crate::find::{find_parsed, find_parsed_mut};
use crate::segment::DotPath;

/// Get a value from a JSON document by dot path.
///
/// Returns `None` if the path doesn't resolve or is malformed.
pub fn get<'a>(val: &'a Value, path: &str) -> Option<&'a Value> {
    let path = DotPath::parse(path).ok()?;
    find_parsed(val, path.segments())
}

/// Get a mutable reference to a value in a JSON document by dot path.
///
/// Returns `None` if the path doesn't resolve or is malformed.
pub fn get_mut<'a>(val: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let path = DotPath::parse(path).ok()?;
    find_parsed_mut(val, path.segments())
}
