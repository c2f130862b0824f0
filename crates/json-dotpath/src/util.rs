use crate::tokenize::tokenize;
use crate::validate::FIELD_SEPARATOR;

/// Everything before the last segment: `obj1.obj2.obj3` => `obj1.obj2`.
///
/// A single-segment path has the root (`""`) as its parent. Dots inside
/// brackets are not treated as separators.
///
/// # Example
///
/// ```
/// use json_dotpath::parent_path;
///
/// assert_eq!(parent_path("a.b.c"), "a.b");
/// assert_eq!(parent_path("a"), "");
/// assert_eq!(parent_path("t1.t2[x.y=4]"), "t1");
/// ```
pub fn parent_path(path: &str) -> String {
    let mut segments = tokenize(path);
    segments.pop();
    segments.join(FIELD_SEPARATOR.to_string().as_str())
}

/// The last segment: `obj1.obj2.obj3` => `obj3`.
pub fn last_field(path: &str) -> String {
    tokenize(path).pop().unwrap_or_default()
}

/// Check if a path addresses the root.
pub fn is_root(path: &str) -> bool {
    path.is_empty()
}

/// Check if `child` lies strictly below `parent`.
pub fn is_child(parent: &str, child: &str) -> bool {
    let parent = tokenize(parent);
    let child = tokenize(child);
    parent.len() < child.len() && child.starts_with(&parent)
}
