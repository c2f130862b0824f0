//! Splitting a path string into raw segments.

use crate::validate::{FIELD_SEPARATOR, INDEX_CLOSE, INDEX_OPEN};

/// Split `path` on `.`, keeping bracket groups intact.
///
/// A piece whose `[`/`]` count does not balance is buffered and re-joined
/// with the following pieces until the count returns to zero, so a dot inside
/// brackets never splits a segment. An empty path has no segments. A bracket
/// group still open at the end of the path is emitted as the last segment.
///
/// # Example
///
/// ```
/// use json_dotpath::tokenize;
///
/// assert_eq!(tokenize("a.b[2].c"), vec!["a", "b[2]", "c"]);
/// assert_eq!(tokenize("t1.t2[x.y=4]"), vec!["t1", "t2[x.y=4]"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut partial: Option<String> = None;
    let mut depth: isize = 0;

    for piece in path.split(FIELD_SEPARATOR) {
        depth += bracket_balance(piece);
        let segment = match partial.take() {
            Some(mut buf) => {
                buf.push(FIELD_SEPARATOR);
                buf.push_str(piece);
                buf
            }
            None => piece.to_string(),
        };
        if depth == 0 {
            segments.push(segment);
        } else {
            partial = Some(segment);
        }
    }

    if let Some(rest) = partial {
        segments.push(rest);
    }
    segments
}

/// Count of `[` minus count of `]`.
pub(crate) fn bracket_balance(text: &str) -> isize {
    text.chars().fold(0, |acc, c| match c {
        INDEX_OPEN => acc + 1,
        INDEX_CLOSE => acc - 1,
        _ => acc,
    })
}
