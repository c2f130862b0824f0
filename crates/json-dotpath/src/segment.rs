//! Segment classification and parsed paths.

use crate::error::{DotPathError, Result};
use crate::tokenize::tokenize;
use crate::types::{Segment, SegmentKind};
use crate::validate::{FIELD_SEPARATOR, INDEX_CLOSE, INDEX_OPEN};

/// Classify one raw segment.
///
/// A segment containing `[` is an array step; otherwise it is the terminal
/// primitive step when `is_last`, else an object step.
///
/// # Errors
///
/// Array segments must read `name[digits]` with a bracket-free `name`; a
/// stray `]` or anything else around the brackets is rejected. Errors name
/// `raw` as both segment and path; [`DotPath::parse`] reports the full path.
pub fn classify(raw: &str, is_last: bool) -> Result<Segment> {
    classify_in(raw, is_last, raw)
}

fn classify_in(raw: &str, is_last: bool, path: &str) -> Result<Segment> {
    let kind = if raw.contains(INDEX_OPEN) {
        let (field, index) = parse_array_segment(raw, path)?;
        SegmentKind::Array { field, index }
    } else if raw.contains(INDEX_CLOSE) {
        return Err(DotPathError::InvalidArrayFormat {
            segment: raw.to_string(),
            path: path.to_string(),
        });
    } else if is_last {
        SegmentKind::Primitive
    } else {
        SegmentKind::Object
    };
    Ok(Segment {
        name: raw.to_string(),
        kind,
    })
}

fn parse_array_segment(raw: &str, path: &str) -> Result<(String, usize)> {
    let invalid_format = || DotPathError::InvalidArrayFormat {
        segment: raw.to_string(),
        path: path.to_string(),
    };
    let invalid_index = || DotPathError::InvalidIndex {
        segment: raw.to_string(),
        path: path.to_string(),
    };
    let start = raw.rfind(INDEX_OPEN).ok_or_else(invalid_format)?;
    let end = raw.rfind(INDEX_CLOSE).ok_or_else(invalid_format)?;
    if end < start || end != raw.len() - 1 {
        return Err(invalid_format());
    }
    let field = &raw[..start];
    if field.contains(INDEX_OPEN) || field.contains(INDEX_CLOSE) {
        return Err(invalid_format());
    }

    let digits = &raw[start + 1..end];
    if let Some(rest) = digits.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DotPathError::NegativeIndex {
                segment: raw.to_string(),
                path: path.to_string(),
            });
        }
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_index());
    }
    let index = digits.parse().map_err(|_| invalid_index())?;
    Ok((field.to_string(), index))
}

/// A path split into classified segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DotPath {
    segments: Vec<Segment>,
}

impl DotPath {
    /// Tokenize and classify `path`. The empty path addresses the root.
    ///
    /// # Example
    ///
    /// ```
    /// use json_dotpath::{DotPath, SegmentKind};
    ///
    /// let path = DotPath::parse("a.items[2].name").unwrap();
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.segments()[0].kind, SegmentKind::Object);
    /// assert_eq!(
    ///     path.segments()[1].kind,
    ///     SegmentKind::Array { field: "items".to_string(), index: 2 }
    /// );
    /// assert_eq!(path.segments()[2].kind, SegmentKind::Primitive);
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let raw = tokenize(path);
        let last = raw.len().saturating_sub(1);
        let segments = raw
            .iter()
            .enumerate()
            .map(|(i, seg)| classify_in(seg, i == last, path))
            .collect::<Result<Vec<_>>>()?;
        Ok(DotPath { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        index + 1 == self.segments.len()
    }
}

/// Render segments back to path text.
pub fn format_path(segments: &[Segment]) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(&seg.name);
    }
    out
}
