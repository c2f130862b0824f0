//! Type definitions for dot paths.

use std::fmt;

use serde_json::{Map, Value};

/// Shape of a tree node as seen by a path walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    /// Any scalar: string, number, boolean or null.
    Primitive,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                NodeKind::Primitive
            }
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::Primitive => "primitive",
        };
        f.write_str(name)
    }
}

/// How a segment is stepped through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Descend into the mapping under the segment name.
    Object,
    /// Descend into element `index` of the array stored under `field`.
    Array { field: String, index: usize },
    /// Terminal leaf field.
    Primitive,
}

/// One `.`-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Raw segment text, including any bracket suffix.
    pub name: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn is_array(&self) -> bool {
        matches!(self.kind, SegmentKind::Array { .. })
    }

    /// Key under which this segment lives in its parent object.
    pub fn field(&self) -> &str {
        match &self.kind {
            SegmentKind::Array { field, .. } => field,
            SegmentKind::Object | SegmentKind::Primitive => &self.name,
        }
    }
}

/// Location a write resolves to. The caller assigns the value; the leaf
/// itself is never created by the walk.
#[derive(Debug)]
pub enum WriteTarget<'a> {
    /// Key `name` inside `parent`.
    Field {
        parent: &'a mut Map<String, Value>,
        name: String,
    },
    /// Slot `index` of `array`. The slot always exists.
    Element {
        array: &'a mut Vec<Value>,
        index: usize,
    },
}

impl<'a> WriteTarget<'a> {
    /// Store `value`, replacing whatever was there, and return it in place.
    pub fn assign(self, value: Value) -> &'a mut Value {
        match self {
            WriteTarget::Field { parent, name } => {
                let slot = parent.entry(name).or_insert(Value::Null);
                *slot = value;
                slot
            }
            WriteTarget::Element { array, index } => {
                let slot = &mut array[index];
                *slot = value;
                slot
            }
        }
    }
}
