//! Public surface of the crate.

pub use crate::accessors::{
    find_array, find_array_mut, find_object, find_object_mut, get_bool, get_int, get_long,
    get_string, get_value, has_value,
};
pub use crate::error::{DotPathError, Result};
pub use crate::find::{find, find_mut};
pub use crate::get::{get, get_mut};
pub use crate::mutate::{
    create_array, prepare_write, remove_field, remove_field_at, set_value,
};
pub use crate::segment::{classify, format_path, DotPath};
pub use crate::tokenize::tokenize;
pub use crate::types::{NodeKind, Segment, SegmentKind, WriteTarget};
pub use crate::util::{is_child, is_root, last_field, parent_path};
pub use crate::validate::{validate_path, ValidationError};
