//! Dotted/bracketed path access for `serde_json` trees.
//!
//! Paths look like `a.b.c` or `a.arr[2].name`: segments separated by `.`,
//! where a segment with a `[digits]` suffix steps into an array held under the
//! segment's base name. Reads never create anything and report a missing
//! path as `None`; writes create missing objects and arrays along the path,
//! padding short arrays with empty objects.
//!
//! # Example
//!
//! ```
//! use json_dotpath::{find_array, get_string, remove_field, set_value, find};
//! use serde_json::json;
//!
//! let mut doc = json!({});
//! set_value(&mut doc, "parent.id", "42").unwrap();
//! set_value(&mut doc, "items[0].name", "a").unwrap();
//! set_value(&mut doc, "items[2].name", "b").unwrap();
//!
//! assert_eq!(find_array(&doc, "items").unwrap().map(Vec::len), Some(3));
//! assert_eq!(get_string(&doc, "items[1].name", "?").unwrap(), "?");
//! assert_eq!(get_string(&doc, "items[2].name", "?").unwrap(), "b");
//!
//! remove_field(&mut doc, "parent.id").unwrap();
//! assert_eq!(find(&doc, "parent").unwrap(), Some(&json!({})));
//! assert_eq!(find(&doc, "parent.id").unwrap(), None);
//! ```

mod accessors;
mod error;
mod find;
mod get;
mod index;
mod mutate;
mod segment;
mod tokenize;
pub mod types;
mod util;
pub mod validate;

pub use index::*;
