//! kwargs core: dynamically-typed keyword-argument bundles
//!
//! A `Dict` maps string keys to `Value`s, and a `Value` is one of a fixed set
//! of variants (signed and unsigned integers, double, bool, string, sequence,
//! nested dict). Bundles are built from native Rust types and read back with
//! typed accessors that coerce between the numeric variants.
//!
//! ```
//! use kwargs_core::{Dict, Value};
//!
//! let mut kwargs = Dict::new();
//! kwargs.set("flag", true);
//! kwargs.set("pi", 3.1415);
//! kwargs.set("nested", Dict::from([("key1", Value::from(42)), ("key2", Value::from("value"))]));
//!
//! assert_eq!(kwargs.get_or_die::<f64>("pi").unwrap(), 3.1415);
//! assert_eq!(kwargs.get_or_die::<i64>("flag").unwrap(), 1);
//! assert_eq!(kwargs.get::<i32>("missing", -1), -1);
//! assert_eq!(kwargs.merge(&Dict::new()), kwargs);
//! ```
//!
//! # Modules
//!
//! - `value`: the `Value` enum, construction from natives, `is_*` / `as_*`
//! - `dict`: the `Dict` map and its shallow `merge` / `with_prefix`
//! - `access`: `FromValue`, `get_or_die` and `get`
//! - `render`: JSON-like `Display` and configurable rendering
//! - `serialize`: bincode persistence
//! - `error`: the shared `Error` type

pub mod access;
pub mod dict;
pub mod error;
pub mod render;
pub mod serialize;
pub mod value;

pub use access::FromValue;
pub use dict::Dict;
pub use error::{Error, Result};
pub use render::{RenderConfig, render_dict, render_value};
pub use serialize::SerializeError;
pub use value::{Value, ValueKind};
