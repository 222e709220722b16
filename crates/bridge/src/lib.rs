//! kwargs bridge: moving keyword bundles across a runtime boundary
//!
//! Converts `kwargs_core::Value` trees to and from the object graph of a
//! foreign dynamic runtime, recursively and all-or-nothing. The runtime is
//! described by the [`ForeignRuntime`] trait; implementations are provided
//! for `serde_json::Value`, `toml::Value`, and a Python-like object model.
//!
//! ```rust
//! use kwargs_bridge::{JsonRuntime, inbound, outbound};
//! use serde_json::json;
//!
//! let node = json!({"flag": true, "nested": {"key1": 42, "key2": "value"}});
//! let value = inbound(&JsonRuntime, &node).unwrap();
//! assert_eq!(value.as_dict().unwrap().get_or_die::<bool>("flag").unwrap(), true);
//! assert_eq!(outbound(&JsonRuntime, &value).unwrap(), node);
//! ```
//!
//! Failures carry the path of the offending node:
//!
//! ```rust
//! use kwargs_bridge::{JsonRuntime, inbound};
//! use serde_json::json;
//!
//! let err = inbound(&JsonRuntime, &json!({"a": [1, null]})).unwrap_err();
//! assert_eq!(err.path(), Some("$.a[1]"));
//! ```

pub mod caster;
pub mod config;
pub mod convert;
pub mod json_runtime;
pub mod path;
pub mod py_runtime;
pub mod runtime;
pub mod toml_runtime;

pub use caster::ValueCaster;
pub use config::{BridgeConfig, DEFAULT_MAX_DEPTH};
pub use convert::{inbound, inbound_dict, inbound_with, outbound, outbound_dict, outbound_with};
pub use json_runtime::JsonRuntime;
pub use path::Path;
pub use py_runtime::{PyObject, PyRuntime};
pub use runtime::{DictKey, ForeignRuntime};
pub use toml_runtime::TomlRuntime;
