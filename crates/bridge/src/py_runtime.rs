//! A Python-like object graph as a foreign runtime
//!
//! Models the parts of Python's object model that matter to argument
//! marshalling:
//!
//! - `bool` is a subclass of `int`: `isinstance(True, int)` holds, and
//!   `int(True) == 1`. [`PyRuntime::is_int`] reports that faithfully.
//! - `int` is unbounded. Here it is 128-bit, wide enough to hold every
//!   `u64` while still overflowing the signed 64-bit inbound target.
//! - `None`, `bytes` and `tuple` exist but have no kwargs counterpart.
//! - dict keys are arbitrary objects.
//!
//! Equality on [`PyObject`] is structural and stricter than Python's `==`:
//! `Bool(true)` and `Int(1)` differ, and dicts compare as maps (entry order
//! is ignored).

use crate::runtime::{DictKey, ForeignRuntime};

#[derive(Debug, Clone)]
pub enum PyObject {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Tuple(Vec<PyObject>),
    List(Vec<PyObject>),
    Dict(Vec<(PyObject, PyObject)>),
}

impl PyObject {
    pub fn str(s: &str) -> Self {
        PyObject::Str(s.to_string())
    }

    /// Dict with string keys
    pub fn dict<const N: usize>(entries: [(&str, PyObject); N]) -> Self {
        PyObject::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (PyObject::str(k), v))
                .collect(),
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PyObject::None => "NoneType",
            PyObject::Bool(_) => "bool",
            PyObject::Int(_) => "int",
            PyObject::Float(_) => "float",
            PyObject::Str(_) => "str",
            PyObject::Bytes(_) => "bytes",
            PyObject::Tuple(_) => "tuple",
            PyObject::List(_) => "list",
            PyObject::Dict(_) => "dict",
        }
    }
}

impl PartialEq for PyObject {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PyObject::None, PyObject::None) => true,
            (PyObject::Bool(a), PyObject::Bool(b)) => a == b,
            (PyObject::Int(a), PyObject::Int(b)) => a == b,
            (PyObject::Float(a), PyObject::Float(b)) => a == b,
            (PyObject::Str(a), PyObject::Str(b)) => a == b,
            (PyObject::Bytes(a), PyObject::Bytes(b)) => a == b,
            (PyObject::Tuple(a), PyObject::Tuple(b)) => a == b,
            (PyObject::List(a), PyObject::List(b)) => a == b,
            (PyObject::Dict(a), PyObject::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter().any(|(k2, v2)| k == k2 && v == v2)
                    })
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PyRuntime;

impl ForeignRuntime for PyRuntime {
    type Node = PyObject;

    fn type_name(&self, node: &PyObject) -> String {
        node.type_name().to_string()
    }

    fn is_bool(&self, node: &PyObject) -> bool {
        matches!(node, PyObject::Bool(_))
    }

    // isinstance(x, int)
    fn is_int(&self, node: &PyObject) -> bool {
        matches!(node, PyObject::Int(_) | PyObject::Bool(_))
    }

    fn is_float(&self, node: &PyObject) -> bool {
        matches!(node, PyObject::Float(_))
    }

    fn is_str(&self, node: &PyObject) -> bool {
        matches!(node, PyObject::Str(_))
    }

    fn is_list(&self, node: &PyObject) -> bool {
        matches!(node, PyObject::List(_))
    }

    fn is_dict(&self, node: &PyObject) -> bool {
        matches!(node, PyObject::Dict(_))
    }

    fn extract_bool(&self, node: &PyObject) -> Option<bool> {
        match node {
            PyObject::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn extract_int(&self, node: &PyObject) -> Option<i64> {
        match node {
            PyObject::Int(n) => i64::try_from(*n).ok(),
            PyObject::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    fn extract_float(&self, node: &PyObject) -> Option<f64> {
        match node {
            PyObject::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn extract_str(&self, node: &PyObject) -> Option<String> {
        match node {
            PyObject::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn list_items<'a>(&self, node: &'a PyObject) -> Option<Vec<&'a PyObject>> {
        match node {
            PyObject::List(items) => Some(items.iter().collect()),
            _ => None,
        }
    }

    fn dict_items<'a>(&self, node: &'a PyObject) -> Option<Vec<(DictKey, &'a PyObject)>> {
        match node {
            PyObject::Dict(entries) => Some(
                entries
                    .iter()
                    .map(|(k, v)| {
                        let key = match k {
                            PyObject::Str(s) => DictKey::Str(s.clone()),
                            other => DictKey::Other(other.type_name().to_string()),
                        };
                        (key, v)
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    fn make_int(&self, v: i64) -> Option<PyObject> {
        Some(PyObject::Int(v as i128))
    }

    fn make_uint(&self, v: u64) -> Option<PyObject> {
        Some(PyObject::Int(v as i128))
    }

    fn make_float(&self, v: f64) -> Option<PyObject> {
        Some(PyObject::Float(v))
    }

    fn make_bool(&self, v: bool) -> Option<PyObject> {
        Some(PyObject::Bool(v))
    }

    fn make_str(&self, v: &str) -> Option<PyObject> {
        Some(PyObject::str(v))
    }

    fn make_list(&self, items: Vec<PyObject>) -> Option<PyObject> {
        Some(PyObject::List(items))
    }

    fn make_dict(&self, entries: Vec<(String, PyObject)>) -> Option<PyObject> {
        Some(PyObject::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (PyObject::Str(k), v))
                .collect(),
        ))
    }
}
