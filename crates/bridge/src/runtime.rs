//! The foreign-runtime seam
//!
//! A dynamic runtime (an interpreter's object model, a JSON tree, a TOML
//! document) is described to the converter through [`ForeignRuntime`]: type
//! predicates in the style of `isinstance`, extractors that read a scalar or
//! the children of a container, and constructors for the outbound direction.
//!
//! # Predicates may overlap
//!
//! Predicates answer "is this node an instance of X" and are allowed to
//! overlap the way they do in the runtime itself. In Python `bool` is a
//! subclass of `int`, so a faithful `is_int` says yes for `True`. The
//! converter asks `is_bool` before `is_int` for exactly this reason;
//! implementors should not try to hide the overlap.
//!
//! # Constructors may refuse
//!
//! Every constructor returns `Option`. A runtime that cannot represent a
//! value (TOML has no unsigned 64-bit integers, JSON has no NaN) returns
//! `None`, and the converter turns that into a conversion failure for the
//! whole graph.

/// Key of a foreign mapping entry, as seen by the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictKey {
    /// A string key
    Str(String),
    /// Any other key; carries the runtime's name for the key's type
    Other(String),
}

pub trait ForeignRuntime {
    /// Node of the foreign object graph
    type Node;

    /// Runtime's own name for the node's type, used in error messages
    fn type_name(&self, node: &Self::Node) -> String;

    fn is_bool(&self, node: &Self::Node) -> bool;
    fn is_int(&self, node: &Self::Node) -> bool;
    fn is_float(&self, node: &Self::Node) -> bool;
    fn is_str(&self, node: &Self::Node) -> bool;
    fn is_list(&self, node: &Self::Node) -> bool;
    fn is_dict(&self, node: &Self::Node) -> bool;

    fn extract_bool(&self, node: &Self::Node) -> Option<bool>;

    /// `None` when the node is an integer outside the `i64` range
    fn extract_int(&self, node: &Self::Node) -> Option<i64>;

    fn extract_float(&self, node: &Self::Node) -> Option<f64>;
    fn extract_str(&self, node: &Self::Node) -> Option<String>;

    fn list_items<'a>(&self, node: &'a Self::Node) -> Option<Vec<&'a Self::Node>>;
    fn dict_items<'a>(&self, node: &'a Self::Node) -> Option<Vec<(DictKey, &'a Self::Node)>>;

    fn make_int(&self, v: i64) -> Option<Self::Node>;
    fn make_uint(&self, v: u64) -> Option<Self::Node>;
    fn make_float(&self, v: f64) -> Option<Self::Node>;
    fn make_bool(&self, v: bool) -> Option<Self::Node>;
    fn make_str(&self, v: &str) -> Option<Self::Node>;
    fn make_list(&self, items: Vec<Self::Node>) -> Option<Self::Node>;
    fn make_dict(&self, entries: Vec<(String, Self::Node)>) -> Option<Self::Node>;
}
