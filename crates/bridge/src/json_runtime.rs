//! `serde_json::Value` as a foreign runtime
//!
//! JSON numbers carry their own integer/float distinction. Integers above
//! `i64::MAX` are valid JSON but have no signed counterpart and fail inbound,
//! so an outbound `UInt(u64::MAX)` does not come back. `null` has no
//! counterpart at all. Outbound non-finite floats fail because JSON cannot
//! spell them.

use crate::runtime::{DictKey, ForeignRuntime};
use serde_json::{Map, Number, Value as Json};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRuntime;

impl ForeignRuntime for JsonRuntime {
    type Node = Json;

    fn type_name(&self, node: &Json) -> String {
        match node {
            Json::Null => "null",
            Json::Bool(_) => "bool",
            Json::Number(n) if n.is_f64() => "float",
            Json::Number(_) => "integer",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
        .to_string()
    }

    fn is_bool(&self, node: &Json) -> bool {
        node.is_boolean()
    }

    fn is_int(&self, node: &Json) -> bool {
        matches!(node, Json::Number(n) if !n.is_f64())
    }

    fn is_float(&self, node: &Json) -> bool {
        matches!(node, Json::Number(n) if n.is_f64())
    }

    fn is_str(&self, node: &Json) -> bool {
        node.is_string()
    }

    fn is_list(&self, node: &Json) -> bool {
        node.is_array()
    }

    fn is_dict(&self, node: &Json) -> bool {
        node.is_object()
    }

    fn extract_bool(&self, node: &Json) -> Option<bool> {
        node.as_bool()
    }

    fn extract_int(&self, node: &Json) -> Option<i64> {
        node.as_i64()
    }

    fn extract_float(&self, node: &Json) -> Option<f64> {
        node.as_f64()
    }

    fn extract_str(&self, node: &Json) -> Option<String> {
        node.as_str().map(str::to_string)
    }

    fn list_items<'a>(&self, node: &'a Json) -> Option<Vec<&'a Json>> {
        node.as_array().map(|items| items.iter().collect())
    }

    fn dict_items<'a>(&self, node: &'a Json) -> Option<Vec<(DictKey, &'a Json)>> {
        node.as_object().map(|map| {
            map.iter()
                .map(|(k, v)| (DictKey::Str(k.clone()), v))
                .collect()
        })
    }

    fn make_int(&self, v: i64) -> Option<Json> {
        Some(Json::from(v))
    }

    fn make_uint(&self, v: u64) -> Option<Json> {
        Some(Json::from(v))
    }

    fn make_float(&self, v: f64) -> Option<Json> {
        Number::from_f64(v).map(Json::Number)
    }

    fn make_bool(&self, v: bool) -> Option<Json> {
        Some(Json::Bool(v))
    }

    fn make_str(&self, v: &str) -> Option<Json> {
        Some(Json::String(v.to_string()))
    }

    fn make_list(&self, items: Vec<Json>) -> Option<Json> {
        Some(Json::Array(items))
    }

    fn make_dict(&self, entries: Vec<(String, Json)>) -> Option<Json> {
        Some(Json::Object(entries.into_iter().collect::<Map<String, Json>>()))
    }
}
