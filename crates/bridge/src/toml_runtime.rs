//! `toml::Value` as a foreign runtime
//!
//! TOML integers are signed 64-bit, so an outbound `UInt` above `i64::MAX`
//! is refused. Datetimes have no counterpart and fail inbound.

use crate::runtime::{DictKey, ForeignRuntime};
use toml::Value as Toml;

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlRuntime;

impl ForeignRuntime for TomlRuntime {
    type Node = Toml;

    fn type_name(&self, node: &Toml) -> String {
        node.type_str().to_string()
    }

    fn is_bool(&self, node: &Toml) -> bool {
        node.is_bool()
    }

    fn is_int(&self, node: &Toml) -> bool {
        node.is_integer()
    }

    fn is_float(&self, node: &Toml) -> bool {
        node.is_float()
    }

    fn is_str(&self, node: &Toml) -> bool {
        node.is_str()
    }

    fn is_list(&self, node: &Toml) -> bool {
        node.is_array()
    }

    fn is_dict(&self, node: &Toml) -> bool {
        node.is_table()
    }

    fn extract_bool(&self, node: &Toml) -> Option<bool> {
        node.as_bool()
    }

    fn extract_int(&self, node: &Toml) -> Option<i64> {
        node.as_integer()
    }

    fn extract_float(&self, node: &Toml) -> Option<f64> {
        node.as_float()
    }

    fn extract_str(&self, node: &Toml) -> Option<String> {
        node.as_str().map(str::to_string)
    }

    fn list_items<'a>(&self, node: &'a Toml) -> Option<Vec<&'a Toml>> {
        node.as_array().map(|items| items.iter().collect())
    }

    fn dict_items<'a>(&self, node: &'a Toml) -> Option<Vec<(DictKey, &'a Toml)>> {
        node.as_table().map(|table| {
            table
                .iter()
                .map(|(k, v)| (DictKey::Str(k.clone()), v))
                .collect()
        })
    }

    fn make_int(&self, v: i64) -> Option<Toml> {
        Some(Toml::Integer(v))
    }

    fn make_uint(&self, v: u64) -> Option<Toml> {
        i64::try_from(v).ok().map(Toml::Integer)
    }

    fn make_float(&self, v: f64) -> Option<Toml> {
        Some(Toml::Float(v))
    }

    fn make_bool(&self, v: bool) -> Option<Toml> {
        Some(Toml::Boolean(v))
    }

    fn make_str(&self, v: &str) -> Option<Toml> {
        Some(Toml::String(v.to_string()))
    }

    fn make_list(&self, items: Vec<Toml>) -> Option<Toml> {
        Some(Toml::Array(items))
    }

    fn make_dict(&self, entries: Vec<(String, Toml)>) -> Option<Toml> {
        Some(Toml::Table(entries.into_iter().collect()))
    }
}
