//! Recursive conversion between kwargs values and foreign nodes
//!
//! # Inbound (foreign to `Value`)
//!
//! Nodes are classified in a fixed order:
//!
//! 1. bool: `Value::Bool`
//! 2. int: `Value::Int` (fails if the integer does not fit in `i64`)
//! 3. float: `Value::Float`
//! 4. str: `Value::String`
//! 5. list: `Value::Seq`, elementwise
//! 6. dict with string keys: `Value::Dict`, per entry
//!
//! Bool comes first so that runtimes where booleans are integers never turn
//! `true` into `1`. Any other node type, any non-string dict key, and any
//! failing child fail the whole conversion; no partial value is returned.
//!
//! # Outbound (`Value` to foreign)
//!
//! Exhaustive on the variant. Containers are built only after every child
//! converted, so a failure never leaves a half-populated foreign container
//! behind.
//!
//! Both directions stop at `BridgeConfig::max_depth` levels of nesting.

use crate::config::BridgeConfig;
use crate::path::Path;
use crate::runtime::{DictKey, ForeignRuntime};
use kwargs_core::{Dict, Error, Result, Value};
use tracing::{debug, trace};

/// Convert a foreign node with the default configuration
pub fn inbound<R: ForeignRuntime>(runtime: &R, node: &R::Node) -> Result<Value> {
    inbound_with(runtime, node, &BridgeConfig::default())
}

pub fn inbound_with<R: ForeignRuntime>(
    runtime: &R,
    node: &R::Node,
    config: &BridgeConfig,
) -> Result<Value> {
    trace!(type_name = %runtime.type_name(node), "inbound conversion");
    Converter::new(runtime, config).load(node)
}

/// Convert a foreign mapping into a keyword bundle
///
/// The root must be a dict; anything else fails at `$`.
pub fn inbound_dict<R: ForeignRuntime>(
    runtime: &R,
    node: &R::Node,
    config: &BridgeConfig,
) -> Result<Dict> {
    let mut converter = Converter::new(runtime, config);
    if runtime.is_dict(node) {
        converter.load_dict(node)
    } else {
        let reason = format!("expected dict, found {}", runtime.type_name(node));
        Err(converter.fail(reason))
    }
}

/// Build a foreign node with the default configuration
pub fn outbound<R: ForeignRuntime>(runtime: &R, value: &Value) -> Result<R::Node> {
    outbound_with(runtime, value, &BridgeConfig::default())
}

pub fn outbound_with<R: ForeignRuntime>(
    runtime: &R,
    value: &Value,
    config: &BridgeConfig,
) -> Result<R::Node> {
    trace!(kind = %value.kind(), "outbound conversion");
    Converter::new(runtime, config).cast(value)
}

pub fn outbound_dict<R: ForeignRuntime>(
    runtime: &R,
    dict: &Dict,
    config: &BridgeConfig,
) -> Result<R::Node> {
    Converter::new(runtime, config).cast_dict(dict)
}

struct Converter<'a, R> {
    runtime: &'a R,
    config: &'a BridgeConfig,
    path: Path,
}

impl<'a, R: ForeignRuntime> Converter<'a, R> {
    fn new(runtime: &'a R, config: &'a BridgeConfig) -> Self {
        Self {
            runtime,
            config,
            path: Path::root(),
        }
    }

    fn fail(&self, reason: String) -> Error {
        let path = self.path.to_string();
        debug!(%path, %reason, "conversion failed");
        Error::conversion(path, reason)
    }

    fn check_depth(&self) -> Result<()> {
        if self.path.depth() > self.config.max_depth {
            return Err(self.fail(format!(
                "nesting deeper than {} levels",
                self.config.max_depth
            )));
        }
        Ok(())
    }

    fn load(&mut self, node: &R::Node) -> Result<Value> {
        self.check_depth()?;
        let rt = self.runtime;

        if rt.is_bool(node) {
            return match rt.extract_bool(node) {
                Some(b) => Ok(Value::Bool(b)),
                None => Err(self.fail("unreadable bool".to_string())),
            };
        }
        if rt.is_int(node) {
            return match rt.extract_int(node) {
                Some(n) => Ok(Value::Int(n)),
                None => Err(self.fail(format!(
                    "{} out of range for a signed 64-bit integer",
                    rt.type_name(node)
                ))),
            };
        }
        if rt.is_float(node) {
            return match rt.extract_float(node) {
                Some(f) => Ok(Value::Float(f)),
                None => Err(self.fail("unreadable float".to_string())),
            };
        }
        if rt.is_str(node) {
            return match rt.extract_str(node) {
                Some(s) => Ok(Value::String(s)),
                None => Err(self.fail("string is not valid UTF-8".to_string())),
            };
        }
        if rt.is_list(node) {
            return self.load_list(node).map(Value::Seq);
        }
        if rt.is_dict(node) {
            return self.load_dict(node).map(Value::Dict);
        }

        Err(self.fail(format!("unsupported type {}", rt.type_name(node))))
    }

    fn load_list(&mut self, node: &R::Node) -> Result<Vec<Value>> {
        let items = match self.runtime.list_items(node) {
            Some(items) => items,
            None => return Err(self.fail("unreadable list".to_string())),
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            self.path.push_index(i);
            let value = self.load(item)?;
            self.path.pop();
            out.push(value);
        }
        Ok(out)
    }

    fn load_dict(&mut self, node: &R::Node) -> Result<Dict> {
        let entries = match self.runtime.dict_items(node) {
            Some(entries) => entries,
            None => return Err(self.fail("unreadable dict".to_string())),
        };

        let mut out = Dict::with_capacity(entries.len());
        for (key, item) in entries {
            let key = match key {
                DictKey::Str(k) => k,
                DictKey::Other(type_name) => {
                    return Err(self.fail(format!("dict key must be str, found {}", type_name)));
                }
            };
            self.path.push_key(&key);
            let value = self.load(item)?;
            self.path.pop();
            out.set(key, value);
        }
        Ok(out)
    }

    fn cast(&mut self, value: &Value) -> Result<R::Node> {
        self.check_depth()?;
        let rt = self.runtime;

        let node = match value {
            Value::Int(v) => rt.make_int(*v),
            Value::UInt(v) => rt.make_uint(*v),
            Value::Float(v) => rt.make_float(*v),
            Value::Bool(v) => rt.make_bool(*v),
            Value::String(s) => rt.make_str(s),
            Value::Seq(items) => {
                let mut nodes = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    self.path.push_index(i);
                    nodes.push(self.cast(item)?);
                    self.path.pop();
                }
                rt.make_list(nodes)
            }
            Value::Dict(dict) => return self.cast_dict(dict),
        };

        node.ok_or_else(|| match value {
            Value::Seq(_) => self.fail("runtime cannot build list".to_string()),
            scalar => self.fail(format!(
                "runtime cannot represent {} {}",
                scalar.kind(),
                scalar
            )),
        })
    }

    fn cast_dict(&mut self, dict: &Dict) -> Result<R::Node> {
        let mut entries = Vec::with_capacity(dict.len());
        for (key, item) in dict.iter() {
            self.path.push_key(key);
            let node = self.cast(item)?;
            self.path.pop();
            entries.push((key.clone(), node));
        }
        self.runtime
            .make_dict(entries)
            .ok_or_else(|| self.fail("runtime cannot build dict".to_string()))
    }
}
