//! Boundary adapter for function-call marshalling
//!
//! Binding layers usually want a yes/no answer from argument conversion so
//! they can try the next overload or raise a type error of their own, rather
//! than unwinding out of the middle of a call. [`ValueCaster`] wraps the
//! converter in that shape: `load` returns `bool`, keeps the converted value
//! on success, and keeps the error (with its path) for reporting on failure.

use crate::config::BridgeConfig;
use crate::convert;
use crate::runtime::ForeignRuntime;
use kwargs_core::{Dict, Error, Value};
use tracing::warn;

pub struct ValueCaster<'r, R> {
    runtime: &'r R,
    config: BridgeConfig,
    value: Option<Value>,
    error: Option<Error>,
}

impl<'r, R: ForeignRuntime> ValueCaster<'r, R> {
    pub fn new(runtime: &'r R) -> Self {
        Self::with_config(runtime, BridgeConfig::default())
    }

    pub fn with_config(runtime: &'r R, config: BridgeConfig) -> Self {
        Self {
            runtime,
            config,
            value: None,
            error: None,
        }
    }

    /// Convert any supported node. Returns `false` on failure.
    pub fn load(&mut self, node: &R::Node) -> bool {
        let result = convert::inbound_with(self.runtime, node, &self.config);
        self.store(result)
    }

    /// Convert a keyword bundle; the node itself must be a dict
    pub fn load_dict(&mut self, node: &R::Node) -> bool {
        let result = convert::inbound_dict(self.runtime, node, &self.config).map(Value::Dict);
        self.store(result)
    }

    fn store(&mut self, result: kwargs_core::Result<Value>) -> bool {
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, "argument conversion failed");
                self.value = None;
                self.error = Some(e);
                false
            }
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// The loaded bundle, if the last load produced a dict
    pub fn into_dict(self) -> Option<Dict> {
        match self.value {
            Some(Value::Dict(dict)) => Some(dict),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Message a binding layer can raise after a failed load
    pub fn type_error(&self) -> Option<String> {
        self.error.as_ref().map(|e| match e {
            Error::ConversionFailure { path, reason } => {
                format!("TypeError: cannot convert argument at {}: {}", path, reason)
            }
            other => format!("TypeError: {}", other),
        })
    }

    /// Build the foreign counterpart of `value`, or `None` if any part of it
    /// cannot be represented
    pub fn cast(runtime: &R, value: &Value) -> Option<R::Node> {
        match convert::outbound(runtime, value) {
            Ok(node) => Some(node),
            Err(e) => {
                warn!(error = %e, "result conversion failed");
                None
            }
        }
    }
}
