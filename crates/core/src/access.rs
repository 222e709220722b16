//! Typed access to dict entries
//!
//! [`Dict::get_or_die`] produces a native value of the requested type from
//! whatever variant is stored, following these rules in order:
//!
//! 1. Exact variant match returns the payload.
//! 2. Numeric targets (every integer width, `f32`, `f64`, `bool`) accept any
//!    numeric or boolean variant and cast with `as` semantics: integer
//!    narrowing truncates, float to integer saturates (NaN becomes 0), a
//!    boolean source is 0 or 1, a boolean target is `value != 0`.
//! 3. A `Dict` target accepts only a dict variant.
//! 4. A `String` target accepts only a string variant. Numbers are never
//!    formatted and strings are never parsed.
//! 5. Anything else is a `VariantMismatch`.
//!
//! [`Dict::get`] runs the same lookup and returns the caller's default on any
//! failure. A missing key and a wrong type are indistinguishable through
//! `get`; use `get_or_die` when the difference matters.

use crate::dict::Dict;
use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};
use tracing::debug;

/// Types that can be produced from a stored [`Value`]
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

// Numeric targets share one cast table; `$kind` is the variant a native of
// that type would have been stored as.
macro_rules! impl_numeric_target {
    ($kind:ident: $($native:ty),+) => {
        $(
            impl FromValue for $native {
                fn from_value(value: &Value) -> Result<Self> {
                    match value {
                        Value::Int(v) => Ok(*v as $native),
                        Value::UInt(v) => Ok(*v as $native),
                        Value::Float(v) => Ok(*v as $native),
                        Value::Bool(v) => Ok(if *v { 1 as $native } else { 0 as $native }),
                        other => Err(Error::mismatch(ValueKind::$kind, other.kind())),
                    }
                }
            }
        )+
    };
}

impl_numeric_target!(Int: i8, i16, i32, i64, isize);
impl_numeric_target!(UInt: u8, u16, u32, u64, usize);
impl_numeric_target!(Float: f32, f64);

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(*v),
            Value::Int(v) => Ok(*v != 0),
            Value::UInt(v) => Ok(*v != 0),
            Value::Float(v) => Ok(*v != 0.0),
            other => Err(Error::mismatch(ValueKind::Bool, other.kind())),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_seq().map(<[Value]>::to_vec)
    }
}

impl FromValue for Dict {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_dict().cloned()
    }
}

/// Untyped read: always succeeds with a copy of the stored value
impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl Dict {
    /// Strict accessor: fails on a missing key or an incompatible variant
    pub fn get_or_die<T: FromValue>(&self, key: &str) -> Result<T> {
        let value = self.value(key).ok_or_else(|| Error::key_not_found(key))?;
        T::from_value(value)
    }

    /// Defaulting accessor: returns `default` on any failure
    pub fn get<T: FromValue>(&self, key: &str, default: T) -> T {
        match self.get_or_die(key) {
            Ok(v) => v,
            Err(e) => {
                debug!(key, error = %e, "falling back to default");
                default
            }
        }
    }
}
