use crate::dict::Dict;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Discriminant of a [`Value`], used in error reports and type queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Int,
    UInt,
    Float,
    Bool,
    String,
    Seq,
    Dict,
}

impl ValueKind {
    /// Whether values of this kind take part in numeric casts (bool included)
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ValueKind::Int | ValueKind::UInt | ValueKind::Float | ValueKind::Bool
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Seq => "sequence",
            ValueKind::Dict => "dict",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value: one keyword argument
///
/// A closed tagged union. Sequences and dicts own their children, so a
/// value graph is always a tree: there is no way to make a container refer
/// back to one of its ancestors.
///
/// Equality is per variant. `Int(1)`, `UInt(1)`, `Float(1.0)` and
/// `Bool(true)` are four different values. Floats compare by IEEE 754
/// rules, so a value holding `Float(NaN)` (or a dict containing one) is not
/// equal to itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Signed integer (widest native width)
    Int(i64),

    /// Unsigned integer (widest native width)
    UInt(u64),

    /// IEEE 754 double precision
    Float(f64),

    Bool(bool),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Seq(Vec<Value>),

    /// Nested keyword bundle
    Dict(Dict),
}

impl Default for Value {
    fn default() -> Self {
        Value::Int(0)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::Seq(_) => ValueKind::Seq,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_uint(&self) -> bool {
        matches!(self, Value::UInt(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Signed integer payload. Never coerces.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(Error::mismatch(ValueKind::Int, other.kind())),
        }
    }

    pub fn as_uint(&self) -> Result<u64> {
        match self {
            Value::UInt(v) => Ok(*v),
            other => Err(Error::mismatch(ValueKind::UInt, other.kind())),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(v) => Ok(*v),
            other => Err(Error::mismatch(ValueKind::Float, other.kind())),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(v) => Ok(*v),
            other => Err(Error::mismatch(ValueKind::Bool, other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(v) => Ok(v),
            other => Err(Error::mismatch(ValueKind::String, other.kind())),
        }
    }

    pub fn as_seq(&self) -> Result<&[Value]> {
        match self {
            Value::Seq(v) => Ok(v),
            other => Err(Error::mismatch(ValueKind::Seq, other.kind())),
        }
    }

    pub fn as_dict(&self) -> Result<&Dict> {
        match self {
            Value::Dict(v) => Ok(v),
            other => Err(Error::mismatch(ValueKind::Dict, other.kind())),
        }
    }
}

// Native integers widen to the signed or unsigned variant by signedness.
macro_rules! impl_from_native {
    ($variant:ident, $wide:ty: $($native:ty),+) => {
        $(
            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Value::$variant(v as $wide)
                }
            }
        )+
    };
}

impl_from_native!(Int, i64: i8, i16, i32, i64, isize);
impl_from_native!(UInt, u64: u8, u16, u32, u64, usize);
impl_from_native!(Float, f64: f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(v)
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Value::Dict(v)
    }
}
