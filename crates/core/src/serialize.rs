//! Binary persistence of values and dicts
//!
//! `Value` and `Dict` derive serde's traits, so any serde format can carry
//! them. This module adds the compact bincode encoding used for snapshots
//! and process-to-process exchange of keyword bundles.
//!
//! The encoding is not canonical: dict entries are written in the map's
//! iteration order, so two equal dicts may encode to different bytes. Decode
//! and compare values, never bytes.
//!
//! # Nesting limit
//!
//! serde decodes nested containers recursively, so bytes from another
//! process could exhaust the stack. Before decoding, the input is walked
//! once without recursion and rejected with `InvalidData` if any node sits
//! deeper than [`MAX_DECODE_DEPTH`]. Structural damage (truncation, unknown
//! tags) is left for bincode to report.

use crate::dict::Dict;
use crate::value::Value;

/// Deepest node accepted by `from_bytes`; the root is depth 0
pub const MAX_DECODE_DEPTH: usize = 128;

/// Error during serialization/deserialization
#[derive(Debug)]
pub enum SerializeError {
    /// Bincode encoding/decoding error (preserves original error for debugging)
    BincodeError(Box<bincode::Error>),
    /// Invalid data structure
    InvalidData(String),
}

impl std::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializeError::BincodeError(e) => write!(f, "Bincode error: {}", e),
            SerializeError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::BincodeError(e) => Some(e.as_ref()),
            SerializeError::InvalidData(_) => None,
        }
    }
}

impl From<bincode::Error> for SerializeError {
    fn from(e: bincode::Error) -> Self {
        SerializeError::BincodeError(Box::new(e))
    }
}

impl Value {
    /// Serialize to binary format (bincode)
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        bincode::serialize(self).map_err(SerializeError::from)
    }

    /// Deserialize from binary format (bincode)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializeError> {
        check_nesting(bytes, false)?;
        bincode::deserialize(bytes).map_err(SerializeError::from)
    }
}

impl Dict {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        bincode::serialize(self).map_err(SerializeError::from)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializeError> {
        check_nesting(bytes, true)?;
        bincode::deserialize(bytes).map_err(SerializeError::from)
    }
}

// Layout written by `bincode::serialize` for the derived impls: a u32 LE
// variant tag, then 8 bytes for Int/UInt/Float, 1 byte for Bool, and a u64
// LE length for String (bytes follow), Seq (values follow) and Dict
// (key string + value pairs follow). A bare `Dict` starts at its length.
const TAG_BOOL: u32 = 3;
const TAG_STRING: u32 = 4;
const TAG_SEQ: u32 = 5;
const TAG_DICT: u32 = 6;

enum Stop {
    Malformed,
    TooDeep,
}

struct Frame {
    remaining: u64,
    dict: bool,
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: u64) -> Result<&'a [u8], Stop> {
        let n = usize::try_from(n).map_err(|_| Stop::Malformed)?;
        let end = self.pos.checked_add(n).ok_or(Stop::Malformed)?;
        let slice = self.bytes.get(self.pos..end).ok_or(Stop::Malformed)?;
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32, Stop> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn u64(&mut self) -> Result<u64, Stop> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(buf))
    }

    fn skip_string(&mut self) -> Result<(), Stop> {
        let len = self.u64()?;
        self.take(len).map(|_| ())
    }
}

fn check_nesting(bytes: &[u8], dict_root: bool) -> Result<(), SerializeError> {
    let mut reader = Reader { bytes, pos: 0 };
    match scan(&mut reader, dict_root) {
        Err(Stop::TooDeep) => Err(SerializeError::InvalidData(format!(
            "nesting deeper than {} levels",
            MAX_DECODE_DEPTH
        ))),
        Ok(()) | Err(Stop::Malformed) => Ok(()),
    }
}

fn scan(reader: &mut Reader<'_>, dict_root: bool) -> Result<(), Stop> {
    let mut stack: Vec<Frame> = Vec::new();
    if dict_root {
        let remaining = reader.u64()?;
        stack.push(Frame {
            remaining,
            dict: true,
        });
        if !advance(reader, &mut stack)? {
            return Ok(());
        }
    }

    loop {
        if stack.len() > MAX_DECODE_DEPTH {
            return Err(Stop::TooDeep);
        }
        match reader.u32()? {
            tag if tag < TAG_BOOL => {
                reader.take(8)?;
            }
            TAG_BOOL => {
                reader.take(1)?;
            }
            TAG_STRING => reader.skip_string()?,
            tag @ (TAG_SEQ | TAG_DICT) => {
                let remaining = reader.u64()?;
                stack.push(Frame {
                    remaining,
                    dict: tag == TAG_DICT,
                });
            }
            _ => return Err(Stop::Malformed),
        }
        if !advance(reader, &mut stack)? {
            return Ok(());
        }
    }
}

/// Move to the next value to read; `false` once the root is complete
fn advance(reader: &mut Reader<'_>, stack: &mut Vec<Frame>) -> Result<bool, Stop> {
    while let Some(frame) = stack.last_mut() {
        if frame.remaining == 0 {
            stack.pop();
            continue;
        }
        frame.remaining -= 1;
        if frame.dict {
            reader.skip_string()?;
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> Dict {
        Dict::from([
            ("int", Value::from(42)),
            ("uint", Value::from(7u32)),
            ("double", Value::from(3.14)),
            ("bool", Value::from(true)),
            ("string", Value::from("hello")),
            ("nested", Value::from(Dict::from([("inner_key", 42)]))),
            (
                "vector_val",
                Value::from(vec![
                    Value::from(42),
                    Value::from(3.14),
                    Value::from("hello"),
                    Value::from(true),
                ]),
            ),
        ])
    }

    #[test]
    fn test_dict_bytes_roundtrip() {
        let dict = bundle();
        let bytes = dict.to_bytes().unwrap();
        assert_eq!(Dict::from_bytes(&bytes).unwrap(), dict);
    }

    #[test]
    fn test_variant_survives_roundtrip() {
        // Int and UInt must not collapse into one another
        for value in [Value::Int(1), Value::UInt(1), Value::Float(1.0), Value::Bool(true)] {
            let bytes = value.to_bytes().unwrap();
            assert_eq!(Value::from_bytes(&bytes).unwrap(), value);
        }
    }

    #[test]
    fn test_bincode_is_compact() {
        let bytes = Value::Int(42).to_bytes().unwrap();
        assert!(
            bytes.len() < 20,
            "Expected compact encoding, got {} bytes",
            bytes.len()
        );
    }

    #[test]
    fn test_corrupted_data_returns_error() {
        let corrupted = vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        assert!(Value::from_bytes(&corrupted).is_err());
    }

    #[test]
    fn test_empty_data_returns_error() {
        assert!(Dict::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_truncated_data_returns_error() {
        let bytes = Value::from("hello world").to_bytes().unwrap();
        let truncated = &bytes[..bytes.len() / 2];
        let err = Value::from_bytes(truncated).unwrap_err();
        assert!(err.to_string().starts_with("Bincode error"));
    }

    #[test]
    fn test_serde_json_carries_values() {
        // Any serde format works; JSON keeps the variant tag explicit
        let value = Value::from(vec![Value::UInt(3), Value::from("x")]);
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"Seq":[{"UInt":3},{"String":"x"}]}"#);
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, value);
    }

    fn nested_seq(levels: usize) -> Value {
        let mut value = Value::Int(0);
        for _ in 0..levels {
            value = Value::Seq(vec![value]);
        }
        value
    }

    #[test]
    fn test_nesting_at_limit_decodes() {
        let value = nested_seq(MAX_DECODE_DEPTH);
        let bytes = value.to_bytes().unwrap();
        assert_eq!(Value::from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn test_nesting_past_limit_rejected() {
        let bytes = nested_seq(MAX_DECODE_DEPTH + 1).to_bytes().unwrap();
        let err = Value::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, SerializeError::InvalidData(_)), "{}", err);
        assert_eq!(err.to_string(), "Invalid data: nesting deeper than 128 levels");
    }

    #[test]
    fn test_hostile_nesting_returns_error() {
        // Seq headers of length 1, nested far beyond any real stack
        let mut bytes = Vec::new();
        for _ in 0..200_000 {
            bytes.extend_from_slice(&TAG_SEQ.to_le_bytes());
            bytes.extend_from_slice(&1u64.to_le_bytes());
        }
        assert!(Value::from_bytes(&bytes).is_err());

        let mut dict_bytes = Vec::new();
        dict_bytes.extend_from_slice(&1u64.to_le_bytes());
        dict_bytes.extend_from_slice(&1u64.to_le_bytes());
        dict_bytes.push(b'k');
        dict_bytes.extend_from_slice(&bytes);
        assert!(matches!(
            Dict::from_bytes(&dict_bytes),
            Err(SerializeError::InvalidData(_))
        ));
    }

    #[test]
    fn test_deep_dict_nesting_rejected() {
        let mut dict = Dict::from([("leaf", 1)]);
        for _ in 0..MAX_DECODE_DEPTH {
            dict = Dict::from([("d", dict)]);
        }
        let bytes = dict.to_bytes().unwrap();
        assert!(matches!(
            Dict::from_bytes(&bytes),
            Err(SerializeError::InvalidData(_))
        ));
    }
}
