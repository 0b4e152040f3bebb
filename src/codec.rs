//! Little-endian binary serialization of value payloads.
//!
//! Encodes the raw bit pattern of a value at its natural width, matching the
//! constant-value encoding of the WebAssembly binary format: IEEE 754 bit
//! patterns for floats, 16 raw bytes for v128, no padding. NaN payloads are
//! carried through unchanged in both directions.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

use crate::types::ValueType;
use crate::value::{Value, V128};
use crate::ValueError;

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Appends the little-endian encoding of `value`'s payload to `buf`.
///
/// Reference values encode their handle (null as 0) as 8 bytes. That form
/// exists for in-memory debug dumps only; the binary format has no constant
/// encoding for references and [`deserialize`] will not accept them.
pub fn serialize(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::I32(v) => write_u32(buf, *v as u32),
        Value::I64(v) => write_u64(buf, *v as u64),
        Value::F32(v) => write_u32(buf, v.to_bits()),
        Value::F64(v) => write_u64(buf, v.to_bits()),
        Value::V128(v) => buf.extend_from_slice(&v.bytes()),
        Value::FuncRef(addr) | Value::ExternRef(addr) => {
            write_u64(buf, addr.unwrap_or(0) as u64)
        }
    }
}

/// Serializes a value into a fresh buffer.
pub fn serialize_to_vec(value: &Value) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16);
    serialize(value, &mut buf);
    buf
}

/// Appends the little-endian encoding of a u32 to `buf`.
fn write_u32(buf: &mut Vec<u8>, v: u32) {
    let mut bytes = [0u8; 4];
    let mut wtr = io::Cursor::new(&mut bytes[..]);
    wtr.write_u32::<LittleEndian>(v).unwrap();
    buf.extend_from_slice(&bytes);
}

/// Appends the little-endian encoding of a u64 to `buf`.
fn write_u64(buf: &mut Vec<u8>, v: u64) {
    let mut bytes = [0u8; 8];
    let mut wtr = io::Cursor::new(&mut bytes[..]);
    wtr.write_u64::<LittleEndian>(v).unwrap();
    buf.extend_from_slice(&bytes);
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Reads a value of `expected_type` from `bytes` starting at `*offset`.
///
/// On success the exact bit pattern is reconstructed and `offset` advances
/// by the consumed size.
///
/// # Errors
/// - `UnexpectedEndOfFile` if fewer bytes remain than the payload size.
/// - `TypeMismatch` for reference types, which have no binary encoding.
pub fn deserialize(
    expected_type: ValueType,
    bytes: &[u8],
    offset: &mut usize,
) -> Result<Value, ValueError> {
    if expected_type.is_reference() {
        return Err(ValueError::TypeMismatch {
            expected: "serializable value type".to_string(),
            actual: expected_type.to_string(),
        });
    }

    let size = expected_type.byte_size();
    if bytes.len().saturating_sub(*offset) < size {
        return Err(ValueError::UnexpectedEndOfFile);
    }

    let mut rdr = &bytes[*offset..];
    let value = match expected_type {
        ValueType::I32 => Value::I32(read_u32(&mut rdr)? as i32),
        ValueType::I64 => Value::I64(read_u64(&mut rdr)? as i64),
        ValueType::F32 => Value::F32(f32::from_bits(read_u32(&mut rdr)?)),
        ValueType::F64 => Value::F64(f64::from_bits(read_u64(&mut rdr)?)),
        ValueType::V128 => {
            let mut lanes = [0u8; 16];
            lanes.copy_from_slice(&bytes[*offset..*offset + 16]);
            Value::V128(V128::new(lanes))
        }
        // Handled above
        ValueType::FuncRef | ValueType::ExternRef => unreachable!(),
    };

    *offset += size;
    Ok(value)
}

fn read_u32(rdr: &mut &[u8]) -> Result<u32, ValueError> {
    rdr.read_u32::<LittleEndian>()
        .map_err(|_| ValueError::UnexpectedEndOfFile)
}

fn read_u64(rdr: &mut &[u8]) -> Result<u64, ValueError> {
    rdr.read_u64::<LittleEndian>()
        .map_err(|_| ValueError::UnexpectedEndOfFile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_f32_bit_pattern() {
        // 1.5f32 is 0x3FC00000, little-endian on the wire
        assert_eq!(
            serialize_to_vec(&Value::from_f32(1.5)),
            vec![0x00, 0x00, 0xC0, 0x3F]
        );
    }

    #[test]
    fn test_serialize_widths() {
        assert_eq!(serialize_to_vec(&Value::from_i32(1)).len(), 4);
        assert_eq!(serialize_to_vec(&Value::from_i64(1)).len(), 8);
        assert_eq!(serialize_to_vec(&Value::from_f32(1.0)).len(), 4);
        assert_eq!(serialize_to_vec(&Value::from_f64(1.0)).len(), 8);
        assert_eq!(serialize_to_vec(&Value::from_v128(V128::default())).len(), 16);
    }

    #[test]
    fn test_serialize_little_endian() {
        assert_eq!(
            serialize_to_vec(&Value::from_i32(0x1234_5678)),
            vec![0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(
            serialize_to_vec(&Value::from_i64(-1)),
            vec![0xFF; 8]
        );
    }

    #[test]
    fn test_serialize_v128_raw_bytes() {
        let lanes: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        assert_eq!(serialize_to_vec(&Value::from_v128(V128::new(lanes))), lanes);
    }

    #[test]
    fn test_serialize_references_debug_form() {
        assert_eq!(serialize_to_vec(&Value::from_funcref(None)), vec![0u8; 8]);
        let bytes = serialize_to_vec(&Value::from_externref(Some(0x0102)));
        assert_eq!(bytes, vec![0x02, 0x01, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_deserialize_empty_input() {
        let mut offset = 0;
        assert!(matches!(
            deserialize(ValueType::I32, &[], &mut offset),
            Err(ValueError::UnexpectedEndOfFile)
        ));
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_deserialize_short_input() {
        let mut offset = 0;
        assert!(matches!(
            deserialize(ValueType::I64, &[1, 2, 3, 4], &mut offset),
            Err(ValueError::UnexpectedEndOfFile)
        ));
        // A short tail behind a valid offset also fails
        let mut offset = 2;
        assert!(matches!(
            deserialize(ValueType::I32, &[1, 2, 3, 4], &mut offset),
            Err(ValueError::UnexpectedEndOfFile)
        ));
    }

    #[test]
    fn test_deserialize_advances_offset() {
        let mut buf = Vec::new();
        serialize(&Value::from_i32(7), &mut buf);
        serialize(&Value::from_f64(2.5), &mut buf);
        serialize(&Value::from_i64(-9), &mut buf);

        let mut offset = 0;
        assert_eq!(
            deserialize(ValueType::I32, &buf, &mut offset).unwrap(),
            Value::I32(7)
        );
        assert_eq!(offset, 4);
        assert_eq!(
            deserialize(ValueType::F64, &buf, &mut offset).unwrap(),
            Value::F64(2.5)
        );
        assert_eq!(offset, 12);
        assert_eq!(
            deserialize(ValueType::I64, &buf, &mut offset).unwrap(),
            Value::I64(-9)
        );
        assert_eq!(offset, 20);
    }

    #[test]
    fn test_deserialize_rejects_references() {
        let bytes = [0u8; 16];
        let mut offset = 0;
        assert!(matches!(
            deserialize(ValueType::FuncRef, &bytes, &mut offset),
            Err(ValueError::TypeMismatch { .. })
        ));
        assert!(matches!(
            deserialize(ValueType::ExternRef, &bytes, &mut offset),
            Err(ValueError::TypeMismatch { .. })
        ));
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_round_trip_preserves_nan_payloads() {
        let nan = Value::from_f64(f64::from_bits(0x7FF8_DEAD_BEEF_0001));
        let buf = serialize_to_vec(&nan);
        let mut offset = 0;
        let back = deserialize(ValueType::F64, &buf, &mut offset).unwrap();
        assert!(back.bits_equal(&nan));

        let nan32 = Value::from_f32(f32::from_bits(0xFFC0_1234));
        let buf = serialize_to_vec(&nan32);
        let mut offset = 0;
        let back = deserialize(ValueType::F32, &buf, &mut offset).unwrap();
        assert!(back.bits_equal(&nan32));
    }

    #[test]
    fn test_round_trip_all_serializable_types() {
        let values = [
            Value::from_i32(-123),
            Value::from_i64(i64::MIN),
            Value::from_f32(-0.0),
            Value::from_f64(f64::MAX),
            Value::from_v128(V128::from_u64x2([u64::MAX, 42])),
        ];
        for value in values.iter() {
            let buf = serialize_to_vec(value);
            assert_eq!(buf.len(), value.typ().byte_size());
            let mut offset = 0;
            let back = deserialize(value.typ(), &buf, &mut offset).unwrap();
            assert!(back.bits_equal(value), "round trip failed for {}", value);
            assert_eq!(offset, buf.len());
        }
    }
}
