//! Type conversion operations for WebAssembly values.
//!
//! This module provides implementations of the type conversion instructions
//! as specified in the WebAssembly specification section 4.4.1.6.
//!
//! Conversions include:
//! - Integer width conversions (wrap, extend)
//! - Sign extension operations
//! - Float width conversions (promote, demote)
//! - Integer to float conversions
//! - Float to integer conversions (truncation, trapping)
//! - Saturating truncations (non-trapping)
//! - Reinterpretation (bit casting)
//!
//! Every operation is a pure function from [`Value`] to
//! `Result<Value, ValueError>`: operand type errors surface as
//! `TypeMismatch`, truncation traps as `InvalidConversion` or
//! `IntegerOverflow`. Nothing here holds state.

mod float;
mod integer;
mod reinterpret;
mod trunc;

pub use float::*;
pub use integer::*;
pub use reinterpret::*;
pub use trunc::*;

use crate::types::ValueType;
use crate::value::Value;
use crate::ValueError;

/// Generic conversion dispatch.
///
/// Looks up the conversion instruction for the (source, target) type pair
/// and applies it. Integer sources convert as signed; float-to-integer
/// targets use the trapping truncation, so this can fail with
/// `InvalidConversion` or `IntegerOverflow` like the underlying
/// instruction. Pairs with no defined instruction (anything involving
/// v128 or references, in particular) fail with `InvalidConversion`.
pub fn convert(value: Value, target: ValueType) -> Result<Value, ValueError> {
    // Identity conversion is always defined.
    if value.typ() == target {
        return Ok(value);
    }

    match (value.typ(), target) {
        (ValueType::I32, ValueType::I64) => i64_extend_i32_s(value),
        (ValueType::I32, ValueType::F32) => f32_convert_i32_s(value),
        (ValueType::I32, ValueType::F64) => f64_convert_i32_s(value),
        (ValueType::I64, ValueType::I32) => i32_wrap_i64(value),
        (ValueType::I64, ValueType::F32) => f32_convert_i64_s(value),
        (ValueType::I64, ValueType::F64) => f64_convert_i64_s(value),
        (ValueType::F32, ValueType::I32) => i32_trunc_f32_s(value),
        (ValueType::F32, ValueType::I64) => i64_trunc_f32_s(value),
        (ValueType::F32, ValueType::F64) => f64_promote_f32(value),
        (ValueType::F64, ValueType::I32) => i32_trunc_f64_s(value),
        (ValueType::F64, ValueType::I64) => i64_trunc_f64_s(value),
        (ValueType::F64, ValueType::F32) => f32_demote_f64(value),
        (from, to) => Err(ValueError::InvalidConversion(format!(
            "no conversion from {} to {}",
            from, to
        ))),
    }
}

/// Check whether a conversion instruction exists between two types.
///
/// Identity is always valid; otherwise only number types convert to each
/// other.
pub fn is_conversion_valid(from: ValueType, to: ValueType) -> bool {
    from == to || (from.is_number() && to.is_number())
}

/// Check whether a conversion may lose precision or range.
pub fn is_conversion_lossy(from: ValueType, to: ValueType) -> bool {
    match from {
        ValueType::I64 => to == ValueType::I32 || to == ValueType::F32,
        ValueType::F64 => to != ValueType::F64,
        // f32 cannot represent every i32 exactly
        ValueType::I32 => to == ValueType::F32,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::V128;

    #[test]
    fn test_convert_identity() {
        let v = Value::from_v128(V128::new([1; 16]));
        assert_eq!(convert(v, ValueType::V128).unwrap(), v);
        let r = Value::from_funcref(Some(9));
        assert_eq!(convert(r, ValueType::FuncRef).unwrap(), r);
    }

    #[test]
    fn test_convert_dispatches_every_number_pair() {
        let numbers = [
            Value::from_i32(7),
            Value::from_i64(7),
            Value::from_f32(7.0),
            Value::from_f64(7.0),
        ];
        for value in numbers.iter() {
            for target in ValueType::ALL.iter().filter(|t| t.is_number()) {
                let converted = convert(*value, *target).unwrap();
                assert_eq!(converted.typ(), *target);
            }
        }
    }

    #[test]
    fn test_convert_examples() {
        assert_eq!(
            convert(Value::from_i32(-1), ValueType::I64).unwrap(),
            Value::from_i64(-1)
        );
        assert_eq!(
            convert(Value::from_i64(0x1_0000_0002), ValueType::I32).unwrap(),
            Value::from_i32(2)
        );
        assert_eq!(
            convert(Value::from_f64(2.5), ValueType::I32).unwrap(),
            Value::from_i32(2)
        );
        assert_eq!(
            convert(Value::from_f32(1.5), ValueType::F64).unwrap(),
            Value::from_f64(1.5)
        );
    }

    #[test]
    fn test_convert_undefined_pairs_fail() {
        let v128 = Value::from_v128(V128::default());
        let fref = Value::from_funcref(None);

        for target in ValueType::ALL.iter() {
            if *target != ValueType::V128 {
                assert!(matches!(
                    convert(v128, *target),
                    Err(ValueError::InvalidConversion(_))
                ));
            }
            if *target != ValueType::FuncRef {
                assert!(matches!(
                    convert(fref, *target),
                    Err(ValueError::InvalidConversion(_))
                ));
            }
        }

        // Numbers never convert into vectors or references.
        assert!(convert(Value::from_i32(1), ValueType::V128).is_err());
        assert!(convert(Value::from_i32(1), ValueType::ExternRef).is_err());
    }

    #[test]
    fn test_convert_propagates_truncation_traps() {
        assert!(matches!(
            convert(Value::from_f32(f32::NAN), ValueType::I32),
            Err(ValueError::InvalidConversion(_))
        ));
        assert!(matches!(
            convert(Value::from_f64(1.0e300), ValueType::I64),
            Err(ValueError::IntegerOverflow)
        ));
    }

    #[test]
    fn test_conversion_validity_table() {
        for from in ValueType::ALL.iter() {
            for to in ValueType::ALL.iter() {
                let expected = from == to || (from.is_number() && to.is_number());
                assert_eq!(is_conversion_valid(*from, *to), expected);
                // The validity predicate agrees with the dispatcher for
                // inputs that cannot trap.
                if !expected {
                    let value = Value::default_for_type(*from);
                    assert!(convert(value, *to).is_err());
                }
            }
        }
    }

    #[test]
    fn test_lossy_conversions() {
        assert!(is_conversion_lossy(ValueType::I64, ValueType::I32));
        assert!(is_conversion_lossy(ValueType::I64, ValueType::F32));
        assert!(is_conversion_lossy(ValueType::F64, ValueType::F32));
        assert!(is_conversion_lossy(ValueType::F64, ValueType::I32));
        assert!(is_conversion_lossy(ValueType::I32, ValueType::F32));
        assert!(!is_conversion_lossy(ValueType::I32, ValueType::F64));
        assert!(!is_conversion_lossy(ValueType::F32, ValueType::F64));
        assert!(!is_conversion_lossy(ValueType::F64, ValueType::F64));
    }
}
