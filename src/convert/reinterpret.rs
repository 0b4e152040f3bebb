//! Reinterpretation (bit casting) between same-width integers and floats.
//!
//! The bit pattern is moved unchanged; the value is never transformed and
//! NaN payloads are preserved exactly.

use crate::value::Value;
use crate::ValueError;

/// i32.reinterpret_f32 - Reinterpret f32 bits as i32
/// spec: 4.4.1.6
pub fn i32_reinterpret_f32(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;
    Ok(Value::I32(v.to_bits() as i32))
}

/// i64.reinterpret_f64 - Reinterpret f64 bits as i64
/// spec: 4.4.1.6
pub fn i64_reinterpret_f64(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;
    Ok(Value::I64(v.to_bits() as i64))
}

/// f32.reinterpret_i32 - Reinterpret i32 bits as f32
/// spec: 4.4.1.6
pub fn f32_reinterpret_i32(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::F32(f32::from_bits(v as u32)))
}

/// f64.reinterpret_i64 - Reinterpret i64 bits as f64
/// spec: 4.4.1.6
pub fn f64_reinterpret_i64(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::F64(f64::from_bits(v as u64)))
}
