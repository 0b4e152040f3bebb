//! Float width conversions and integer to float conversions.

use crate::value::Value;
use crate::ValueError;

// ============================================================================
// Float Width Conversions
// ============================================================================

/// f32.demote_f64 - Convert f64 to f32 (may lose precision)
/// spec: 4.4.1.6
///
/// Rounds to nearest, ties to even. NaN demotes to NaN and infinities keep
/// their sign; precision loss is by design, never an error.
pub fn f32_demote_f64(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;
    Ok(Value::F32(v as f32))
}

/// f64.promote_f32 - Convert f32 to f64 (exact conversion)
/// spec: 4.4.1.6
pub fn f64_promote_f32(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;
    Ok(Value::F64(v as f64))
}

// ============================================================================
// Integer to Float Conversions
// ============================================================================

/// f32.convert_i32_s - Convert signed i32 to f32
/// spec: 4.4.1.6
pub fn f32_convert_i32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::F32(v as f32))
}

/// f32.convert_i32_u - Convert unsigned i32 to f32
/// spec: 4.4.1.6
pub fn f32_convert_i32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::F32((v as u32) as f32))
}

/// f32.convert_i64_s - Convert signed i64 to f32 (may lose precision)
/// spec: 4.4.1.6
pub fn f32_convert_i64_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::F32(v as f32))
}

/// f32.convert_i64_u - Convert unsigned i64 to f32 (may lose precision)
/// spec: 4.4.1.6
pub fn f32_convert_i64_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::F32((v as u64) as f32))
}

/// f64.convert_i32_s - Convert signed i32 to f64 (always exact)
/// spec: 4.4.1.6
pub fn f64_convert_i32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::F64(v as f64))
}

/// f64.convert_i32_u - Convert unsigned i32 to f64 (always exact)
/// spec: 4.4.1.6
pub fn f64_convert_i32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::F64((v as u32) as f64))
}

/// f64.convert_i64_s - Convert signed i64 to f64 (may lose precision)
/// spec: 4.4.1.6
pub fn f64_convert_i64_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::F64(v as f64))
}

/// f64.convert_i64_u - Convert unsigned i64 to f64 (may lose precision)
/// spec: 4.4.1.6
pub fn f64_convert_i64_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::F64((v as u64) as f64))
}
