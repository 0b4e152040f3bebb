//! Integer width conversions and sign extension operations.

use crate::value::Value;
use crate::ValueError;

// ============================================================================
// Integer Width Conversions
// ============================================================================

/// i32.wrap_i64 - Truncate i64 to i32 (keep low 32 bits)
/// spec: 4.4.1.6
pub fn i32_wrap_i64(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::I32(v as i32))
}

/// i64.extend_i32_s - Sign-extend i32 to i64
/// spec: 4.4.1.6
pub fn i64_extend_i32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::I64(v as i64)) // Rust's `as` does sign extension
}

/// i64.extend_i32_u - Zero-extend i32 to i64
/// spec: 4.4.1.6
pub fn i64_extend_i32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::I64((v as u32) as i64)) // Cast to u32 first for zero-extension
}

// ============================================================================
// Sign Extension Operations
// ============================================================================

/// i32.extend8_s - Sign-extend the low 8 bits of an i32
/// spec: 4.4.1.6
pub fn i32_extend8_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::I32((v as i8) as i32))
}

/// i32.extend16_s - Sign-extend the low 16 bits of an i32
/// spec: 4.4.1.6
pub fn i32_extend16_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i32()?;
    Ok(Value::I32((v as i16) as i32))
}

/// i64.extend8_s - Sign-extend the low 8 bits of an i64
/// spec: 4.4.1.6
pub fn i64_extend8_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::I64((v as i8) as i64))
}

/// i64.extend16_s - Sign-extend the low 16 bits of an i64
/// spec: 4.4.1.6
pub fn i64_extend16_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::I64((v as i16) as i64))
}

/// i64.extend32_s - Sign-extend the low 32 bits of an i64
/// spec: 4.4.1.6
pub fn i64_extend32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_i64()?;
    Ok(Value::I64((v as i32) as i64))
}
