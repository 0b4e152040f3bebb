//! Float to integer truncation.
//!
//! The trapping forms fail on NaN, infinity, and out-of-range values; the
//! saturating forms clamp instead. Range checks compare the truncated value
//! against the exact boundary constants for each (source width, target
//! width, signedness) combination rather than relying on a native cast,
//! because casts at the boundary are not defined by the float format.

use crate::value::Value;
use crate::ValueError;

fn nan_to_integer() -> ValueError {
    ValueError::InvalidConversion("NaN to integer".to_string())
}

fn infinity_to_integer() -> ValueError {
    ValueError::InvalidConversion("infinity to integer".to_string())
}

// ============================================================================
// Trapping Truncation
// ============================================================================

/// i32.trunc_f32_s - Truncate f32 to signed i32
/// spec: 4.4.1.6
/// Traps on: NaN, infinity, or out-of-range values
pub fn i32_trunc_f32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    // Truncate toward zero first, then range-check the result
    let truncated = v.trunc();

    const MIN: f32 = -2147483648.0; // i32::MIN as f32
    const MAX: f32 = 2147483648.0; // 2^31 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I32(truncated as i32))
}

/// i32.trunc_f32_u - Truncate f32 to unsigned i32
/// spec: 4.4.1.6
pub fn i32_trunc_f32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    // -0.0 truncates to 0, not a range error
    if truncated == 0.0 {
        return Ok(Value::I32(0));
    }

    const MIN: f32 = 0.0;
    const MAX: f32 = 4294967296.0; // 2^32 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I32(truncated as u32 as i32))
}

/// i32.trunc_f64_s - Truncate f64 to signed i32
/// spec: 4.4.1.6
pub fn i32_trunc_f64_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    const MIN: f64 = -2147483648.0; // i32::MIN as f64
    const MAX: f64 = 2147483648.0; // 2^31 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I32(truncated as i32))
}

/// i32.trunc_f64_u - Truncate f64 to unsigned i32
/// spec: 4.4.1.6
pub fn i32_trunc_f64_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    if truncated == 0.0 {
        return Ok(Value::I32(0));
    }

    const MIN: f64 = 0.0;
    const MAX: f64 = 4294967296.0; // 2^32 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I32(truncated as u32 as i32))
}

/// i64.trunc_f32_s - Truncate f32 to signed i64
/// spec: 4.4.1.6
pub fn i64_trunc_f32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    // f32 cannot represent the full i64 range precisely; both bounds are
    // exact powers of two and therefore exactly representable
    const MIN: f32 = -9223372036854775808.0; // i64::MIN as f32
    const MAX: f32 = 9223372036854775808.0; // 2^63 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I64(truncated as i64))
}

/// i64.trunc_f32_u - Truncate f32 to unsigned i64
/// spec: 4.4.1.6
pub fn i64_trunc_f32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    if truncated == 0.0 {
        return Ok(Value::I64(0));
    }

    const MIN: f32 = 0.0;
    const MAX: f32 = 18446744073709551616.0; // 2^64 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I64(truncated as u64 as i64))
}

/// i64.trunc_f64_s - Truncate f64 to signed i64
/// spec: 4.4.1.6
pub fn i64_trunc_f64_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    const MIN: f64 = -9223372036854775808.0; // i64::MIN as f64
    const MAX: f64 = 9223372036854775808.0; // 2^63 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I64(truncated as i64))
}

/// i64.trunc_f64_u - Truncate f64 to unsigned i64
/// spec: 4.4.1.6
pub fn i64_trunc_f64_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    if v.is_nan() {
        return Err(nan_to_integer());
    }
    if v.is_infinite() {
        return Err(infinity_to_integer());
    }

    let truncated = v.trunc();

    if truncated == 0.0 {
        return Ok(Value::I64(0));
    }

    const MIN: f64 = 0.0;
    const MAX: f64 = 18446744073709551616.0; // 2^64 (exclusive upper bound)

    if !(MIN..MAX).contains(&truncated) {
        return Err(ValueError::IntegerOverflow);
    }

    Ok(Value::I64(truncated as u64 as i64))
}

// ============================================================================
// Saturating Truncation (Non-trapping)
// ============================================================================

/// i32.trunc_sat_f32_s - Saturating truncation of f32 to signed i32
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i32_trunc_sat_f32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    let result = if v.is_nan() {
        0
    } else if v >= i32::MAX as f32 {
        i32::MAX
    } else if v <= i32::MIN as f32 {
        i32::MIN
    } else {
        v.trunc() as i32
    };

    Ok(Value::I32(result))
}

/// i32.trunc_sat_f32_u - Saturating truncation of f32 to unsigned i32
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i32_trunc_sat_f32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    let result = if v.is_nan() {
        0
    } else if v >= u32::MAX as f32 {
        u32::MAX as i32
    } else if v <= 0.0 {
        0
    } else {
        v.trunc() as u32 as i32
    };

    Ok(Value::I32(result))
}

/// i32.trunc_sat_f64_s - Saturating truncation of f64 to signed i32
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i32_trunc_sat_f64_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    let result = if v.is_nan() {
        0
    } else if v >= i32::MAX as f64 {
        i32::MAX
    } else if v <= i32::MIN as f64 {
        i32::MIN
    } else {
        v.trunc() as i32
    };

    Ok(Value::I32(result))
}

/// i32.trunc_sat_f64_u - Saturating truncation of f64 to unsigned i32
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i32_trunc_sat_f64_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    let result = if v.is_nan() {
        0
    } else if v >= u32::MAX as f64 {
        u32::MAX as i32
    } else if v <= 0.0 {
        0
    } else {
        v.trunc() as u32 as i32
    };

    Ok(Value::I32(result))
}

/// i64.trunc_sat_f32_s - Saturating truncation of f32 to signed i64
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i64_trunc_sat_f32_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    let result = if v.is_nan() {
        0
    } else if v >= i64::MAX as f32 {
        i64::MAX
    } else if v <= i64::MIN as f32 {
        i64::MIN
    } else {
        v.trunc() as i64
    };

    Ok(Value::I64(result))
}

/// i64.trunc_sat_f32_u - Saturating truncation of f32 to unsigned i64
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i64_trunc_sat_f32_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f32()?;

    let result = if v.is_nan() {
        0
    } else if v >= u64::MAX as f32 {
        u64::MAX as i64
    } else if v <= 0.0 {
        0
    } else {
        v.trunc() as u64 as i64
    };

    Ok(Value::I64(result))
}

/// i64.trunc_sat_f64_s - Saturating truncation of f64 to signed i64
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i64_trunc_sat_f64_s(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    let result = if v.is_nan() {
        0
    } else if v >= i64::MAX as f64 {
        i64::MAX
    } else if v <= i64::MIN as f64 {
        i64::MIN
    } else {
        v.trunc() as i64
    };

    Ok(Value::I64(result))
}

/// i64.trunc_sat_f64_u - Saturating truncation of f64 to unsigned i64
/// spec: 4.4.1.6 (non-trapping float-to-int conversions)
pub fn i64_trunc_sat_f64_u(value: Value) -> Result<Value, ValueError> {
    let v = value.as_f64()?;

    let result = if v.is_nan() {
        0
    } else if v >= u64::MAX as f64 {
        u64::MAX as i64
    } else if v <= 0.0 {
        0
    } else {
        v.trunc() as u64 as i64
    };

    Ok(Value::I64(result))
}
