//! WebAssembly value representation.
//!
//! [`Value`] is a fixed-size tagged union holding exactly one typed value.
//! It is immutable after construction, trivially copyable, and never owns
//! heap memory, so it stays cache- and stack-friendly on memory-constrained
//! targets.

use crate::types::ValueType;
use crate::ValueError;
use std::fmt;
use std::mem;

/// Opaque handle held by `funcref` and `externref` values.
///
/// The handle is a pointer-sized index into an externally-owned table.
/// `Value` never manages the referent's lifetime; the owning module or table
/// must keep the referent alive for as long as any `Value` wraps it.
pub type RefAddr = usize;

/// 128-bit SIMD vector payload.
///
/// The 16 bytes are stored in canonical little-endian lane layout and can be
/// viewed as lanes of 8/16/32/64-bit integers or 32/64-bit floats. Equality
/// is always byte-wise, never lane-semantic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct V128([u8; 16]);

impl V128 {
    /// Construct from 16 raw bytes.
    pub const fn new(bytes: [u8; 16]) -> V128 {
        V128(bytes)
    }

    /// The raw 16-byte representation.
    pub const fn bytes(&self) -> [u8; 16] {
        self.0
    }

    pub fn from_i8x16(lanes: [i8; 16]) -> V128 {
        let mut r = [0u8; 16];
        for i in 0..16 {
            r[i] = lanes[i] as u8;
        }
        V128(r)
    }

    pub fn to_i8x16(&self) -> [i8; 16] {
        let mut r = [0i8; 16];
        for i in 0..16 {
            r[i] = self.0[i] as i8;
        }
        r
    }

    pub fn from_u8x16(lanes: [u8; 16]) -> V128 {
        V128(lanes)
    }

    pub fn to_u8x16(&self) -> [u8; 16] {
        self.0
    }

    pub fn from_i16x8(lanes: [i16; 8]) -> V128 {
        let mut r = [0u8; 16];
        for (i, &val) in lanes.iter().enumerate() {
            r[i * 2..i * 2 + 2].copy_from_slice(&val.to_le_bytes());
        }
        V128(r)
    }

    pub fn to_i16x8(&self) -> [i16; 8] {
        let v = &self.0;
        let mut r = [0i16; 8];
        for i in 0..8 {
            r[i] = i16::from_le_bytes([v[i * 2], v[i * 2 + 1]]);
        }
        r
    }

    pub fn from_u16x8(lanes: [u16; 8]) -> V128 {
        let mut r = [0u8; 16];
        for (i, &val) in lanes.iter().enumerate() {
            r[i * 2..i * 2 + 2].copy_from_slice(&val.to_le_bytes());
        }
        V128(r)
    }

    pub fn to_u16x8(&self) -> [u16; 8] {
        let v = &self.0;
        let mut r = [0u16; 8];
        for i in 0..8 {
            r[i] = u16::from_le_bytes([v[i * 2], v[i * 2 + 1]]);
        }
        r
    }

    pub fn from_i32x4(lanes: [i32; 4]) -> V128 {
        let mut r = [0u8; 16];
        for (i, &val) in lanes.iter().enumerate() {
            r[i * 4..i * 4 + 4].copy_from_slice(&val.to_le_bytes());
        }
        V128(r)
    }

    pub fn to_i32x4(&self) -> [i32; 4] {
        let v = &self.0;
        let mut r = [0i32; 4];
        for i in 0..4 {
            r[i] = i32::from_le_bytes([v[i * 4], v[i * 4 + 1], v[i * 4 + 2], v[i * 4 + 3]]);
        }
        r
    }

    pub fn from_u32x4(lanes: [u32; 4]) -> V128 {
        let mut r = [0u8; 16];
        for (i, &val) in lanes.iter().enumerate() {
            r[i * 4..i * 4 + 4].copy_from_slice(&val.to_le_bytes());
        }
        V128(r)
    }

    pub fn to_u32x4(&self) -> [u32; 4] {
        let v = &self.0;
        let mut r = [0u32; 4];
        for i in 0..4 {
            r[i] = u32::from_le_bytes([v[i * 4], v[i * 4 + 1], v[i * 4 + 2], v[i * 4 + 3]]);
        }
        r
    }

    pub fn from_i64x2(lanes: [i64; 2]) -> V128 {
        let mut r = [0u8; 16];
        r[0..8].copy_from_slice(&lanes[0].to_le_bytes());
        r[8..16].copy_from_slice(&lanes[1].to_le_bytes());
        V128(r)
    }

    pub fn to_i64x2(&self) -> [i64; 2] {
        let v = &self.0;
        [
            i64::from_le_bytes([v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]]),
            i64::from_le_bytes([v[8], v[9], v[10], v[11], v[12], v[13], v[14], v[15]]),
        ]
    }

    pub fn from_u64x2(lanes: [u64; 2]) -> V128 {
        let mut r = [0u8; 16];
        r[0..8].copy_from_slice(&lanes[0].to_le_bytes());
        r[8..16].copy_from_slice(&lanes[1].to_le_bytes());
        V128(r)
    }

    pub fn to_u64x2(&self) -> [u64; 2] {
        let v = &self.0;
        [
            u64::from_le_bytes([v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]]),
            u64::from_le_bytes([v[8], v[9], v[10], v[11], v[12], v[13], v[14], v[15]]),
        ]
    }

    pub fn from_f32x4(lanes: [f32; 4]) -> V128 {
        let mut r = [0u8; 16];
        for (i, &val) in lanes.iter().enumerate() {
            r[i * 4..i * 4 + 4].copy_from_slice(&val.to_le_bytes());
        }
        V128(r)
    }

    pub fn to_f32x4(&self) -> [f32; 4] {
        let v = &self.0;
        [
            f32::from_le_bytes([v[0], v[1], v[2], v[3]]),
            f32::from_le_bytes([v[4], v[5], v[6], v[7]]),
            f32::from_le_bytes([v[8], v[9], v[10], v[11]]),
            f32::from_le_bytes([v[12], v[13], v[14], v[15]]),
        ]
    }

    pub fn from_f64x2(lanes: [f64; 2]) -> V128 {
        let mut r = [0u8; 16];
        r[0..8].copy_from_slice(&lanes[0].to_le_bytes());
        r[8..16].copy_from_slice(&lanes[1].to_le_bytes());
        V128(r)
    }

    pub fn to_f64x2(&self) -> [f64; 2] {
        let v = &self.0;
        [
            f64::from_le_bytes([v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]]),
            f64::from_le_bytes([v[8], v[9], v[10], v[11], v[12], v[13], v[14], v[15]]),
        ]
    }
}

/// Runtime representation of WebAssembly values.
///
/// Float equality follows native IEEE 754 semantics (NaN is never equal to
/// itself); use [`Value::bits_equal`] when bit-exact comparison is needed,
/// e.g. for reinterpretation round trips. Cross-type comparisons are
/// `false`, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    V128(V128),
    FuncRef(Option<RefAddr>),
    ExternRef(Option<RefAddr>),
}

// Value must stay compact for embedded targets.
const _: () = assert!(mem::size_of::<Value>() <= 32);

impl Default for Value {
    fn default() -> Self {
        Value::I32(0)
    }
}

impl Value {
    /// Get the WebAssembly type of this value
    pub fn typ(&self) -> ValueType {
        match self {
            Value::I32(_) => ValueType::I32,
            Value::I64(_) => ValueType::I64,
            Value::F32(_) => ValueType::F32,
            Value::F64(_) => ValueType::F64,
            Value::V128(_) => ValueType::V128,
            Value::FuncRef(_) => ValueType::FuncRef,
            Value::ExternRef(_) => ValueType::ExternRef,
        }
    }

    pub fn from_i32(v: i32) -> Value {
        Value::I32(v)
    }

    pub fn from_i64(v: i64) -> Value {
        Value::I64(v)
    }

    pub fn from_f32(v: f32) -> Value {
        Value::F32(v)
    }

    pub fn from_f64(v: f64) -> Value {
        Value::F64(v)
    }

    pub fn from_v128(v: V128) -> Value {
        Value::V128(v)
    }

    /// Create a funcref value; `None` is the null reference.
    pub fn from_funcref(addr: Option<RefAddr>) -> Value {
        Value::FuncRef(addr)
    }

    /// Create an externref value; `None` is the null reference.
    pub fn from_externref(addr: Option<RefAddr>) -> Value {
        Value::ExternRef(addr)
    }

    /// The zero/null value for a given type, used to initialise locals,
    /// globals, and table slots.
    pub fn default_for_type(typ: ValueType) -> Value {
        match typ {
            ValueType::I32 => Value::I32(0),
            ValueType::I64 => Value::I64(0),
            ValueType::F32 => Value::F32(0.0),
            ValueType::F64 => Value::F64(0.0),
            ValueType::V128 => Value::V128(V128::default()),
            ValueType::FuncRef => Value::FuncRef(None),
            ValueType::ExternRef => Value::ExternRef(None),
        }
    }

    /// Extract as i32, failing if this value has a different type
    pub fn as_i32(&self) -> Result<i32, ValueError> {
        match self {
            Value::I32(v) => Ok(*v),
            _ => Err(ValueError::type_mismatch(ValueType::I32, self.typ())),
        }
    }

    /// Extract as i64, failing if this value has a different type
    pub fn as_i64(&self) -> Result<i64, ValueError> {
        match self {
            Value::I64(v) => Ok(*v),
            _ => Err(ValueError::type_mismatch(ValueType::I64, self.typ())),
        }
    }

    /// Extract as f32, failing if this value has a different type
    pub fn as_f32(&self) -> Result<f32, ValueError> {
        match self {
            Value::F32(v) => Ok(*v),
            _ => Err(ValueError::type_mismatch(ValueType::F32, self.typ())),
        }
    }

    /// Extract as f64, failing if this value has a different type
    pub fn as_f64(&self) -> Result<f64, ValueError> {
        match self {
            Value::F64(v) => Ok(*v),
            _ => Err(ValueError::type_mismatch(ValueType::F64, self.typ())),
        }
    }

    /// Extract as v128, failing if this value has a different type
    pub fn as_v128(&self) -> Result<V128, ValueError> {
        match self {
            Value::V128(v) => Ok(*v),
            _ => Err(ValueError::type_mismatch(ValueType::V128, self.typ())),
        }
    }

    /// Extract the funcref handle, failing if this value has a different type
    pub fn as_funcref(&self) -> Result<Option<RefAddr>, ValueError> {
        match self {
            Value::FuncRef(addr) => Ok(*addr),
            _ => Err(ValueError::type_mismatch(ValueType::FuncRef, self.typ())),
        }
    }

    /// Extract the externref handle, failing if this value has a different type
    pub fn as_externref(&self) -> Result<Option<RefAddr>, ValueError> {
        match self {
            Value::ExternRef(addr) => Ok(*addr),
            _ => Err(ValueError::type_mismatch(ValueType::ExternRef, self.typ())),
        }
    }

    /// Check if this value has a number type
    pub fn is_number(&self) -> bool {
        self.typ().is_number()
    }

    /// Check if this value has a vector type
    pub fn is_vector(&self) -> bool {
        self.typ().is_vector()
    }

    /// Check if this value has a reference type
    pub fn is_reference(&self) -> bool {
        self.typ().is_reference()
    }

    /// Check if this value is a null reference. Non-reference values are
    /// never null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::FuncRef(None) | Value::ExternRef(None))
    }

    /// Bit-exact comparison.
    ///
    /// Unlike `==`, floats compare by bit pattern: NaN payloads are
    /// significant and equal to themselves, and `0.0` differs from `-0.0`.
    pub fn bits_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (Value::V128(a), Value::V128(b)) => a == b,
            (Value::FuncRef(a), Value::FuncRef(b)) => a == b,
            (Value::ExternRef(a), Value::ExternRef(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => write!(f, "i32:{}", v),
            Value::I64(v) => write!(f, "i64:{}", v),
            Value::F32(v) => write!(f, "f32:{:e}", v),
            Value::F64(v) => write!(f, "f64:{:e}", v),
            Value::V128(v) => write!(f, "v128:{}", hex::encode(v.bytes())),
            Value::FuncRef(None) => write!(f, "funcref:null"),
            Value::FuncRef(Some(addr)) => write!(f, "funcref:0x{:x}", addr),
            Value::ExternRef(None) => write!(f, "externref:null"),
            Value::ExternRef(Some(addr)) => write!(f, "externref:0x{:x}", addr),
        }
    }
}
