//! A WebAssembly value representation and conversion engine written in Rust.
//!
//! wasval provides the canonical in-memory encoding of every WebAssembly
//! value kind (i32, i64, f32, f64, v128, funcref, externref), the complete
//! set of conversion instructions between them, and their little-endian
//! binary encoding. It is the substrate an interpreter's instruction
//! execution and module validation are built on: allocation-free, pure, and
//! safe on embedded targets with partial 64-bit or double-precision support.
//!
//! # Modules
//!
//! - [`types`] -- Value type tags and their static metadata (size, alignment,
//!   category, binary encoding byte).
//! - [`value`] -- The [`Value`] container, the [`V128`] vector payload, and
//!   reference handles.
//! - [`convert`] -- Conversion instructions: wrap, extend, trapping and
//!   saturating truncation, promote/demote, convert, reinterpret.
//! - [`codec`] -- Little-endian serialization of value payloads.
//!
//! # Example
//!
//! Truncate a float toward zero, trapping on NaN:
//!
//! ```
//! use wasval::{convert, Value, ValueError};
//!
//! let v = convert::i32_trunc_f32_s(Value::from_f32(-3.9)).unwrap();
//! assert_eq!(v, Value::from_i32(-3));
//!
//! let err = convert::i32_trunc_f32_s(Value::from_f32(f32::NAN));
//! assert!(matches!(err, Err(ValueError::InvalidConversion(_))));
//! ```
//!
//! # Specification
//!
//! Targets the value and conversion semantics of the
//! [WebAssembly 2.0 specification](https://webassembly.github.io/spec/core/)
//! (sections 2.3, 4.3.2 and 5.3.1), including trap-on-NaN truncation, exact
//! IEEE 754 rounding, bit-identical reinterpretation, and byte-exact
//! little-endian constant encoding.

pub mod codec;
pub mod convert;
pub mod types;
pub mod value;

pub use types::ValueType;
pub use value::{RefAddr, Value, V128};

/// Errors produced by value access, conversion, and codec operations.
///
/// Every failure is returned as a value so a surrounding interpreter can
/// turn it into a well-defined Wasm trap. All operations are deterministic;
/// none of these errors are transient.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
    #[error("Invalid conversion: {0}")]
    InvalidConversion(String),
    #[error("Integer overflow")]
    IntegerOverflow,
    #[error("Unexpected end of input")]
    UnexpectedEndOfFile,
    #[error("Invalid value type encoding: 0x{0:02x}")]
    InvalidEncoding(u8),
}

impl ValueError {
    /// Builds a `TypeMismatch` from the expected and actual value types.
    pub(crate) fn type_mismatch(expected: ValueType, actual: ValueType) -> ValueError {
        ValueError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
