//! Truthiness of scalar leaves.
//!
//! These scalar values are falsy:
//!
//! | scalar | example |
//! |---|---|
//! | `Undefined` | absent value |
//! | `Null` | `null` |
//! | `Bool(false)` | `false` |
//! | `Integer(0)` | `0` |
//! | `Number(0.0)` | `0.0`, `-0` |
//! | `Number(NaN)` | `NaN` |
//! | `String("")` | `""` |
//!
//! Everything else is truthy, including `"0"`, `"false"`, negative numbers
//! and infinities. Containers are never classified; they always recurse.

use crate::node::Scalar;

/// Whether a scalar is dropped during compaction.
pub fn is_falsy(scalar: &Scalar) -> bool {
    match scalar {
        Scalar::Undefined | Scalar::Null => true,
        Scalar::Bool(b) => !b,
        Scalar::Integer(n) => *n == 0,
        Scalar::Number(n) => *n == 0.0 || n.is_nan(),
        Scalar::String(s) => s.is_empty(),
    }
}

/// Whether a scalar is kept during compaction.
pub fn is_truthy(scalar: &Scalar) -> bool {
    !is_falsy(scalar)
}
