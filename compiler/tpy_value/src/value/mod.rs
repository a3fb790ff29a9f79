//! Runtime values.
//!
//! `Value` is `Copy` and immutable: every operation produces a fresh value.
//! Arithmetic lives in the evaluator (`tpy_eval::evaluate_binary`); this module
//! only knows how to name, test and render a value.

mod arena;

use std::fmt;

pub use arena::{ValueArena, ValueId};

/// A runtime value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    /// Machine integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// The `None` value.
    None,
}

impl Value {
    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Boolean surrogate produced by comparisons: `1` or `0`.
    #[inline]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Value::Int(1)
        } else {
            Value::Int(0)
        }
    }

    /// Type name as shown in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::None => "NoneType",
        }
    }

    /// Numbers are false only when zero; `None` is always false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::None => false,
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

/// Widen an integer operand for mixed int/float arithmetic.
#[inline]
#[expect(
    clippy::cast_precision_loss,
    reason = "int/float promotion rounds exactly like the language's float arithmetic"
)]
pub fn int_to_f64(n: i64) -> f64 {
    n as f64
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::None => write!(f, "None"),
        }
    }
}

/// Whole floats keep a trailing `.0`; everything else uses the shortest
/// round-trip form.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x < 0.0 { "-inf" } else { "inf" })
    } else if x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}
