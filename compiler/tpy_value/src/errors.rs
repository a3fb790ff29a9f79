//! Error types for evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories so hosts and tests can
//! match on what went wrong instead of parsing strings. Factory functions
//! (e.g., `division_by_zero()`) are the public construction API; they
//! populate both `kind` and `message`.
//!
//! Messages use the Python exception names users of the language expect
//! (`NameError`, `TypeError`, ...).

use std::fmt;

use crate::Value;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Why a division-like operation hit zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZeroDivision {
    /// `x / 0`
    Division,
    /// `x // 0`
    FloorDivision,
    /// `x % 0`
    Modulo,
    /// `0 ** -n`
    NegativePower,
}

/// Operand types involved in a type mismatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandTypes {
    /// A binary operator rejected `left op right`.
    Binary {
        left: &'static str,
        right: &'static str,
    },
    /// A unary operator rejected its operand.
    Unary { operand: &'static str },
    /// An operand node evaluated to no value at all (e.g. a `print`).
    Missing,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Identifier not bound in any active frame.
    NameNotDefined { name: String },
    /// Identifier is local to the running block but its assignment has not run yet.
    LocalVariableUnbound { name: String },
    /// Arithmetic or comparison on operands that do not support it.
    TypeMismatch {
        op: &'static str,
        operands: OperandTypes,
    },
    DivisionByZero { cause: ZeroDivision },
    IntegerOverflow { operation: &'static str },
    /// Call argument count differs from the declared parameter count.
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// Frame stack would grow past the configured limit.
    RecursionLimitExceeded { limit: usize },
    /// A structurally required child slot is empty or has the wrong kind.
    MalformedNode { detail: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameNotDefined { name } => write!(f, "NameError: name '{name}' is not defined"),
            Self::LocalVariableUnbound { name } => write!(
                f,
                "UnboundLocalError: local variable '{name}' referenced before assignment"
            ),
            Self::TypeMismatch { op, operands } => match operands {
                OperandTypes::Binary { left, right } => write!(
                    f,
                    "TypeError: unsupported operand type(s) for {op}: '{left}' and '{right}'"
                ),
                OperandTypes::Unary { operand } => {
                    write!(f, "TypeError: bad operand type for unary {op}: '{operand}'")
                }
                OperandTypes::Missing => {
                    write!(f, "TypeError: operand of '{op}' produced no value")
                }
            },
            Self::DivisionByZero { cause } => match cause {
                ZeroDivision::Division => write!(f, "ZeroDivisionError: division by zero"),
                ZeroDivision::FloorDivision => {
                    write!(f, "ZeroDivisionError: integer division by zero")
                }
                ZeroDivision::Modulo => write!(f, "ZeroDivisionError: modulo by zero"),
                ZeroDivision::NegativePower => write!(
                    f,
                    "ZeroDivisionError: 0 cannot be raised to a negative power"
                ),
            },
            Self::IntegerOverflow { operation } => {
                write!(f, "OverflowError: integer overflow in {operation}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(
                    f,
                    "TypeError: {name}() takes exactly {expected} {arg_word} ({got} given)"
                )
            }
            Self::RecursionLimitExceeded { limit } => write!(
                f,
                "RecursionError: maximum recursion depth exceeded (limit: {limit})"
            ),
            Self::MalformedNode { detail } => write!(f, "MalformedNode: {detail}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Factory functions

#[cold]
pub fn name_not_defined(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NameNotDefined {
        name: name.to_string(),
    })
}

#[cold]
pub fn local_variable_unbound(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LocalVariableUnbound {
        name: name.to_string(),
    })
}

/// `left op right` is not defined for these operand types.
#[cold]
pub fn unsupported_operands(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op,
        operands: OperandTypes::Binary {
            left: left.type_name(),
            right: right.type_name(),
        },
    })
}

/// `op operand` is not defined for this operand type.
#[cold]
pub fn unary_type_mismatch(op: &'static str, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op,
        operands: OperandTypes::Unary {
            operand: operand.type_name(),
        },
    })
}

/// An operand expression of `op` evaluated to no value.
#[cold]
pub fn missing_operand_value(op: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        op,
        operands: OperandTypes::Missing,
    })
}

#[cold]
pub fn division_by_zero(cause: ZeroDivision) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero { cause })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimitExceeded { limit })
}

#[cold]
pub fn malformed_node(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedNode {
        detail: detail.into(),
    })
}
