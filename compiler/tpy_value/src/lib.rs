//! tpy Value - runtime values and errors shared by the evaluator and its hosts.
//!
//! - `Value`: the closed set of runtime values (`Int`, `Float`, `None`)
//! - `ValueArena` / `ValueId`: single owner of every value produced during a run
//! - `EvalError` / `EvalErrorKind`: everything a program can fail with

mod errors;
mod value;

pub use errors::{
    arity_mismatch, division_by_zero, integer_overflow, local_variable_unbound, malformed_node,
    missing_operand_value, name_not_defined, recursion_limit_exceeded, unary_type_mismatch,
    unsupported_operands, EvalError, EvalErrorKind, EvalResult, OperandTypes, ZeroDivision,
};
pub use value::{int_to_f64, Value, ValueArena, ValueId};
