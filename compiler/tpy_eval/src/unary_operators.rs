//! Unary operator implementations for the evaluator.
//!
//! `-` negates, `+` and `~` pass numbers through unchanged. `None` rejects
//! all three.

use tpy_ir::UnaryOp;
use tpy_value::{integer_overflow, unary_type_mismatch, EvalResult, Value};

/// Evaluate `op value`.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (Value::Int(_) | Value::Float(_), UnaryOp::Pos | UnaryOp::Invert) => Ok(value),
        (Value::None, _) => Err(unary_type_mismatch(op.as_symbol(), &value)),
    }
}
