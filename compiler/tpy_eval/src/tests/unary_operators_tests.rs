//! Tests for unary operator implementations.

use crate::unary_operators::evaluate_unary;
use tpy_ir::UnaryOp;
use tpy_value::{EvalErrorKind, OperandTypes, Value};

#[test]
fn test_negation() {
    assert_eq!(evaluate_unary(Value::int(5), UnaryOp::Neg).unwrap(), Value::int(-5));
    assert_eq!(
        evaluate_unary(Value::float(2.5), UnaryOp::Neg).unwrap(),
        Value::float(-2.5)
    );
}

#[test]
fn test_plus_and_invert_are_identity() {
    for op in [UnaryOp::Pos, UnaryOp::Invert] {
        assert_eq!(evaluate_unary(Value::int(-3), op).unwrap(), Value::int(-3));
        assert_eq!(evaluate_unary(Value::float(1.5), op).unwrap(), Value::float(1.5));
    }
}

#[test]
fn test_negating_min_overflows() {
    assert_eq!(
        evaluate_unary(Value::int(i64::MIN), UnaryOp::Neg)
            .unwrap_err()
            .kind,
        EvalErrorKind::IntegerOverflow {
            operation: "negation"
        }
    );
}

#[test]
fn test_none_operand_is_rejected() {
    for op in [UnaryOp::Neg, UnaryOp::Pos, UnaryOp::Invert] {
        let err = evaluate_unary(Value::None, op).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                op: op.as_symbol(),
                operands: OperandTypes::Unary {
                    operand: "NoneType"
                }
            }
        );
    }
    assert_eq!(
        evaluate_unary(Value::None, UnaryOp::Neg).unwrap_err().message,
        "TypeError: bad operand type for unary -: 'NoneType'"
    );
}
