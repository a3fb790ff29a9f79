//! Binary operator implementations for the evaluator.
//!
//! The value set is closed, so dispatch is a single `match` over the operand
//! pair. `Int op Int` stays integral except for true division; any `Float`
//! operand promotes the other side. Comparisons yield `Int(1)` / `Int(0)`.

use tpy_ir::BinaryOp;
use tpy_value::{
    division_by_zero, int_to_f64, integer_overflow, unsupported_operands, EvalResult, Value,
    ZeroDivision,
};

/// Checked integer arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(a, b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(a, b, op),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(int_to_f64(a), b, op),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(a, int_to_f64(b), op),
        (Value::None, _) | (_, Value::None) => {
            Err(unsupported_operands(op.as_symbol(), &left, &right))
        }
    }
}

/// Binary operations on integers.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero(ZeroDivision::Division));
            }
            Ok(Value::Float(int_to_f64(a) / int_to_f64(b)))
        }
        BinaryOp::FloorDiv => {
            if b == 0 {
                return Err(division_by_zero(ZeroDivision::FloorDivision));
            }
            checked_arith(floor_div(a, b), "floor division")
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(division_by_zero(ZeroDivision::Modulo));
            }
            Ok(Value::Int(floor_mod(a, b)))
        }
        BinaryOp::Pow => int_pow(a, b),
        BinaryOp::Lt => Ok(Value::from_bool(a < b)),
        BinaryOp::Gt => Ok(Value::from_bool(a > b)),
        BinaryOp::Eq => Ok(Value::from_bool(a == b)),
        BinaryOp::GtEq => Ok(Value::from_bool(a >= b)),
        BinaryOp::LtEq => Ok(Value::from_bool(a <= b)),
    }
}

/// Quotient rounded toward negative infinity. `b` must be non-zero.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Remainder carrying the divisor's sign. `b` must be non-zero.
fn floor_mod(a: i64, b: i64) -> i64 {
    // wrapping_rem only wraps for MIN % -1, whose remainder is 0 anyway
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) {
        r + b
    } else {
        r
    }
}

/// `a ** b` on integers; a negative exponent produces a float.
fn int_pow(a: i64, b: i64) -> EvalResult {
    if b < 0 {
        if a == 0 {
            return Err(division_by_zero(ZeroDivision::NegativePower));
        }
        return Ok(Value::Float(int_to_f64(a).powf(int_to_f64(b))));
    }
    let result = match u32::try_from(b) {
        Ok(exp) => a.checked_pow(exp),
        // exponents past u32::MAX only fit for these bases
        Err(_) => match a {
            0 | 1 => Some(a),
            -1 => Some(if b % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    };
    checked_arith(result, "exponentiation")
}

/// Binary operations on floats (either side may have been promoted from int).
#[allow(
    clippy::float_cmp,
    reason = "language equality on floats is exact IEEE comparison"
)]
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero(ZeroDivision::Division));
            }
            a / b
        }
        BinaryOp::FloorDiv => {
            if b == 0.0 {
                return Err(division_by_zero(ZeroDivision::FloorDivision));
            }
            (a / b).floor()
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                return Err(division_by_zero(ZeroDivision::Modulo));
            }
            ((a % b) + b) % b
        }
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(division_by_zero(ZeroDivision::NegativePower));
            }
            a.powf(b)
        }
        BinaryOp::Lt => return Ok(Value::from_bool(a < b)),
        BinaryOp::Gt => return Ok(Value::from_bool(a > b)),
        BinaryOp::Eq => return Ok(Value::from_bool(a == b)),
        BinaryOp::GtEq => return Ok(Value::from_bool(a >= b)),
        BinaryOp::LtEq => return Ok(Value::from_bool(a <= b)),
    };
    Ok(Value::Float(value))
}
