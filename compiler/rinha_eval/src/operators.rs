//! Binary operator implementations for the evaluator.
//!
//! Operands arrive already evaluated (left before right, both always).
//! Dispatch is on the operator first, then on operand shapes, because the
//! coercion rule belongs to the operator:
//!
//! - `+`: int/int adds; any mix of int and str concatenates in operand order
//! - `- * / %` and `< > <= >=`: both operands must be ints
//! - `== !=`: compare rendered text, so values of different variants can be
//!   equal (`1 == "1"`)
//! - `&& ||`: truthiness of both sides, no short-circuit

use num_bigint::BigInt;
use num_traits::Zero;
use rinha_ir::BinaryOp;

use crate::errors::{division_by_zero, type_mismatch};
use crate::{EvalResult, Value};

/// Evaluate a binary operation using direct pattern matching.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => {
            let (a, b) = coerce_ints(left, right, op)?;
            Ok(Value::int(a - b))
        }
        BinaryOp::Mul => {
            let (a, b) = coerce_ints(left, right, op)?;
            Ok(Value::int(a * b))
        }
        BinaryOp::Div => {
            let (a, b) = coerce_ints(left, right, op)?;
            checked_div(a, b, |a, b| a / b)
        }
        BinaryOp::Rem => {
            let (a, b) = coerce_ints(left, right, op)?;
            checked_div(a, b, |a, b| a % b)
        }
        BinaryOp::Eq => Ok(Value::Bool(left.render_eq(right))),
        BinaryOp::Neq => Ok(Value::Bool(!left.render_eq(right))),
        BinaryOp::Lt => {
            let (a, b) = coerce_ints(left, right, op)?;
            Ok(Value::Bool(a < b))
        }
        BinaryOp::Gt => {
            let (a, b) = coerce_ints(left, right, op)?;
            Ok(Value::Bool(a > b))
        }
        BinaryOp::Lte => {
            let (a, b) = coerce_ints(left, right, op)?;
            Ok(Value::Bool(a <= b))
        }
        BinaryOp::Gte => {
            let (a, b) = coerce_ints(left, right, op)?;
            Ok(Value::Bool(a >= b))
        }
        BinaryOp::And => {
            let (a, b) = coerce_bools(left, right, op)?;
            Ok(Value::Bool(a && b))
        }
        BinaryOp::Or => {
            let (a, b) = coerce_bools(left, right, op)?;
            Ok(Value::Bool(a || b))
        }
    }
}

// Coercions

/// Require both operands to be integers.
fn coerce_ints<'v>(
    left: &'v Value,
    right: &'v Value,
    op: BinaryOp,
) -> Result<(&'v BigInt, &'v BigInt), crate::EvalError> {
    let a = left
        .as_int()
        .ok_or_else(|| type_mismatch(operation_name(op), "int", left))?;
    let b = right
        .as_int()
        .ok_or_else(|| type_mismatch(operation_name(op), "int", right))?;
    Ok((a, b))
}

/// Read both operands as booleans via truthiness.
fn coerce_bools(left: &Value, right: &Value, op: BinaryOp) -> Result<(bool, bool), crate::EvalError> {
    let a = left
        .is_truthy()
        .ok_or_else(|| type_mismatch(operation_name(op), "int, str or bool", left))?;
    let b = right
        .is_truthy()
        .ok_or_else(|| type_mismatch(operation_name(op), "int, str or bool", right))?;
    Ok((a, b))
}

fn operation_name(op: BinaryOp) -> String {
    format!("`{}`", op.as_symbol())
}

// Operator families

/// `+` on ints and strings.
fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::int(&**a + &**b)),
        (Value::Int(a), Value::Str(b)) => Ok(Value::string(format!("{}{}", &**a, &**b))),
        (Value::Str(a), Value::Int(b)) => Ok(Value::string(format!("{}{}", &**a, &**b))),
        (Value::Str(a), Value::Str(b)) => Ok(Value::string(format!("{}{}", &**a, &**b))),
        (Value::Int(_) | Value::Str(_), other) | (other, _) => {
            Err(type_mismatch(operation_name(BinaryOp::Add), "int or str", other))
        }
    }
}

/// Division with zero guard.
///
/// `/` and `%` truncate toward zero, so `-7 / 2 == -3` and `-7 % 2 == -1`.
#[inline]
fn checked_div(a: &BigInt, b: &BigInt, op: fn(&BigInt, &BigInt) -> BigInt) -> EvalResult {
    if b.is_zero() {
        Err(division_by_zero())
    } else {
        Ok(Value::int(op(a, b)))
    }
}
