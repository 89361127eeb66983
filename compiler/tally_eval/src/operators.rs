//! Binary operator implementations.
//!
//! Direct enum-based dispatch: the value kinds are a closed set, so every
//! table is an exhaustive `match` and a new variant fails to compile until
//! each table handles it.
//!
//! Operators are pure. They return the result value or the diagnostic the
//! run should terminate with; the engine turns that into push + advance or
//! terminate.
//!
//! `+` is permissive: when the right side is not a number it concatenates.
//! `-`, `*` and `/` are strict and reject strings.

use tally_diagnostic::{
    cannot_divide_by_zero, cannot_use_operator_with_a_string, cannot_use_operator_with_an_array,
    Diagnostic,
};
use tally_ir::{ArithmeticOp, ComparisonOp, Span};

use crate::value::{format_number, Value};

/// Result of an arithmetic operator.
pub type OpResult = Result<Value, Diagnostic>;

/// Evaluate `left <op> right`. `span` is the instruction's source range,
/// used only to build the diagnostic.
pub fn evaluate_arithmetic(left: &Value, op: ArithmeticOp, right: &Value, span: Span) -> OpResult {
    match left {
        Value::Number(n) => eval_number_arithmetic(*n, op, right, span),
        Value::Str(text) => match left.try_convert_to_number() {
            // Only the numeric prefix survives: `"5x" + "y"` is `"5y"`.
            Value::Number(n) => eval_number_arithmetic(n, op, right, span),
            Value::Str(_) | Value::Array(_) => eval_string_arithmetic(text, op, right, span),
        },
        Value::Array(_) => Err(cannot_use_operator_with_an_array(span, op)),
    }
}

/// Evaluate a comparison, producing the language's boolean string.
pub fn evaluate_comparison(left: &Value, op: ComparisonOp, right: &Value) -> Value {
    let result = match op {
        ComparisonOp::Eq => left.is_equal_to(right),
        ComparisonOp::NotEq => !left.is_equal_to(right),
        ComparisonOp::Lt => left.is_less_than(right),
        ComparisonOp::LtEq => left.is_less_than(right) || left.is_equal_to(right),
        ComparisonOp::Gt => left.is_greater_than(right),
        ComparisonOp::GtEq => left.is_greater_than(right) || left.is_equal_to(right),
    };
    Value::boolean(result)
}

/// Number on the left. The right operand is coerced once.
fn eval_number_arithmetic(n: f64, op: ArithmeticOp, right: &Value, span: Span) -> OpResult {
    match right.try_convert_to_number() {
        Value::Str(text) => match op {
            ArithmeticOp::Add => Ok(Value::string(format!("{}{}", format_number(n), text.as_str()))),
            ArithmeticOp::Sub | ArithmeticOp::Mul | ArithmeticOp::Div => {
                Err(cannot_use_operator_with_a_string(span, op))
            }
        },
        Value::Number(m) => eval_float_arithmetic(n, op, m, span),
        Value::Array(_) => Err(cannot_use_operator_with_an_array(span, op)),
    }
}

/// Non-numeric string on the left.
fn eval_string_arithmetic(text: &str, op: ArithmeticOp, right: &Value, span: Span) -> OpResult {
    match (op, right) {
        (_, Value::Array(_)) => Err(cannot_use_operator_with_an_array(span, op)),
        (ArithmeticOp::Add, Value::Number(_) | Value::Str(_)) => {
            Ok(Value::string(format!("{text}{right}")))
        }
        (ArithmeticOp::Sub | ArithmeticOp::Mul | ArithmeticOp::Div, _) => {
            Err(cannot_use_operator_with_a_string(span, op))
        }
    }
}

fn eval_float_arithmetic(a: f64, op: ArithmeticOp, b: f64, span: Span) -> OpResult {
    match op {
        ArithmeticOp::Add => Ok(Value::number(a + b)),
        ArithmeticOp::Sub => Ok(Value::number(a - b)),
        ArithmeticOp::Mul => Ok(Value::number(a * b)),
        ArithmeticOp::Div => {
            if b == 0.0 {
                Err(cannot_divide_by_zero(span))
            } else {
                Ok(Value::number(a / b))
            }
        }
    }
}
