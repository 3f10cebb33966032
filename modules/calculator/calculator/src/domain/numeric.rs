//! Numeric helpers shared by the service operations.

use calculator_sdk::{CalculatorError, Number, Operand, Operation};

use crate::config::OverflowPolicy;

/// Extract the number from `operand`, or fail with `InvalidType`.
pub fn require_number(
    operation: Operation,
    position: usize,
    operand: &Operand,
) -> Result<Number, CalculatorError> {
    operand
        .as_number()
        .ok_or_else(|| CalculatorError::invalid_type(operation, position, operand.kind()))
}

/// Total of `numbers`. Any float makes the total a float.
///
/// Integer totals are accumulated exactly in `i128`; `policy` only applies
/// when the final total does not fit in `i64`, so the result does not depend
/// on operand order.
pub fn total(
    operation: Operation,
    numbers: &[Number],
    policy: OverflowPolicy,
) -> Result<Number, CalculatorError> {
    if numbers.iter().copied().any(Number::is_float) {
        let sum: f64 = numbers.iter().copied().map(Number::as_f64).sum();
        return Ok(Number::Float(sum));
    }

    let exact: i128 = numbers
        .iter()
        .filter_map(|n| match n {
            Number::Int(i) => Some(i128::from(*i)),
            Number::Float(_) => None,
        })
        .sum();

    i64::try_from(exact).map_or_else(
        |_| overflow(operation, exact, policy),
        |fits| Ok(Number::Int(fits)),
    )
}

/// Product of two numbers. Integer pairs stay integral while the product fits in `i64`.
pub fn mul(
    operation: Operation,
    a: Number,
    b: Number,
    policy: OverflowPolicy,
) -> Result<Number, CalculatorError> {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        return x.checked_mul(y).map_or_else(
            || overflow(operation, i128::from(x) * i128::from(y), policy),
            |exact| Ok(Number::Int(exact)),
        );
    }
    Ok(Number::Float(a.as_f64() * b.as_f64()))
}

#[allow(clippy::cast_precision_loss)]
fn overflow(
    operation: Operation,
    exact: i128,
    policy: OverflowPolicy,
) -> Result<Number, CalculatorError> {
    match policy {
        OverflowPolicy::Promote => Ok(Number::Float(exact as f64)),
        OverflowPolicy::Reject => Err(CalculatorError::invalid_input(
            operation,
            format!("integer overflow: {exact} does not fit in i64"),
        )),
    }
}

/// Exact comparison with one; `log` treats only that precise value as out of domain.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_one(x: f64) -> bool {
    x == 1.0
}
