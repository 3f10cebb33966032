//! Domain service for calculator
//!
//! Contains the core business logic for the four calculator operations.
//! Every entry point validates operand types first, then the numeric domain.

use calculator_sdk::{CalculatorError, Number, Operand, Operation};
use tracing::debug;

use super::numeric::{self, require_number};
use crate::config::CalculatorConfig;

/// Domain service that performs calculator operations.
///
/// Stateless apart from its configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Add all values. An empty slice sums to `Int(0)`.
    ///
    /// # Errors
    /// `InvalidType` for the first non-numeric element; `InvalidInput` when the
    /// integer total does not fit in `i64` and the policy is `reject`.
    pub fn sum(&self, values: &[Operand]) -> Result<Number, CalculatorError> {
        let numbers = values
            .iter()
            .enumerate()
            .map(|(position, value)| require_number(Operation::Sum, position, value))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = numbers.len(), "performing summation");

        let total = numeric::total(Operation::Sum, &numbers, self.config.integer_overflow)?;

        debug!(%total, "summation completed");
        Ok(total)
    }

    /// Multiply two numbers.
    ///
    /// # Errors
    /// `InvalidType` if either operand is not a number; `InvalidInput` on
    /// integer overflow when the policy is `reject`.
    pub fn multiply(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        let a = require_number(Operation::Multiply, 0, a)?;
        let b = require_number(Operation::Multiply, 1, b)?;

        debug!(%a, %b, "performing multiplication");
        numeric::mul(Operation::Multiply, a, b, self.config.integer_overflow)
    }

    /// Divide `a` by `b` in floating point.
    ///
    /// # Errors
    /// `InvalidType` if either operand is not a number; `DivisionByZero` if `b` is zero.
    pub fn divide(&self, a: &Operand, b: &Operand) -> Result<f64, CalculatorError> {
        let a = require_number(Operation::Divide, 0, a)?;
        let b = require_number(Operation::Divide, 1, b)?;

        if b.is_zero() {
            return Err(CalculatorError::division_by_zero(Operation::Divide));
        }

        debug!(%a, %b, "performing division");
        Ok(a.as_f64() / b.as_f64())
    }

    /// Logarithm of `value` in `base`, computed as `ln(value) / ln(base)`.
    ///
    /// # Errors
    /// `InvalidType` if either operand is not a number (`value` is checked
    /// first); `InvalidInput` if an operand is NaN, `value <= 0`,
    /// `value == 1`, `base <= 0` or `base == 1`.
    pub fn log(&self, value: &Operand, base: &Operand) -> Result<f64, CalculatorError> {
        let value = require_number(Operation::Log, 0, value)?.as_f64();
        let base = require_number(Operation::Log, 1, base)?.as_f64();

        if value.is_nan() || base.is_nan() {
            return Err(CalculatorError::invalid_input(
                Operation::Log,
                "operands must not be NaN",
            ));
        }
        if base <= 0.0 {
            return Err(CalculatorError::invalid_input(
                Operation::Log,
                format!("base must be positive, got {base}"),
            ));
        }
        if value <= 0.0 {
            return Err(CalculatorError::invalid_input(
                Operation::Log,
                format!("value must be positive, got {value}"),
            ));
        }
        // log(1) is excluded from the domain for every base.
        if numeric::is_one(value) {
            return Err(CalculatorError::invalid_input(
                Operation::Log,
                "value must not be 1",
            ));
        }
        if numeric::is_one(base) {
            return Err(CalculatorError::invalid_input(
                Operation::Log,
                "base must not be 1",
            ));
        }

        debug!(value, base, "computing logarithm");
        Ok(value.ln() / base.ln())
    }
}
