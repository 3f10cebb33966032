//! `CalculatorClientV1` trait definition.
//!
//! This trait defines the public API for the `calculator` module.

use crate::error::CalculatorError;
use crate::models::{Number, Operand};

/// Public API trait for the `calculator` module.
///
/// Arguments are taken as [`Operand`]s so that callers holding loosely typed
/// values (decoded JSON, user input) get a typed [`CalculatorError::InvalidType`]
/// instead of a panic or a silent coercion.
///
/// ```ignore
/// let client = calculator::local_client(CalculatorConfig::default());
/// let quotient = client.divide(&Operand::from(7), &Operand::from(2))?;
/// ```
pub trait CalculatorClientV1: Send + Sync {
    /// Add all `values` together. An empty slice sums to integer zero.
    ///
    /// # Errors
    ///
    /// * `InvalidType` - If any element is not a number
    /// * `InvalidInput` - If integer overflow is configured to be rejected
    fn sum(&self, values: &[Operand]) -> Result<Number, CalculatorError>;

    /// Multiply `a` by `b`.
    ///
    /// # Errors
    ///
    /// * `InvalidType` - If either operand is not a number
    /// * `InvalidInput` - If integer overflow is configured to be rejected
    fn multiply(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError>;

    /// Divide `a` by `b` using floating-point division.
    ///
    /// Dividing two infinities yields NaN rather than an error.
    ///
    /// # Errors
    ///
    /// * `InvalidType` - If either operand is not a number
    /// * `DivisionByZero` - If `b` is zero
    fn divide(&self, a: &Operand, b: &Operand) -> Result<f64, CalculatorError>;

    /// Logarithm of `value` in the given `base`.
    ///
    /// # Errors
    ///
    /// * `InvalidType` - If either operand is not a number
    /// * `InvalidInput` - If `value <= 0`, `value == 1`, `base <= 0` or `base == 1`
    fn log(&self, value: &Operand, base: &Operand) -> Result<f64, CalculatorError>;
}
