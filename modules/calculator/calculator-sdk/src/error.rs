//! Error types for the calculator module.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::OperandKind;

/// The calculator operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sum,
    Multiply,
    Divide,
    Log,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the calculator API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// An operand is not a number.
    #[error("{operation}: argument {position} must be a number, got {found}")]
    InvalidType {
        operation: Operation,
        /// Zero-based position of the offending argument.
        position: usize,
        found: OperandKind,
    },

    /// Numeric operands lie outside the operation's domain.
    #[error("{operation}: invalid input: {reason}")]
    InvalidInput {
        operation: Operation,
        reason: String,
    },

    /// The divisor is zero.
    #[error("{operation}: division by zero")]
    DivisionByZero { operation: Operation },
}

impl CalculatorError {
    /// Creates an `InvalidType` error.
    #[must_use]
    pub const fn invalid_type(operation: Operation, position: usize, found: OperandKind) -> Self {
        Self::InvalidType {
            operation,
            position,
            found,
        }
    }

    /// Creates an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(operation: Operation, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub const fn division_by_zero(operation: Operation) -> Self {
        Self::DivisionByZero { operation }
    }

    /// The operation that failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::InvalidType { operation, .. }
            | Self::InvalidInput { operation, .. }
            | Self::DivisionByZero { operation } => *operation,
        }
    }

    /// Returns `true` if an operand had the wrong type.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }

    /// Returns `true` if numeric operands were outside the operation's domain.
    /// Division by zero counts as a domain error.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::DivisionByZero { .. })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = CalculatorError::invalid_type(Operation::Sum, 1, OperandKind::Text);
        assert!(matches!(
            err,
            CalculatorError::InvalidType {
                operation: Operation::Sum,
                position: 1,
                found: OperandKind::Text,
            }
        ));

        let err = CalculatorError::invalid_input(Operation::Log, "base must be positive");
        assert!(matches!(err, CalculatorError::InvalidInput { .. }));

        let err = CalculatorError::division_by_zero(Operation::Divide);
        assert_eq!(err.operation(), Operation::Divide);
    }

    #[test]
    fn test_error_classification() {
        let type_err = CalculatorError::invalid_type(Operation::Log, 0, OperandKind::Null);
        assert!(type_err.is_type_error());
        assert!(!type_err.is_domain_error());

        let domain_err = CalculatorError::invalid_input(Operation::Log, "value must not be 1");
        assert!(domain_err.is_domain_error());
        assert!(!domain_err.is_type_error());

        let zero_err = CalculatorError::division_by_zero(Operation::Divide);
        assert!(zero_err.is_domain_error());
        assert!(!zero_err.is_type_error());
    }

    #[test]
    fn test_error_display() {
        let err = CalculatorError::invalid_type(Operation::Multiply, 0, OperandKind::Map);
        assert_eq!(
            err.to_string(),
            "multiply: argument 0 must be a number, got map"
        );

        let err = CalculatorError::invalid_input(Operation::Log, "value must be positive");
        assert_eq!(err.to_string(), "log: invalid input: value must be positive");

        let err = CalculatorError::division_by_zero(Operation::Divide);
        assert_eq!(err.to_string(), "divide: division by zero");
    }

    #[test]
    fn test_operation_serde_name() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
    }
}
