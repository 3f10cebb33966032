//! Local client implementing the `CalculatorClientV1` trait.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError, Number, Operand};

use crate::domain::Service;

/// Local client for the calculator module.
///
/// Delegates every call to the domain [`Service`].
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub const fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn sum(&self, values: &[Operand]) -> Result<Number, CalculatorError> {
        self.service.sum(values)
    }

    fn multiply(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: &Operand, b: &Operand) -> Result<f64, CalculatorError> {
        self.service.divide(a, b)
    }

    fn log(&self, value: &Operand, base: &Operand) -> Result<f64, CalculatorError> {
        self.service.log(value, base)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::{CalculatorConfig, OverflowPolicy};

    fn create_client(config: CalculatorConfig) -> CalculatorLocalClient {
        CalculatorLocalClient::new(Arc::new(Service::new(config)))
    }

    #[test]
    fn test_delegates_to_service() {
        let client = create_client(CalculatorConfig::default());

        let total = client
            .sum(&[Operand::from(1), Operand::from(2), Operand::from(3)])
            .unwrap();
        assert_eq!(total, Number::Int(6));

        let product = client
            .multiply(&Operand::from(4), &Operand::from(5))
            .unwrap();
        assert_eq!(product, Number::Int(20));

        let quotient = client
            .divide(&Operand::from(9), &Operand::from(3))
            .unwrap();
        assert!((quotient - 3.0).abs() < 1e-12);

        let exponent = client.log(&Operand::from(8), &Operand::from(2)).unwrap();
        assert!((exponent - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_uses_service_config() {
        let client = create_client(CalculatorConfig {
            integer_overflow: OverflowPolicy::Reject,
        });
        assert_eq!(
            client.service().config().integer_overflow,
            OverflowPolicy::Reject
        );

        let err = client
            .multiply(&Operand::from(i64::MAX), &Operand::from(2))
            .unwrap_err();
        assert!(err.is_domain_error());
    }
}
