//! Wiring for the calculator module.

use std::sync::Arc;

use calculator_sdk::CalculatorClientV1;

use crate::config::CalculatorConfig;
use crate::domain::Service;
use crate::local_client::CalculatorLocalClient;

/// Build the calculator service and expose it as a `CalculatorClientV1`.
///
/// # Example
/// ```ignore
/// let client = calculator::local_client(CalculatorConfig::default());
/// let total = client.sum(&[Operand::from(2), Operand::from(3)])?;
/// ```
#[must_use]
pub fn local_client(config: CalculatorConfig) -> Arc<dyn CalculatorClientV1> {
    let service = Arc::new(Service::new(config));
    let client = CalculatorLocalClient::new(service);
    tracing::debug!(
        integer_overflow = ?client.service().config().integer_overflow,
        "CalculatorClientV1 client wired"
    );
    Arc::new(client)
}
