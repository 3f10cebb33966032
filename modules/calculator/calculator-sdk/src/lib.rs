//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//! - `CalculatorClientV1` trait for `sum`, `multiply`, `divide` and `log`
//! - `Operand` and `Number` models for dynamically typed arguments
//! - `CalculatorError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operand};
//!
//! let client = calculator::local_client(CalculatorConfig::default());
//! let total = client.sum(&[Operand::from(2), Operand::from(3)])?;
//! let bits = client.log(&Operand::from(1024), &Operand::from(2))?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::CalculatorClientV1;
pub use error::{CalculatorError, Operation};
pub use models::{Number, Operand, OperandKind};
