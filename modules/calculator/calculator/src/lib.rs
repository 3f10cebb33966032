//! Calculator Module
//!
//! Sum, multiply, divide and logarithm over dynamically typed operands,
//! with type and domain validation at every entry point.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `config.rs` - Module configuration and loaders
//! - `local_client.rs` - `CalculatorClientV1` implementation over the service
//!
//! External consumers should depend on `calculator-sdk` for the API trait
//! and obtain an implementation through [`local_client`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod local_client;

mod wiring;

pub use config::{CalculatorConfig, ConfigError, OverflowPolicy};
pub use domain::Service;
pub use local_client::CalculatorLocalClient;
pub use wiring::local_client;
