//! Domain layer for calculator module
//!
//! Contains the arithmetic and the operand validation.

mod numeric;
pub mod service;

pub use service::Service;
