//! Operand and number models for the calculator API.
//!
//! `Operand` mirrors the shape of a JSON value so that anything a caller
//! decodes from a payload can be handed to the calculator as-is; only the
//! `Number` variant passes type validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric value: a 64-bit integer or a double.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The value as a double.
    ///
    /// Integers beyond 2^53 round to the nearest representable double.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns `true` for integer zero and for both signed float zeros.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    #[must_use]
    pub const fn kind(self) -> OperandKind {
        match self {
            Self::Int(_) => OperandKind::Integer,
            Self::Float(_) => OperandKind::Float,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

/// Type tag of an [`Operand`], reported in `InvalidType` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandKind {
    Null,
    Bool,
    Integer,
    Float,
    Text,
    List,
    Map,
}

impl OperandKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "map",
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed calculator argument.
///
/// Booleans are not numbers here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    List(Vec<Operand>),
    Map(BTreeMap<String, Operand>),
}

impl Operand {
    /// The numeric value, if this operand is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> OperandKind {
        match self {
            Self::Null => OperandKind::Null,
            Self::Bool(_) => OperandKind::Bool,
            Self::Number(n) => n.kind(),
            Self::Text(_) => OperandKind::Text,
            Self::List(_) => OperandKind::List,
            Self::Map(_) => OperandKind::Map,
        }
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Operand>> for Operand {
    fn from(value: BTreeMap<String, Operand>) -> Self {
        Self::Map(value)
    }
}
