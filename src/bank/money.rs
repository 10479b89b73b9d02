use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Currency amount. Plain floating point, no precision guarantees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            return Err(MoneyError::Parse("Empty amount", string.to_string()));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| MoneyError::Parse("Not a number", string.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyError::Parse("Not a finite number", string.to_string()));
        }

        return Ok(Money(value));
    }

    /// Parses a stored amount. Unlike `parse`, infinite and NaN values are
    /// accepted, since a balance can overflow through repeated deposits.
    pub fn parse_stored(string: &str) -> Result<Self, MoneyError> {
        return string
            .trim()
            .parse()
            .map(Money)
            .map_err(|_| MoneyError::Parse("Not a number", string.to_string()));
    }

    pub fn add(&mut self, other: &Self) {
        self.0 += other.0;
    }

    pub fn sub(&mut self, other: &Self) {
        self.0 -= other.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return serializer.collect_str(self);
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        return Money::parse_stored(&string).map_err(de::Error::custom);
    }
}
