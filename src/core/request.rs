//! Input records consumed by the conversion core.

use super::error::ConversionError;

/// A request to convert `amount` of `source` into `destination`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    source: String,
    amount: f64,
    destination: String,
}

impl ConversionRequest {
    pub fn new(
        source: impl Into<String>,
        amount: f64,
        destination: impl Into<String>,
    ) -> Result<Self, ConversionError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ConversionError::InvalidAmount(amount));
        }
        Ok(Self {
            source: source.into(),
            amount,
            destination: destination.into(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// A declared exchange rate: 1 unit of `from` is worth `rate` units of `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDeclaration {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

impl RateDeclaration {
    pub fn new(from: impl Into<String>, to: impl Into<String>, rate: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }
}
