//! Errors raised while building the rate graph or resolving a conversion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Malformed rate declaration #{position}: {reason}")]
    MalformedRate { position: usize, reason: String },

    #[error("No conversion path from {from} to {to}")]
    UnreachableCurrency { from: String, to: String },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid amount: {0} (must be finite and non-negative)")]
    InvalidAmount(f64),
}

impl ConversionError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        ConversionError::MalformedRate {
            position,
            reason: reason.into(),
        }
    }

    /// True when no rate chain connects the two currencies. An unknown
    /// currency is the degenerate case of this.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            ConversionError::UnreachableCurrency { .. } | ConversionError::UnknownCurrency(_)
        )
    }
}
