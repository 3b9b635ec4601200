//! Applies a resolved rate chain to the requested amount.

use super::error::ConversionError;
use super::graph::{RateGraph, round_dp};
use super::path::{ConversionPath, reconstruct};
use super::request::ConversionRequest;
use super::resolver::{SearchState, resolve};
use tracing::{debug, info};

/// Converts `amount` using the composed rate of `path`.
pub fn compute(amount: f64, path: &ConversionPath) -> f64 {
    amount * path.multiplier()
}

/// Outcome of a conversion along with the search byproducts.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub request: ConversionRequest,
    /// `None` when source and destination are the same currency.
    pub search: Option<SearchState>,
    pub path: ConversionPath,
    pub multiplier: f64,
    pub amount: f64,
}

impl Conversion {
    pub fn rounded_amount(&self, places: u32) -> f64 {
        round_dp(self.amount, places)
    }
}

/// Resolves the fewest-hop rate chain for `request` and applies it.
pub fn convert(
    graph: &RateGraph,
    request: &ConversionRequest,
) -> Result<Conversion, ConversionError> {
    let (source, destination) = (request.source(), request.destination());

    if source == destination {
        debug!(currency = source, "Same currency, nothing to resolve");
        return Ok(Conversion {
            request: request.clone(),
            search: None,
            path: ConversionPath::default(),
            multiplier: 1.0,
            amount: request.amount(),
        });
    }

    for currency in [source, destination] {
        if !graph.contains(currency) {
            return Err(ConversionError::UnknownCurrency(currency.to_string()));
        }
    }

    let search = resolve(graph, source);
    let path = reconstruct(&search, graph, destination)?;
    let multiplier = path.multiplier();
    let amount = compute(request.amount(), &path);

    info!(
        source,
        destination,
        hops = path.hops(),
        multiplier,
        amount,
        "Converted amount"
    );

    Ok(Conversion {
        request: request.clone(),
        search: Some(search),
        path,
        multiplier,
        amount,
    })
}
