//! Directed graph of currencies built from declared exchange rates.
//!
//! Every declared rate is stored as given and paired with a computed inverse
//! edge so that a known rate can be traversed in either direction.

use super::error::ConversionError;
use super::request::RateDeclaration;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use tracing::debug;

/// Decimal places kept on computed inverse rates.
pub const INVERSE_RATE_PRECISION: u32 = 4;

/// A directed conversion: 1 unit of `from` is worth `rate` units of `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, rate: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} @ {}", self.from, self.to, self.rate)
    }
}

/// Rounds half away from zero on the exact binary value, the way fixed-point
/// formatting does, so `2.00005` (stored just below the midpoint) rounds
/// down. Values outside the decimal range are returned as is.
pub fn round_dp(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[derive(Debug, Clone, Default)]
pub struct RateGraph {
    // Declared edges first, then their inverses, both in input order.
    edges: Vec<Edge>,
    declared: usize,
    outbound: HashMap<String, Vec<usize>>,
    sources: Vec<String>,
    currencies: Vec<String>,
    known: HashSet<String>,
}

impl RateGraph {
    /// Builds the graph from declared rates, adding an inverse edge
    /// `(to, from, round(1/rate, 4))` for each one.
    ///
    /// Declarations with an empty `from` are blank input lines and are
    /// skipped. A missing `to` or a rate that is not a strictly positive
    /// finite number is rejected.
    pub fn build(declarations: &[RateDeclaration]) -> Result<Self, ConversionError> {
        let mut forward = Vec::with_capacity(declarations.len());
        let mut inverse = Vec::with_capacity(declarations.len());

        for (index, declaration) in declarations.iter().enumerate() {
            let position = index + 1;
            if declaration.from.is_empty() {
                debug!(position, "Skipping blank rate declaration");
                continue;
            }
            if declaration.to.is_empty() {
                return Err(ConversionError::malformed(
                    position,
                    format!("missing destination currency for {}", declaration.from),
                ));
            }
            if !declaration.rate.is_finite() || declaration.rate <= 0.0 {
                return Err(ConversionError::malformed(
                    position,
                    format!("rate must be a positive number, got {}", declaration.rate),
                ));
            }

            let inverse_rate = round_dp(1.0 / declaration.rate, INVERSE_RATE_PRECISION);
            if inverse_rate <= 0.0 {
                return Err(ConversionError::malformed(
                    position,
                    format!(
                        "inverse of {} rounds to zero at {} decimal places",
                        declaration.rate, INVERSE_RATE_PRECISION
                    ),
                ));
            }

            forward.push(Edge::new(
                declaration.from.as_str(),
                declaration.to.as_str(),
                declaration.rate,
            ));
            inverse.push(Edge::new(
                declaration.to.as_str(),
                declaration.from.as_str(),
                inverse_rate,
            ));
        }

        let mut graph = RateGraph {
            declared: forward.len(),
            ..RateGraph::default()
        };
        for edge in forward.into_iter().chain(inverse) {
            graph.push(edge);
        }
        debug!(
            edges = graph.edges.len(),
            currencies = graph.currencies.len(),
            "Built rate graph"
        );
        Ok(graph)
    }

    fn push(&mut self, edge: Edge) {
        let index = self.edges.len();
        match self.outbound.get_mut(&edge.from) {
            Some(indices) => indices.push(index),
            None => {
                self.outbound.insert(edge.from.clone(), vec![index]);
                self.sources.push(edge.from.clone());
            }
        }
        for currency in [&edge.from, &edge.to] {
            if self.known.insert(currency.clone()) {
                self.currencies.push(currency.clone());
            }
        }
        self.edges.push(edge);
    }

    /// Outbound edges of `currency` in insertion order.
    pub fn neighbors_of<'a>(&'a self, currency: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.outbound
            .get(currency)
            .into_iter()
            .flatten()
            .map(|&index| &self.edges[index])
    }

    /// First edge matching the exact `(from, to)` pair. Parallel edges are
    /// kept, so later declarations of the same pair are never selected here.
    pub fn first_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.neighbors_of(from).find(|edge| edge.to == to)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn declared_edges(&self) -> &[Edge] {
        &self.edges[..self.declared]
    }

    pub fn inverse_edges(&self) -> &[Edge] {
        &self.edges[self.declared..]
    }

    /// Currencies with at least one outbound edge, in first-seen order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Every currency seen as either endpoint, in first-seen order.
    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.known.contains(currency)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
