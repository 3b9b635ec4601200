//! Rebuilds the edge sequence of a resolved conversion.

use super::error::ConversionError;
use super::graph::{Edge, RateGraph};
use super::resolver::SearchState;
use tracing::{debug, trace};

/// Edges of a conversion, ordered from the destination side back to the
/// origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionPath {
    edges: Vec<Edge>,
}

impl ConversionPath {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Product of all edge rates; 1 for an empty path.
    pub fn multiplier(&self) -> f64 {
        self.edges.iter().fold(1.0, |acc, edge| acc * edge.rate)
    }

    /// Currencies in conversion order, origin first.
    pub fn currencies(&self) -> Vec<&str> {
        let mut currencies: Vec<&str> = self.edges.iter().map(|e| e.to.as_str()).collect();
        if let Some(last) = self.edges.last() {
            currencies.push(last.from.as_str());
        }
        currencies.reverse();
        currencies
    }
}

/// Walks the predecessor chain from `destination` back to the search origin,
/// taking the first edge of each `(predecessor, current)` pair.
pub fn reconstruct(
    state: &SearchState,
    graph: &RateGraph,
    destination: &str,
) -> Result<ConversionPath, ConversionError> {
    let unreachable = || ConversionError::UnreachableCurrency {
        from: state.origin().to_string(),
        to: destination.to_string(),
    };

    let mut edges = Vec::new();
    let mut current = destination;
    while let Some(before) = state.predecessor(current) {
        let edge = graph.first_edge(before, current).ok_or_else(unreachable)?;
        trace!(%edge, "Path step");
        edges.push(edge.clone());
        current = before;
    }

    if current != state.origin() {
        debug!(destination, stopped_at = current, "Predecessor chain broken");
        return Err(unreachable());
    }

    let path = ConversionPath::new(edges);
    debug!(hops = path.hops(), multiplier = path.multiplier(), "Reconstructed path");
    Ok(path)
}
