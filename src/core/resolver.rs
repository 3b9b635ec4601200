//! Fewest-hop search over the rate graph.
//!
//! Dijkstra's relaxation loop with every edge weighing one hop. Only
//! currencies with outbound edges are seeded into the frontier, and the
//! search always runs to completion rather than stopping at a target.

use super::graph::RateGraph;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Distances and predecessors computed from one origin.
#[derive(Debug, Clone)]
pub struct SearchState {
    origin: String,
    // Currencies missing from `distance` are unreached.
    distance: HashMap<String, usize>,
    predecessor: HashMap<String, String>,
}

impl SearchState {
    fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            distance: HashMap::from([(origin.to_string(), 0)]),
            predecessor: HashMap::new(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Hop count from the origin, or `None` when unreached.
    pub fn hops(&self, currency: &str) -> Option<usize> {
        self.distance.get(currency).copied()
    }

    pub fn predecessor(&self, currency: &str) -> Option<&str> {
        self.predecessor.get(currency).map(String::as_str)
    }

    pub fn is_reached(&self, currency: &str) -> bool {
        self.distance.contains_key(currency)
    }

    /// Reached currencies with their hop counts.
    pub fn distances(&self) -> impl Iterator<Item = (&str, usize)> {
        self.distance.iter().map(|(c, d)| (c.as_str(), *d))
    }

    /// `(currency, reached_from)` pairs.
    pub fn predecessors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.predecessor
            .iter()
            .map(|(c, p)| (c.as_str(), p.as_str()))
    }
}

/// Computes hop distances from `origin` to every currency of `graph`.
///
/// An origin without outbound edges is never picked from the frontier, so
/// every other currency stays unreached.
pub fn resolve(graph: &RateGraph, origin: &str) -> SearchState {
    let mut state = SearchState::new(origin);
    let mut frontier: Vec<&str> = graph.sources().iter().map(String::as_str).collect();

    debug!(origin, frontier = frontier.len(), "Resolving shortest hops");

    // First seeded currency wins among equal distances.
    while let Some(position) = frontier
        .iter()
        .enumerate()
        .min_by_key(|(_, currency)| state.hops(currency).unwrap_or(usize::MAX))
        .map(|(position, _)| position)
    {
        let nearest = frontier.remove(position);

        let Some(base) = state.hops(nearest) else {
            trace!(currency = nearest, "Picked unreached currency");
            continue;
        };
        trace!(currency = nearest, hops = base, "Picked currency");

        for edge in graph.neighbors_of(nearest) {
            let alt = base + 1;
            if state.hops(&edge.to).is_none_or(|current| alt < current) {
                trace!(from = nearest, to = %edge.to, hops = alt, "Relaxed");
                state.distance.insert(edge.to.clone(), alt);
                state
                    .predecessor
                    .insert(edge.to.clone(), nearest.to_string());
            }
        }
    }

    debug!(reached = state.distance.len(), "Resolution complete");
    state
}
