use fxpath::core::{
    ConversionRequest, Edge, RateDeclaration, RateGraph, convert, reconstruct, resolve, round_dp,
};
use proptest::prelude::*;
use std::collections::HashSet;

const POOL: [&str; 7] = ["EUR", "USD", "JPY", "CHF", "GBP", "AUD", "CAD"];

fn arb_currency() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(POOL.to_vec())
}

/// A rate between two distinct currencies of the pool.
fn arb_declaration() -> impl Strategy<Value = RateDeclaration> {
    (arb_currency(), arb_currency(), 0.1f64..10.0)
        .prop_filter("distinct endpoints", |(from, to, _)| from != to)
        .prop_map(|(from, to, rate)| RateDeclaration::new(from, to, rate))
}

fn arb_declarations() -> impl Strategy<Value = Vec<RateDeclaration>> {
    proptest::collection::vec(arb_declaration(), 1..=8)
}

/// Fewest edges over every simple path, by exhaustive search.
fn brute_force_hops(graph: &RateGraph, from: &str, to: &str) -> Option<usize> {
    fn walk<'a>(
        graph: &'a RateGraph,
        current: &'a str,
        to: &str,
        visited: &mut HashSet<&'a str>,
        depth: usize,
        best: &mut Option<usize>,
    ) {
        if current == to {
            *best = Some(best.map_or(depth, |b| b.min(depth)));
            return;
        }
        for edge in graph.edges().iter().filter(|e| e.from == current) {
            if visited.insert(edge.to.as_str()) {
                walk(graph, &edge.to, to, visited, depth + 1, best);
                visited.remove(edge.to.as_str());
            }
        }
    }

    let mut best = None;
    let mut visited = HashSet::from([from]);
    walk(graph, from, to, &mut visited, 0, &mut best);
    best
}

fn assert_chains(path: &[Edge], from: &str, to: &str) {
    let mut current = from;
    for edge in path.iter().rev() {
        assert_eq!(edge.from, current);
        current = edge.to.as_str();
    }
    assert_eq!(current, to);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_path_has_fewest_hops(declarations in arb_declarations()) {
        let graph = RateGraph::build(&declarations).unwrap();

        for origin in graph.currencies() {
            let state = resolve(&graph, origin);
            for destination in graph.currencies() {
                let expected = brute_force_hops(&graph, origin, destination);
                match reconstruct(&state, &graph, destination) {
                    Ok(path) => {
                        prop_assert_eq!(Some(path.hops()), expected, "{} -> {}", origin, destination);
                        prop_assert_eq!(state.hops(destination), expected);
                        assert_chains(path.edges(), origin, destination);
                    }
                    Err(err) => {
                        prop_assert!(err.is_unreachable());
                        prop_assert_eq!(expected, None, "{} -> {}", origin, destination);
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_declaration_has_rounded_inverse(declarations in arb_declarations()) {
        let graph = RateGraph::build(&declarations).unwrap();
        for declaration in &declarations {
            let expected = round_dp(1.0 / declaration.rate, 4);
            prop_assert!(
                graph.inverse_edges().iter().any(|e| e.from == declaration.to
                    && e.to == declaration.from
                    && e.rate == expected),
                "missing inverse of {:?}",
                declaration
            );
        }
    }

    #[test]
    fn test_multiplier_independent_of_composition_order(declarations in arb_declarations()) {
        let graph = RateGraph::build(&declarations).unwrap();
        let origin = &graph.currencies()[0];
        let state = resolve(&graph, origin);
        for destination in graph.currencies() {
            if let Ok(path) = reconstruct(&state, &graph, destination) {
                let traversal_order = path
                    .edges()
                    .iter()
                    .rev()
                    .fold(1.0, |acc, edge| acc * edge.rate);
                let relative = (path.multiplier() - traversal_order).abs() / traversal_order;
                prop_assert!(relative < 1e-12);
            }
        }
    }
}

#[test]
fn test_same_hop_alternatives_pick_one_of_them() {
    // EUR reaches GBP in two hops through either CHF or USD.
    let graph = RateGraph::build(&[
        RateDeclaration::new("EUR", "CHF", 0.95),
        RateDeclaration::new("CHF", "GBP", 0.9),
        RateDeclaration::new("EUR", "USD", 1.1),
        RateDeclaration::new("USD", "GBP", 0.78),
    ])
    .unwrap();
    let request = ConversionRequest::new("EUR", 10.0, "GBP").unwrap();
    let conversion = convert(&graph, &request).unwrap();

    assert_eq!(conversion.path.hops(), 2);
    let via = conversion.path.currencies()[1];
    assert!(via == "CHF" || via == "USD", "unexpected route via {via}");
}

#[test]
fn test_same_currency_needs_no_graph() {
    let graph = RateGraph::build(&[]).unwrap();
    let request = ConversionRequest::new("CHF", 7.5, "CHF").unwrap();
    let conversion = convert(&graph, &request).unwrap();

    assert_eq!(conversion.multiplier, 1.0);
    assert!(conversion.path.is_empty());
    assert_eq!(conversion.amount, 7.5);
}
