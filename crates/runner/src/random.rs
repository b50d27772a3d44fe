use std::collections::HashSet;

use rand::Rng;

use dc_core::{ContingentEdge, ControllableEdge, DcError, Network};

/// Builds a random STNU for smoke-testing the solver, following the same
/// `rng.random_range` shape the teacher's simulator streamer uses to
/// generate synthetic edges.
///
/// Contingent node pairs are drawn disjoint from each other (no node is
/// reused across contingent edges), which trivially satisfies the
/// no-chaining and at-most-one-incoming-contingent invariants; at most
/// `num_nodes / 2` contingent edges can therefore be produced.
pub fn random_network(
    num_nodes: usize,
    num_controllable: usize,
    num_contingent: usize,
    rng: &mut impl Rng,
) -> Result<Network, DcError> {
    let num_contingent = num_contingent.min(num_nodes / 2);

    let mut node_order: Vec<usize> = (1..=num_nodes).collect();
    for i in (1..node_order.len()).rev() {
        let j = rng.random_range(0..=i);
        node_order.swap(i, j);
    }

    let mut contingent_edges = Vec::with_capacity(num_contingent);
    for pair in node_order[..num_contingent * 2].chunks_exact(2) {
        let lower = rng.random_range(0.0..5.0);
        let upper = lower + rng.random_range(0.0..5.0);
        contingent_edges.push(ContingentEdge {
            from: pair[0],
            to: pair[1],
            lower,
            upper,
        });
    }

    let mut seen_pairs: HashSet<(usize, usize)> = contingent_edges
        .iter()
        .map(|e| (e.from, e.to))
        .collect();
    let mut controllable_edges = Vec::with_capacity(num_controllable);
    let mut attempts = 0;
    while controllable_edges.len() < num_controllable && attempts < num_controllable * 20 {
        attempts += 1;
        let from = rng.random_range(1..=num_nodes);
        let to = rng.random_range(1..=num_nodes);
        if from == to || !seen_pairs.insert((from, to)) {
            continue;
        }
        let lower = rng.random_range(-5.0..5.0);
        let upper = lower + rng.random_range(0.0..10.0);
        controllable_edges.push(ControllableEdge {
            from,
            to,
            lower,
            upper,
        });
    }

    Network::new(num_nodes, controllable_edges, contingent_edges)
}
