use std::collections::HashMap;

use crate::graph::{EdgeKind, LabeledEdge};
use crate::spfa::{spfa, NegativeCycle};

/// Returned when the simple projection contains a negative cycle: the
/// network cannot be DC regardless of what the lower-case reducer would
/// otherwise find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inconsistent;

/// Builds the simple-edge projection (every edge but lower-case, minimum
/// value kept per `(from, to)`), adds a virtual source `0`, and runs SPFA
/// from it. Returns all `n' + 1` potentials (index `0` included, fixed at
/// `0.0`) so callers can index by original node id without translation.
///
/// Soundness: if the projection has no negative cycle it is consistent, and
/// the returned distances are valid Johnson potentials. The lower-case
/// reducer only ever *removes* edges from this same projection before
/// running Dijkstra on it, and removing edges cannot break the potential
/// property.
pub fn all_max(num_nodes: usize, edges: &[LabeledEdge]) -> Result<Vec<f64>, Inconsistent> {
    let total = num_nodes + 1;
    let mut min_weight: HashMap<(usize, usize), f64> = HashMap::new();

    for e in edges {
        if e.kind == EdgeKind::LowerCase {
            continue;
        }
        min_weight
            .entry((e.from, e.to))
            .and_modify(|w| {
                if e.value < *w {
                    *w = e.value;
                }
            })
            .or_insert(e.value);
    }

    let mut adjacency = vec![Vec::new(); total];
    for (&(from, to), &weight) in &min_weight {
        adjacency[from].push((to, weight));
    }
    for node in 1..total {
        adjacency[0].push((node, 0.0));
    }

    match spfa(total, 0, &adjacency) {
        Ok(distances) => Ok(distances),
        Err(NegativeCycle) => Err(Inconsistent),
    }
}
