use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use common::types::{NodeId, INFINITY};

use crate::graph::{EdgeKind, LabeledEdge};
use crate::reduce::reduce;

/// Priority queue entry for the Dijkstra traversal: ordered by reweighted
/// distance, ties broken by ascending node id so output is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueEntry {
    dist: f64,
    node: NodeId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Given current edges and AllMax potentials, runs Dijkstra from `lc_edge.to`
/// over the breach-filtered subgraph and emits one new labeled edge per
/// discovered moat (spec.md §4.F).
///
/// The breach filter drops every lower-case edge and every upper-case edge
/// whose letter equals `lc_edge`'s letter — Morris's terminology for the
/// node a contingent interval is "about", which a semi-reducible path may
/// not pass back through.
pub fn reduce_lower_case(
    num_nodes: usize,
    edges: &[LabeledEdge],
    potentials: &[f64],
    lc_edge: &LabeledEdge,
) -> Vec<LabeledEdge> {
    let lc_letter = lc_edge.letter;
    let total = num_nodes + 1;

    let mut outgoing: Vec<Vec<&LabeledEdge>> = vec![Vec::new(); total];
    for e in edges {
        let breached = e.kind == EdgeKind::LowerCase
            || (e.kind == EdgeKind::UpperCase && e.letter == lc_letter);
        if breached {
            continue;
        }
        outgoing[e.from].push(e);
    }

    let source = lc_edge.to;
    let mut dist = vec![INFINITY; total];
    let mut reduced_edge: Vec<Option<LabeledEdge>> = vec![None; total];
    let mut visited = vec![false; total];

    dist[source] = 0.0;
    let mut queue = BinaryHeap::new();
    queue.push(Reverse(QueueEntry {
        dist: 0.0,
        node: source,
    }));

    let mut new_edges: Vec<LabeledEdge> = Vec::new();
    let mut seen_keys = HashSet::new();

    while let Some(Reverse(entry)) = queue.pop() {
        let node = entry.node;
        if visited[node] {
            continue;
        }
        visited[node] = true;

        for &edge in &outgoing[node] {
            let neighbor = edge.to;
            let reweighted = edge.value + potentials[edge.from] - potentials[edge.to];
            let tentative = dist[node] + reweighted;

            if tentative < dist[neighbor] {
                let folded = match &reduced_edge[node] {
                    None => Some(*edge),
                    Some(prefix) => reduce(prefix, edge),
                };
                let Some(folded) = folded else {
                    continue;
                };

                dist[neighbor] = tentative;
                reduced_edge[neighbor] = Some(folded);
                queue.push(Reverse(QueueEntry {
                    dist: tentative,
                    node: neighbor,
                }));

                let real = tentative + potentials[neighbor] - potentials[source];
                if real < 0.0 {
                    if let Some(moat) = reduce(lc_edge, &folded) {
                        if seen_keys.insert(moat.dedup_key()) {
                            new_edges.push(moat);
                        }
                    }
                }
            }
        }
    }

    new_edges
}
