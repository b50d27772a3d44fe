use std::collections::VecDeque;

use common::types::{NodeId, INFINITY};

/// Signals that relaxation did not terminate within the hop bound, i.e. a
/// negative cycle is reachable from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeCycle;

/// Shortest-Paths-Faster-Algorithm: Bellman-Ford-Moore with a FIFO queue and
/// an in-queue bit, following the teacher's `SPFASolver` shape but working
/// over a plain adjacency list rather than a CSR graph (the edge set here is
/// rebuilt fresh every outer-loop round rather than mutated incrementally,
/// so there is no batching to amortize).
///
/// `adjacency[u]` lists `(v, weight)` pairs for edges leaving `u`; callers
/// are responsible for keeping only the minimum weight per `(u, v)` pair, as
/// required by spec.md §4.C.
///
/// Dequeue order does not affect correctness, only performance. Termination
/// is guaranteed either by the queue emptying or by a node's relaxation
/// count exceeding `n`, at which point a negative cycle is reachable from
/// `source` and `Err(NegativeCycle)` is returned.
pub fn spfa(
    n: usize,
    source: NodeId,
    adjacency: &[Vec<(NodeId, f64)>],
) -> Result<Vec<f64>, NegativeCycle> {
    let mut dist = vec![INFINITY; n];
    let mut in_queue = vec![false; n];
    let mut relax_count = vec![0usize; n];
    let mut queue = VecDeque::with_capacity(n);

    dist[source] = 0.0;
    in_queue[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        in_queue[u] = false;

        for &(v, weight) in &adjacency[u] {
            let candidate = dist[u] + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
                if !in_queue[v] {
                    in_queue[v] = true;
                    relax_count[v] += 1;
                    if relax_count[v] > n {
                        return Err(NegativeCycle);
                    }
                    queue.push_back(v);
                }
            }
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_edges_leaves_only_source_reachable() {
        let adjacency = vec![Vec::new(); 3];
        let dist = spfa(3, 0, &adjacency).unwrap();
        assert_eq!(dist[0], 0.0);
        assert_eq!(dist[1], INFINITY);
        assert_eq!(dist[2], INFINITY);
    }

    #[test]
    fn simple_chain_distances() {
        let adjacency = vec![vec![(1, 2.0)], vec![(2, 3.0)], vec![]];
        let dist = spfa(3, 0, &adjacency).unwrap();
        assert_eq!(dist, vec![0.0, 2.0, 5.0]);
    }

    #[test]
    fn disconnected_component_stays_infinite() {
        let adjacency = vec![vec![(1, 1.0)], vec![], vec![(3, 1.0)], vec![]];
        let dist = spfa(4, 0, &adjacency).unwrap();
        assert_eq!(dist[2], INFINITY);
        assert_eq!(dist[3], INFINITY);
    }

    #[test]
    fn detects_negative_cycle() {
        let adjacency = vec![vec![(1, 1.0)], vec![(0, -2.0)]];
        assert_eq!(spfa(2, 0, &adjacency), Err(NegativeCycle));
    }

    #[test]
    fn does_not_flag_non_negative_cycle() {
        let adjacency = vec![vec![(1, 1.0)], vec![(0, -1.0)]];
        assert!(spfa(2, 0, &adjacency).is_ok());
    }
}
