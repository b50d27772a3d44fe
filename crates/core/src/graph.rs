use std::fmt;

use common::types::NodeId;

use crate::network::{ContingentEdge, ControllableEdge, Network};

/// The three edge flavors of Morris's labeled distance graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Plain,
    UpperCase,
    LowerCase,
}

/// One edge of the labeled distance graph. `letter` names the contingent
/// node the label refers to and is `Some` iff `kind != Plain`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub value: f64,
    pub kind: EdgeKind,
    pub letter: Option<NodeId>,
}

impl LabeledEdge {
    pub fn plain(from: NodeId, to: NodeId, value: f64) -> Self {
        Self {
            from,
            to,
            value,
            kind: EdgeKind::Plain,
            letter: None,
        }
    }

    pub fn upper_case(from: NodeId, to: NodeId, value: f64, letter: NodeId) -> Self {
        Self {
            from,
            to,
            value,
            kind: EdgeKind::UpperCase,
            letter: Some(letter),
        }
    }

    pub fn lower_case(from: NodeId, to: NodeId, value: f64, letter: NodeId) -> Self {
        Self {
            from,
            to,
            value,
            kind: EdgeKind::LowerCase,
            letter: Some(letter),
        }
    }

    /// Dedup key: `(from, to, value, kind, letter)` equality, with the float
    /// compared by bit pattern since edge values are always finite sums of
    /// existing finite values (never NaN).
    pub fn dedup_key(&self) -> (NodeId, NodeId, u64, u8, Option<NodeId>) {
        let kind = match self.kind {
            EdgeKind::Plain => 0,
            EdgeKind::UpperCase => 1,
            EdgeKind::LowerCase => 2,
        };
        (self.from, self.to, self.value.to_bits(), kind, self.letter)
    }
}

/// Debug rendering in the style of the original implementation's edge
/// printer, e.g. `3....LC(5):2....>5`. Diagnostic only, never parsed back.
impl fmt::Display for LabeledEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match (self.kind, self.letter) {
            (EdgeKind::Plain, _) => String::new(),
            (EdgeKind::UpperCase, Some(l)) => format!("UC({}):", l),
            (EdgeKind::LowerCase, Some(l)) => format!("LC({}):", l),
            _ => unreachable!("non-plain edge without a letter"),
        };
        write!(f, "{}....{}{}....>{}", self.from, tag, self.value, self.to)
    }
}

fn add_controllable(edges: &mut Vec<LabeledEdge>, from: NodeId, to: NodeId, lower: f64, upper: f64) {
    edges.push(LabeledEdge::plain(from, to, upper));
    edges.push(LabeledEdge::plain(to, from, -lower));
}

fn add_contingent(edges: &mut Vec<LabeledEdge>, from: NodeId, to: NodeId, lower: f64, upper: f64) {
    edges.push(LabeledEdge::plain(from, to, upper));
    edges.push(LabeledEdge::plain(to, from, -lower));
    edges.push(LabeledEdge::upper_case(to, from, -upper, to));
    edges.push(LabeledEdge::lower_case(from, to, lower, to));
}

/// Expands a validated network into the labeled distance graph (spec.md
/// §4.B). Returns the post-normalization node count and the initial edge
/// list. Pure and deterministic: controllable edges are emitted first, in
/// input order, followed by contingent edges in input order.
pub fn generate(network: &Network) -> (usize, Vec<LabeledEdge>) {
    let mut num_nodes = network.num_nodes();
    let mut edges = Vec::with_capacity(network.num_edges() * 4);

    for e in network.controllable_edges() {
        let ControllableEdge {
            from,
            to,
            lower,
            upper,
        } = *e;
        add_controllable(&mut edges, from, to, lower, upper);
    }

    for e in network.contingent_edges() {
        let ContingentEdge {
            from,
            to,
            lower,
            upper,
        } = *e;
        if lower == 0.0 {
            add_contingent(&mut edges, from, to, lower, upper);
        } else {
            num_nodes += 1;
            let split = num_nodes;
            add_controllable(&mut edges, from, split, lower, lower);
            add_contingent(&mut edges, split, to, 0.0, upper - lower);
        }
    }

    (num_nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;

    #[test]
    fn no_contingents_yields_only_plain_edges() {
        let net = Network::new(
            2,
            vec![ControllableEdge {
                from: 1,
                to: 2,
                lower: 0.0,
                upper: 10.0,
            }],
            vec![],
        )
        .unwrap();
        let (n_prime, edges) = generate(&net);
        assert_eq!(n_prime, 2);
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| e.kind == EdgeKind::Plain));
    }

    #[test]
    fn zero_lower_contingent_emits_four_edges_no_split() {
        let net = Network::new(
            2,
            vec![],
            vec![ContingentEdge {
                from: 1,
                to: 2,
                lower: 0.0,
                upper: 3.0,
            }],
        )
        .unwrap();
        let (n_prime, edges) = generate(&net);
        assert_eq!(n_prime, 2);
        assert_eq!(edges.len(), 4);
        assert!(
            edges
                .iter()
                .any(|e| e.kind == EdgeKind::LowerCase && e.from == 1 && e.to == 2)
        );
        assert!(
            edges
                .iter()
                .any(|e| e.kind == EdgeKind::UpperCase && e.from == 2 && e.to == 1)
        );
    }

    #[test]
    fn positive_lower_contingent_splits_through_fresh_node() {
        let net = Network::new(
            2,
            vec![],
            vec![ContingentEdge {
                from: 1,
                to: 2,
                lower: 2.0,
                upper: 5.0,
            }],
        )
        .unwrap();
        let (n_prime, edges) = generate(&net);
        assert_eq!(n_prime, 3);
        // The controllable split: 1 -> 3 [2,2]
        assert!(
            edges
                .iter()
                .any(|e| e.kind == EdgeKind::Plain && e.from == 1 && e.to == 3 && e.value == 2.0)
        );
        // The contingent remainder: 3 -> 2 [0, 3]
        assert!(edges.iter().any(
            |e| e.kind == EdgeKind::LowerCase && e.from == 3 && e.to == 2 && e.value == 0.0
        ));
    }
}
