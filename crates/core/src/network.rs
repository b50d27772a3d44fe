use std::collections::HashSet;

use common::error::Error;
use common::types::NodeId;

/// A requirement edge: the planner may choose any duration in `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllableEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub lower: f64,
    pub upper: f64,
}

/// A contingent edge: Nature chooses the duration in `[lower, upper]`, revealed
/// only once the edge completes. `lower` is never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContingentEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub lower: f64,
    pub upper: f64,
}

/// A validated Simple Temporal Network with Uncertainty.
///
/// Node identifiers live in `[1, num_nodes]`; `0` is reserved for the virtual
/// AllMax source and is never a valid node here. Invariants are checked once,
/// at construction; the solver never revalidates them.
#[derive(Debug, Clone)]
pub struct Network {
    num_nodes: usize,
    controllable: Vec<ControllableEdge>,
    contingent: Vec<ContingentEdge>,
}

impl Network {
    /// Builds a network, checking every invariant from the data model:
    /// bounds ordering, no duplicate edges per kind, no chained contingent
    /// edges, and at most one incoming contingent edge per node.
    pub fn new(
        num_nodes: usize,
        controllable: Vec<ControllableEdge>,
        contingent: Vec<ContingentEdge>,
    ) -> Result<Self, Error> {
        if num_nodes == 0 {
            return Err(Error::InvalidNetwork(
                "num_nodes must be at least 1".to_string(),
            ));
        }

        let in_range = |n: NodeId| n >= 1 && n <= num_nodes;

        let mut controllable_pairs = HashSet::with_capacity(controllable.len());
        for e in &controllable {
            if !in_range(e.from) || !in_range(e.to) {
                return Err(Error::InvalidNetwork(format!(
                    "controllable edge ({}, {}) references a node outside [1, {}]",
                    e.from, e.to, num_nodes
                )));
            }
            if e.lower > e.upper {
                return Err(Error::InvalidNetwork(format!(
                    "controllable edge ({}, {}) has lower {} > upper {}",
                    e.from, e.to, e.lower, e.upper
                )));
            }
            if !controllable_pairs.insert((e.from, e.to)) {
                return Err(Error::InvalidNetwork(format!(
                    "duplicate controllable edge ({}, {})",
                    e.from, e.to
                )));
            }
        }

        let mut contingent_pairs = HashSet::with_capacity(contingent.len());
        let mut contingent_froms = HashSet::with_capacity(contingent.len());
        let mut contingent_tos = HashSet::with_capacity(contingent.len());
        let mut incoming_count: std::collections::HashMap<NodeId, usize> =
            std::collections::HashMap::new();
        for e in &contingent {
            if !in_range(e.from) || !in_range(e.to) {
                return Err(Error::InvalidNetwork(format!(
                    "contingent edge ({}, {}) references a node outside [1, {}]",
                    e.from, e.to, num_nodes
                )));
            }
            if e.lower < 0.0 {
                return Err(Error::InvalidNetwork(format!(
                    "contingent edge ({}, {}) has negative lower bound {}",
                    e.from, e.to, e.lower
                )));
            }
            if e.lower > e.upper {
                return Err(Error::InvalidNetwork(format!(
                    "contingent edge ({}, {}) has lower {} > upper {}",
                    e.from, e.to, e.lower, e.upper
                )));
            }
            if !contingent_pairs.insert((e.from, e.to)) {
                return Err(Error::InvalidNetwork(format!(
                    "duplicate contingent edge ({}, {})",
                    e.from, e.to
                )));
            }
            contingent_froms.insert(e.from);
            contingent_tos.insert(e.to);
            *incoming_count.entry(e.to).or_insert(0) += 1;
        }

        if let Some(&node) = contingent_froms.intersection(&contingent_tos).next() {
            return Err(Error::InvalidNetwork(format!(
                "node {} is both the origin and the target of a contingent edge (contingents do not chain)",
                node
            )));
        }

        if let Some((&node, _)) = incoming_count.iter().find(|&(_, &count)| count > 1) {
            return Err(Error::InvalidNetwork(format!(
                "node {} has more than one incoming contingent edge",
                node
            )));
        }

        Ok(Self {
            num_nodes,
            controllable,
            contingent,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn controllable_edges(&self) -> impl Iterator<Item = &ControllableEdge> {
        self.controllable.iter()
    }

    pub fn contingent_edges(&self) -> impl Iterator<Item = &ContingentEdge> {
        self.contingent.iter()
    }

    pub fn num_controllable(&self) -> usize {
        self.controllable.len()
    }

    pub fn num_contingent(&self) -> usize {
        self.contingent.len()
    }

    pub fn num_edges(&self) -> usize {
        self.controllable.len() + self.contingent.len()
    }
}
