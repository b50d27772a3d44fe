//! Dynamic Controllability decision procedure for Simple Temporal Networks
//! with Uncertainty, based on Morris's structural characterization ("A
//! Structural Characterization of Temporal Dynamic Controllability").
//!
//! The entry point is [`decide_dc`]; build a [`Network`] first, which
//! validates the structural invariants the solver assumes.

pub mod allmax;
pub mod graph;
pub mod incremental;
pub mod lower_case;
pub mod network;
pub mod reduce;
pub mod spfa;
pub mod solver;

pub use common::error::Error as DcError;
pub use graph::{EdgeKind, LabeledEdge};
pub use incremental::IncrementalDcTester;
pub use network::{ContingentEdge, ControllableEdge, Network};
pub use solver::{decide_dc, Verdict};

/// Convenience entry point combining network construction and solving, for
/// callers that have raw edge lists rather than an already-validated
/// [`Network`].
pub fn decide_dc_from_edges(
    num_nodes: usize,
    controllable: Vec<ControllableEdge>,
    contingent: Vec<ContingentEdge>,
) -> Result<Verdict, DcError> {
    let network = Network::new(num_nodes, controllable, contingent)?;
    Ok(decide_dc(&network))
}
