//! GridError: unified error type for fvcom-grid public APIs.
//!
//! Topological validity is checked once, when [`crate::topology::Connectivity`]
//! is built; downstream components trust a validated connectivity and do not
//! re-validate. All public fallible APIs return `Result<_, GridError>` and
//! never panic on malformed input.

use thiserror::Error;

/// Unified error type for fvcom-grid operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A triangle references a node index outside the node array.
    #[error("element {element}: node index {node} out of range (mesh has {n_nodes} nodes)")]
    NodeIndexOutOfRange {
        element: usize,
        node: usize,
        n_nodes: usize,
    },
    /// A triangle lists the same node more than once.
    #[error("element {element}: repeated vertex {node}")]
    RepeatedVertex { element: usize, node: usize },
    /// An edge is shared by more than two elements (non-manifold mesh).
    #[error("edge ({},{}) has {incident} incident elements (at most 2 allowed)", nodes[0], nodes[1])]
    NonManifoldEdge { nodes: [usize; 2], incident: usize },
    /// A boundary node whose boundary-edge degree is not 2 cannot be traced
    /// into a simple closed loop.
    #[error("boundary node {node} has boundary degree {degree}, cannot trace a closed polygon")]
    UntraceableBoundary { node: usize, degree: usize },
    /// A zero-area element was found while `DegenerateHandling::Error` was
    /// requested.
    #[error("element {element} has zero area")]
    DegenerateElement { element: usize },
    /// Two parallel input arrays disagree in length.
    #[error("length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}
