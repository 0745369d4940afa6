//! FVCOM-style grid metrics.
//!
//! These are the adjacency arrays a finite-volume solver builds its stencils
//! from, derived once from [`Connectivity`] instead of re-scanning the raw
//! triangle table: elements-per-node counts (FVCOM `ntve`), node→element
//! fans (`nbve`), neighbor elements across each winding edge (`nbe`), and
//! element/node boundary flags (`isbce`/`isonb`).

use crate::error::GridError;
use crate::topology::adjacency::NodeElementFans;
use crate::topology::connectivity::{Connectivity, NO_ELEMENT};
use serde::{Deserialize, Serialize};

/// Nodal and elemental adjacency metrics of a validated triangulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Count of elements touching each node (`ntve`).
    pub elements_per_node: Vec<usize>,
    /// Ordered element fan per node, triangle-input order (`nbve`).
    pub node_elements: NodeElementFans,
    /// The three neighboring elements per element, across winding edges
    /// (v0,v1), (v1,v2), (v2,v0); [`NO_ELEMENT`] at boundary edges (`nbe`).
    pub element_neighbors: Vec<[usize; 3]>,
    /// True iff any of the element's edges is a boundary edge (`isbce`).
    pub element_on_boundary: Vec<bool>,
    /// True iff the node lies on a boundary edge (`isonb`).
    pub node_on_boundary: Vec<bool>,
}

impl GridMetrics {
    /// Derive all metrics from validated connectivity and its triangle table.
    pub fn compute(
        connectivity: &Connectivity,
        triangles: &[[usize; 3]],
    ) -> Result<Self, GridError> {
        let node_elements = NodeElementFans::in_input_order(connectivity.n_nodes(), triangles);
        let elements_per_node = (0..connectivity.n_nodes())
            .map(|n| node_elements.fan_len(n))
            .collect();

        let element_neighbors: Vec<[usize; 3]> = connectivity
            .element_edges
            .iter()
            .enumerate()
            .map(|(k, edges)| {
                edges.map(|edge| connectivity.neighbor_across(edge, k).unwrap_or(NO_ELEMENT))
            })
            .collect();

        let element_on_boundary = connectivity
            .element_edges
            .iter()
            .map(|edges| edges.iter().any(|&e| connectivity.is_boundary_edge(e)))
            .collect();

        Ok(Self {
            elements_per_node,
            node_elements,
            element_neighbors,
            element_on_boundary,
            node_on_boundary: connectivity.node_on_boundary.clone(),
        })
    }
}
