//! Edge-based connectivity for triangular unstructured grids.
//!
//! # Ordering contract
//! Edges are canonicalized (smaller node index first), deduplicated, and
//! numbered in lexicographic order of their node pairs. Per-element edge ids
//! follow the element's winding order: (v0,v1), (v1,v2), (v2,v0). The two
//! incident elements of an edge appear in triangle-input order, with
//! [`NO_ELEMENT`] standing in for the missing second element of a boundary
//! edge. Downstream components and tests rely on these orderings literally.

use crate::error::GridError;
use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Sentinel for "no element on this side of the edge".
///
/// The array-convention equivalent of −1; use
/// [`Connectivity::second_element`] for an `Option`-typed view.
pub const NO_ELEMENT: usize = usize::MAX;

/// Validated edge connectivity of a triangular mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connectivity {
    n_nodes: usize,
    /// Unique canonical edges, lexicographically sorted.
    pub edges: Vec<[usize; 2]>,
    /// Per element, the edge ids of its winding edges (v0,v1), (v1,v2), (v2,v0).
    pub element_edges: Vec<[usize; 3]>,
    /// Per edge, the one or two incident elements ([`NO_ELEMENT`] sentinel).
    pub edge_elements: Vec<[usize; 2]>,
    /// True iff the node is an endpoint of at least one boundary edge.
    pub node_on_boundary: Vec<bool>,
}

impl Connectivity {
    /// Build and validate connectivity from a triangle table.
    ///
    /// Fails on node indices `>= n_nodes`, repeated vertices within a
    /// triangle, and edges with more than two incident elements. Empty
    /// input produces empty (valid) connectivity.
    pub fn build(n_nodes: usize, triangles: &[[usize; 3]]) -> Result<Self, GridError> {
        for (k, t) in triangles.iter().enumerate() {
            for &v in t {
                if v >= n_nodes {
                    return Err(GridError::NodeIndexOutOfRange {
                        element: k,
                        node: v,
                        n_nodes,
                    });
                }
            }
            if t[0] == t[1] || t[1] == t[2] || t[2] == t[0] {
                let repeated = if t[0] == t[1] || t[0] == t[2] { t[0] } else { t[1] };
                return Err(GridError::RepeatedVertex {
                    element: k,
                    node: repeated,
                });
            }
        }

        let edges: Vec<[usize; 2]> = triangles
            .iter()
            .flat_map(|t| winding_edges(t).map(canonical))
            .sorted_unstable()
            .dedup()
            .collect();
        let edge_ids: HashMap<[usize; 2], usize> =
            edges.iter().enumerate().map(|(i, &e)| (e, i)).collect();

        let element_edges: Vec<[usize; 3]> = triangles
            .iter()
            .map(|t| winding_edges(t).map(|e| edge_ids[&canonical(e)]))
            .collect();

        let mut edge_elements = vec![[NO_ELEMENT; 2]; edges.len()];
        for (k, ids) in element_edges.iter().enumerate() {
            for &edge in ids {
                let row = &mut edge_elements[edge];
                if row[0] == NO_ELEMENT {
                    row[0] = k;
                } else if row[1] == NO_ELEMENT {
                    row[1] = k;
                } else {
                    return Err(GridError::NonManifoldEdge {
                        nodes: edges[edge],
                        incident: 3,
                    });
                }
            }
        }

        let mut node_on_boundary = vec![false; n_nodes];
        for (edge, row) in edge_elements.iter().enumerate() {
            if row[1] == NO_ELEMENT {
                node_on_boundary[edges[edge][0]] = true;
                node_on_boundary[edges[edge][1]] = true;
            }
        }

        log::debug!(
            "connectivity: {n_nodes} nodes, {} elements, {} edges ({} boundary)",
            triangles.len(),
            edges.len(),
            edge_elements.iter().filter(|r| r[1] == NO_ELEMENT).count(),
        );

        Ok(Self {
            n_nodes,
            edges,
            element_edges,
            edge_elements,
            node_on_boundary,
        })
    }

    /// Number of nodes the connectivity was built over.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Number of unique edges.
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// True iff the edge has exactly one incident element.
    #[inline]
    pub fn is_boundary_edge(&self, edge: usize) -> bool {
        self.edge_elements[edge][1] == NO_ELEMENT
    }

    /// The second incident element of an edge, if the edge is interior.
    #[inline]
    pub fn second_element(&self, edge: usize) -> Option<usize> {
        match self.edge_elements[edge][1] {
            NO_ELEMENT => None,
            e => Some(e),
        }
    }

    /// The element on the other side of `edge` from `element`, if any.
    #[inline]
    pub fn neighbor_across(&self, edge: usize, element: usize) -> Option<usize> {
        let [a, b] = self.edge_elements[edge];
        let other = if a == element { b } else { a };
        if other == NO_ELEMENT { None } else { Some(other) }
    }

    /// Edge ids of all boundary edges, in edge order.
    pub fn boundary_edges(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.edges.len()).filter(|&e| self.is_boundary_edge(e))
    }
}

#[inline]
fn winding_edges(t: &[usize; 3]) -> [[usize; 2]; 3] {
    [[t[0], t[1]], [t[1], t[2]], [t[2], t[0]]]
}

#[inline]
fn canonical(e: [usize; 2]) -> [usize; 2] {
    if e[0] <= e[1] { e } else { [e[1], e[0]] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_is_valid_and_empty() {
        let conn = Connectivity::build(0, &[]).unwrap();
        assert_eq!(conn.n_edges(), 0);
        assert!(conn.edges.is_empty());
        assert!(conn.node_on_boundary.is_empty());
    }

    #[test]
    fn single_triangle_is_all_boundary() {
        let conn = Connectivity::build(3, &[[0, 1, 2]]).unwrap();
        assert_eq!(conn.edges, vec![[0, 1], [0, 2], [1, 2]]);
        assert_eq!(conn.element_edges, vec![[0, 2, 1]]);
        assert!(conn.edge_elements.iter().all(|r| r[1] == NO_ELEMENT));
        assert_eq!(conn.node_on_boundary, vec![true, true, true]);
    }

    #[test]
    fn shared_edge_records_both_elements_in_input_order() {
        // Two triangles sharing edge (1,2).
        let conn = Connectivity::build(4, &[[0, 1, 2], [2, 1, 3]]).unwrap();
        let shared = conn.edges.iter().position(|&e| e == [1, 2]).unwrap();
        assert_eq!(conn.edge_elements[shared], [0, 1]);
        assert_eq!(conn.neighbor_across(shared, 0), Some(1));
        assert_eq!(conn.neighbor_across(shared, 1), Some(0));
        assert!(!conn.is_boundary_edge(shared));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = Connectivity::build(3, &[[0, 1, 3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NodeIndexOutOfRange {
                element: 0,
                node: 3,
                n_nodes: 3
            }
        );
    }

    #[test]
    fn repeated_vertex_is_rejected() {
        let err = Connectivity::build(3, &[[0, 1, 1]]).unwrap_err();
        assert_eq!(err, GridError::RepeatedVertex { element: 0, node: 1 });
    }

    #[test]
    fn non_manifold_edge_is_rejected() {
        // Three triangles all sharing edge (0,1).
        let tri = [[0, 1, 2], [0, 1, 3], [0, 1, 4]];
        let err = Connectivity::build(5, &tri).unwrap_err();
        assert_eq!(
            err,
            GridError::NonManifoldEdge {
                nodes: [0, 1],
                incident: 3
            }
        );
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let tri = [[0, 2, 1], [1, 2, 3]];
        let a = Connectivity::build(4, &tri).unwrap();
        let b = Connectivity::build(4, &tri).unwrap();
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.element_edges, b.element_edges);
        assert_eq!(a.edge_elements, b.edge_elements);
    }
}
