//! Node→element adjacency arenas and per-node queries.
//!
//! The element fan of every node is stored arena-style: one contiguous
//! `elements` array plus an `offsets` array, so `fan(n)` is a slice with no
//! per-node allocation. Two orderings are available: triangle-input order
//! (cheap, order-insensitive consumers) and counter-clockwise shared-edge
//! order (required by the control-volume and gradient engines).

use crate::error::GridError;
use crate::geometry::primitives::ccw_winding;
use crate::topology::connectivity::Connectivity;
use serde::{Deserialize, Serialize};

/// CSR table of each node's incident elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeElementFans {
    /// `offsets[n]..offsets[n + 1]` is node n's range into `elements`.
    pub offsets: Vec<usize>,
    /// Element ids, all fans stored contiguously.
    pub elements: Vec<usize>,
}

impl NodeElementFans {
    /// Fans in triangle-input discovery order.
    pub fn in_input_order(n_nodes: usize, triangles: &[[usize; 3]]) -> Self {
        let mut counts = vec![0usize; n_nodes];
        for t in triangles {
            for &v in t {
                counts[v] += 1;
            }
        }
        let mut offsets = Vec::with_capacity(n_nodes + 1);
        let mut total = 0;
        offsets.push(0);
        for &c in &counts {
            total += c;
            offsets.push(total);
        }
        let mut cursor = offsets[..n_nodes].to_vec();
        let mut elements = vec![0usize; total];
        for (k, t) in triangles.iter().enumerate() {
            for &v in t {
                elements[cursor[v]] = k;
                cursor[v] += 1;
            }
        }
        Self { offsets, elements }
    }

    /// Fans ordered counter-clockwise around each node by shared-edge
    /// adjacency.
    ///
    /// Each incident element is canonicalized to CCW winding, giving it an
    /// entering and a leaving edge at the node; the fan walks from element
    /// to element across leaving edges. Boundary-node fans start at the
    /// boundary edge so the walk covers the whole fan in one pass. A node
    /// whose elements do not chain into a single fan (a pinch that still
    /// passes edge-manifold validation) has the unreached elements appended
    /// in input order.
    pub fn counter_clockwise(
        x: &[f64],
        y: &[f64],
        triangles: &[[usize; 3]],
        connectivity: &Connectivity,
    ) -> Result<Self, GridError> {
        let n_nodes = connectivity.n_nodes();
        let input_order = Self::in_input_order(n_nodes, triangles);
        let mut offsets = Vec::with_capacity(n_nodes + 1);
        let mut elements = Vec::with_capacity(input_order.elements.len());
        offsets.push(0);
        for node in 0..n_nodes {
            let fan = ordered_fan(node, input_order.fan(node), x, y, triangles, connectivity);
            elements.extend_from_slice(&fan);
            offsets.push(elements.len());
        }
        Ok(Self { offsets, elements })
    }

    /// Number of nodes covered.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// The element fan of one node.
    #[inline]
    pub fn fan(&self, node: usize) -> &[usize] {
        &self.elements[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Number of elements incident to one node.
    #[inline]
    pub fn fan_len(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }
}

/// Walk one node's fan counter-clockwise by shared-edge adjacency.
fn ordered_fan(
    node: usize,
    incident: &[usize],
    x: &[f64],
    y: &[f64],
    triangles: &[[usize; 3]],
    connectivity: &Connectivity,
) -> Vec<usize> {
    if incident.len() <= 1 {
        return incident.to_vec();
    }

    // Entering/leaving neighbor nodes per element, under CCW winding.
    let wedge = |element: usize| -> (usize, usize) {
        let t = ccw_winding(triangles[element], x, y);
        let i = t.iter().position(|&v| v == node).unwrap_or(0);
        (t[(i + 1) % 3], t[(i + 2) % 3])
    };
    let edge_id = |a: usize, b: usize| -> usize {
        let e = if a <= b { [a, b] } else { [b, a] };
        connectivity
            .edges
            .binary_search(&e)
            .unwrap_or(usize::MAX)
    };

    // Start at the element whose entering edge is a boundary edge, so a
    // boundary fan is covered in one sweep; interior fans can start anywhere.
    let start = incident
        .iter()
        .copied()
        .find(|&e| {
            let (enter, _) = wedge(e);
            let id = edge_id(node, enter);
            id != usize::MAX && connectivity.is_boundary_edge(id)
        })
        .unwrap_or(incident[0]);

    let mut fan = Vec::with_capacity(incident.len());
    fan.push(start);
    loop {
        let current = *fan.last().unwrap_or(&start);
        let (_, leave) = wedge(current);
        let id = edge_id(node, leave);
        if id == usize::MAX {
            break;
        }
        match connectivity.neighbor_across(id, current) {
            Some(next) if next != fan[0] && !fan.contains(&next) => fan.push(next),
            _ => break,
        }
    }

    if fan.len() < incident.len() {
        // Pinched fan: keep the walk's order, append the rest deterministically.
        for &e in incident {
            if !fan.contains(&e) {
                fan.push(e);
            }
        }
    }
    fan
}

/// Elements incident to `node`, in triangle-input order.
pub fn connected_elements(node: usize, triangles: &[[usize; 3]]) -> Vec<usize> {
    triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| t.contains(&node))
        .map(|(k, _)| k)
        .collect()
}

/// Unique nodes sharing an element with `node`, sorted ascending.
pub fn connected_nodes(node: usize, triangles: &[[usize; 3]]) -> Vec<usize> {
    let mut nodes: Vec<usize> = triangles
        .iter()
        .filter(|t| t.contains(&node))
        .flatten()
        .copied()
        .filter(|&v| v != node)
        .collect();
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

/// True iff `node` touches fewer than two elements.
///
/// Such spur nodes sit on mesh corners or dangling stitches and are the
/// usual candidates for pruning before boundary-sensitive analyses.
pub fn is_under_connected(node: usize, triangles: &[[usize; 3]]) -> bool {
    triangles.iter().filter(|t| t.contains(&node)).take(2).count() < 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_grid() -> ([f64; 9], [f64; 9], Vec<[usize; 3]>) {
        (
            [0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0, 2.0, 2.0],
            [0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 0.0, 1.0, 2.0],
            vec![
                [0, 2, 1],
                [1, 2, 3],
                [2, 5, 3],
                [2, 4, 5],
                [1, 3, 7],
                [1, 7, 6],
                [3, 5, 7],
                [7, 5, 8],
            ],
        )
    }

    #[test]
    fn input_order_fans_match_discovery_order() {
        let (_, _, tri) = two_row_grid();
        let fans = NodeElementFans::in_input_order(9, &tri);
        assert_eq!(fans.fan(5), &[2, 3, 6, 7]);
        assert_eq!(fans.fan(0), &[0]);
        assert_eq!(fans.fan_len(3), 4);
    }

    #[test]
    fn ccw_fan_is_edge_adjacent_chain() {
        let (x, y, tri) = two_row_grid();
        let conn = Connectivity::build(9, &tri).unwrap();
        let fans = NodeElementFans::counter_clockwise(&x, &y, &tri, &conn).unwrap();
        // Interior node 3 touches four elements; consecutive fan members must
        // share an edge through node 3.
        let fan = fans.fan(3);
        assert_eq!(fan.len(), 4);
        for pair in fan.windows(2) {
            let shared: Vec<usize> = tri[pair[0]]
                .iter()
                .filter(|v| tri[pair[1]].contains(v))
                .copied()
                .collect();
            assert!(shared.contains(&3) && shared.len() == 2);
        }
    }

    #[test]
    fn boundary_fan_covers_all_incident_elements() {
        let (x, y, tri) = two_row_grid();
        let conn = Connectivity::build(9, &tri).unwrap();
        let fans = NodeElementFans::counter_clockwise(&x, &y, &tri, &conn).unwrap();
        for node in 0..9 {
            let mut fan = fans.fan(node).to_vec();
            let mut expected = connected_elements(node, &tri);
            fan.sort_unstable();
            expected.sort_unstable();
            assert_eq!(fan, expected, "node {node}");
        }
    }

    #[test]
    fn connected_node_query_is_sorted_unique() {
        let (_, _, tri) = two_row_grid();
        assert_eq!(connected_nodes(2, &tri), vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn under_connected_flags_grid_corners() {
        let (_, _, tri) = two_row_grid();
        let flagged: Vec<usize> = (0..9).filter(|&n| is_under_connected(n, &tri)).collect();
        assert_eq!(flagged, vec![0, 4, 6, 8]);
    }
}
