//! Boundary-polygon tracing.
//!
//! Tracing is a graph walk, not a geometric search: the boundary edges form
//! an undirected graph in which every traceable node has degree exactly 2,
//! so each connected component is one closed loop (the exterior boundary or
//! an island). Loops are discovered from the smallest-index unvisited
//! boundary node; within a loop the walk steps to the largest-index
//! unvisited neighbor. Both rules are part of the deterministic output
//! contract.

use crate::error::GridError;
use crate::topology::connectivity::Connectivity;
use hashbrown::HashMap;

/// Trace every boundary loop of a validated connectivity into an ordered,
/// closed polygon (the repeated terminal node is omitted).
///
/// Fails with [`GridError::UntraceableBoundary`] if any boundary node has a
/// boundary-edge degree other than 2 (open or pinched boundary).
pub fn boundary_polygons(connectivity: &Connectivity) -> Result<Vec<Vec<usize>>, GridError> {
    let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
    for edge in connectivity.boundary_edges() {
        let [a, b] = connectivity.edges[edge];
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }
    for (&node, neighbors) in adjacency.iter() {
        if neighbors.len() != 2 {
            return Err(GridError::UntraceableBoundary {
                node,
                degree: neighbors.len(),
            });
        }
    }

    let mut seeds: Vec<usize> = adjacency.keys().copied().collect();
    seeds.sort_unstable();

    let mut visited = vec![false; connectivity.n_nodes()];
    let mut polygons = Vec::new();
    for seed in seeds {
        if visited[seed] {
            continue;
        }
        let mut polygon = vec![seed];
        visited[seed] = true;
        loop {
            let current = *polygon.last().unwrap_or(&seed);
            let next = adjacency[&current]
                .iter()
                .copied()
                .filter(|&n| !visited[n])
                .max();
            match next {
                Some(n) => {
                    visited[n] = true;
                    polygon.push(n);
                }
                None => break,
            }
        }
        polygons.push(polygon);
    }
    Ok(polygons)
}

/// Convenience form of [`boundary_polygons`] building connectivity first.
pub fn boundary_polygons_from_triangles(
    n_nodes: usize,
    triangles: &[[usize; 3]],
) -> Result<Vec<Vec<usize>>, GridError> {
    let connectivity = Connectivity::build(n_nodes, triangles)?;
    boundary_polygons(&connectivity)
}

/// Boundary-edge neighbors of one node, sorted ascending.
///
/// Empty for interior nodes.
pub fn attached_boundary_nodes(node: usize, connectivity: &Connectivity) -> Vec<usize> {
    let mut attached: Vec<usize> = connectivity
        .boundary_edges()
        .filter_map(|edge| {
            let [a, b] = connectivity.edges[edge];
            if a == node {
                Some(b)
            } else if b == node {
                Some(a)
            } else {
                None
            }
        })
        .collect();
    attached.sort_unstable();
    attached.dedup();
    attached
}
