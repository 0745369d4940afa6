//! Nodal gradient estimation (`trigradient`).
//!
//! Each element carries the unique linear function matching the field at its
//! three vertices; its gradient comes from a 2×2 solve over the two
//! independent edge vectors. Nodal gradients are the area-weighted average
//! over the node's element fan. Zero-area elements are excluded from the
//! weighting instead of poisoning it with a division by zero.

use crate::error::GridError;
use crate::geometry::primitives::{check_len, element_areas};
use crate::topology::adjacency::NodeElementFans;
use crate::topology::connectivity::Connectivity;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Nodal (∂z/∂x, ∂z/∂y) of a scalar field given at nodes.
///
/// Exact for fields linear in x and y. Nodes without any nonzero-area
/// incident element get zero gradients.
pub fn trigradient(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    triangles: &[[usize; 3]],
) -> Result<(Vec<f64>, Vec<f64>), GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    check_len("node field values", x.len(), z.len())?;
    let connectivity = Connectivity::build(x.len(), triangles)?;
    let fans = NodeElementFans::counter_clockwise(x, y, triangles, &connectivity)?;
    let areas = element_areas(x, y, triangles)?;

    // Per-element gradient of the linear interpolant; None for degenerate.
    let element_gradients: Vec<Option<[f64; 2]>> = triangles
        .iter()
        .enumerate()
        .map(|(k, t)| {
            let e1 = [x[t[1]] - x[t[0]], y[t[1]] - y[t[0]]];
            let e2 = [x[t[2]] - x[t[0]], y[t[2]] - y[t[0]]];
            let det = e1[0] * e2[1] - e1[1] * e2[0];
            if det == 0.0 {
                log::warn!("element {k} has zero area, excluded from gradient weighting");
                return None;
            }
            let dz1 = z[t[1]] - z[t[0]];
            let dz2 = z[t[2]] - z[t[0]];
            Some([
                (dz1 * e2[1] - dz2 * e1[1]) / det,
                (e1[0] * dz2 - e2[0] * dz1) / det,
            ])
        })
        .collect();

    let per_node = |node: usize| -> [f64; 2] {
        let mut weighted = [0.0, 0.0];
        let mut weight = 0.0;
        for &element in fans.fan(node) {
            if let Some(g) = element_gradients[element] {
                weighted[0] += areas[element] * g[0];
                weighted[1] += areas[element] * g[1];
                weight += areas[element];
            }
        }
        if weight > 0.0 {
            [weighted[0] / weight, weighted[1] / weight]
        } else {
            [0.0, 0.0]
        }
    };

    #[cfg(feature = "rayon")]
    let gradients: Vec<[f64; 2]> = (0..x.len()).into_par_iter().map(per_node).collect();
    #[cfg(not(feature = "rayon"))]
    let gradients: Vec<[f64; 2]> = (0..x.len()).map(per_node).collect();

    Ok(gradients.iter().map(|g| (g[0], g[1])).unzip())
}
