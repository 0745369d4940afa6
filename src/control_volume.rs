//! Finite-volume control areas on the median dual.
//!
//! The median-dual cell of a node is the polygon through the midpoints of
//! its incident edges and the centers of its incident elements (closed
//! through the node itself on the boundary). Walking the node's
//! counter-clockwise fan once and accumulating a single signed shoelace sum
//! keeps adjacent wedge contributions from cancelling.
//!
//! Conservation identity: the node control areas of a triangulation sum to
//! exactly the total element area. Tests treat this as a hard property.

use crate::error::GridError;
use crate::geometry::primitives::{ccw_winding, check_len, element_areas, element_centers};
use crate::topology::adjacency::NodeElementFans;
use crate::topology::connectivity::Connectivity;
use serde::{Deserialize, Serialize};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Batch output of [`control_volumes`].
///
/// Both arrays are node-aligned: `node_areas[n]` is the median-dual area of
/// node n, `element_areas[n]` the summed raw areas of the elements incident
/// to node n.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlVolumes {
    pub node_areas: Vec<f64>,
    pub element_areas: Vec<f64>,
}

/// Sum of the raw areas of every element incident to `node`.
pub fn element_control_area(node: usize, triangles: &[[usize; 3]], areas: &[f64]) -> f64 {
    triangles
        .iter()
        .zip(areas)
        .filter(|(t, _)| t.contains(&node))
        .map(|(_, &a)| a)
        .sum()
}

/// Median-dual control area of one node.
///
/// `xc`/`yc` are element-center coordinates (usually centroids from
/// [`element_centers`]); they are consumed, never recomputed, so callers
/// may supply externally derived centers.
pub fn node_control_area(
    node: usize,
    x: &[f64],
    y: &[f64],
    xc: &[f64],
    yc: &[f64],
    triangles: &[[usize; 3]],
) -> Result<f64, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    check_len("element center y coordinates", xc.len(), yc.len())?;
    check_len("element centers", triangles.len(), xc.len())?;
    let connectivity = Connectivity::build(x.len(), triangles)?;
    let fans = NodeElementFans::counter_clockwise(x, y, triangles, &connectivity)?;
    Ok(median_dual_area(
        node,
        fans.fan(node),
        x,
        y,
        xc,
        yc,
        triangles,
        connectivity.node_on_boundary[node],
    ))
}

/// Node control areas and per-node summed element areas for a whole
/// triangulation.
pub fn control_volumes(
    x: &[f64],
    y: &[f64],
    triangles: &[[usize; 3]],
) -> Result<ControlVolumes, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    let connectivity = Connectivity::build(x.len(), triangles)?;
    let fans = NodeElementFans::counter_clockwise(x, y, triangles, &connectivity)?;
    let (xc, yc) = element_centers(x, y, triangles)?;
    let raw_areas = element_areas(x, y, triangles)?;

    let per_node = |node: usize| -> (f64, f64) {
        let fan = fans.fan(node);
        let dual = median_dual_area(
            node,
            fan,
            x,
            y,
            &xc,
            &yc,
            triangles,
            connectivity.node_on_boundary[node],
        );
        let summed: f64 = fan.iter().map(|&e| raw_areas[e]).sum();
        (dual, summed)
    };

    #[cfg(feature = "rayon")]
    let pairs: Vec<(f64, f64)> = (0..x.len()).into_par_iter().map(per_node).collect();
    #[cfg(not(feature = "rayon"))]
    let pairs: Vec<(f64, f64)> = (0..x.len()).map(per_node).collect();

    let (node_areas, element_areas) = pairs.into_iter().unzip();
    Ok(ControlVolumes {
        node_areas,
        element_areas,
    })
}

/// Shoelace area of the median-dual polygon around one node, given its CCW
/// fan.
#[allow(clippy::too_many_arguments)]
fn median_dual_area(
    node: usize,
    fan: &[usize],
    x: &[f64],
    y: &[f64],
    xc: &[f64],
    yc: &[f64],
    triangles: &[[usize; 3]],
    on_boundary: bool,
) -> f64 {
    if fan.is_empty() {
        return 0.0;
    }

    // Polygon vertices: entering-edge midpoint and element center per fan
    // member, then the leaving-edge midpoint; a boundary fan closes through
    // the node itself.
    let mut polygon: Vec<[f64; 2]> = Vec::with_capacity(2 * fan.len() + 2);
    let wedge = |element: usize| -> (usize, usize) {
        let t = ccw_winding(triangles[element], x, y);
        let i = t.iter().position(|&v| v == node).unwrap_or(0);
        (t[(i + 1) % 3], t[(i + 2) % 3])
    };
    let midpoint = |other: usize| -> [f64; 2] {
        [(x[node] + x[other]) * 0.5, (y[node] + y[other]) * 0.5]
    };

    let (first_enter, _) = wedge(fan[0]);
    polygon.push(midpoint(first_enter));
    for &element in fan {
        polygon.push([xc[element], yc[element]]);
        let (_, leave) = wedge(element);
        polygon.push(midpoint(leave));
    }
    if on_boundary {
        polygon.push([x[node], y[node]]);
    }

    let mut twice_area = 0.0;
    for i in 0..polygon.len() {
        let j = (i + 1) % polygon.len();
        twice_area += polygon[i][0] * polygon[j][1] - polygon[j][0] * polygon[i][1];
    }
    (twice_area * 0.5).abs()
}
