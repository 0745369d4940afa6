//! Spatial clipping: node masks and triangulation filtering.
//!
//! Clipping never mutates inputs; it returns index masks or new triangle
//! tables that still reference the original node numbering.

use crate::error::GridError;
use crate::geometry::primitives::check_len;
use serde::{Deserialize, Serialize};

/// A closed rectangular extent `(xmin..=xmax, ymin..=ymax)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Extents {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Closed-interval containment on both axes.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }
}

/// Indices of nodes inside the closed rectangle, ascending.
///
/// Extents covering the full coordinate range return every index (identity
/// clip).
pub fn clip_domain(x: &[f64], y: &[f64], extents: Extents) -> Result<Vec<usize>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    Ok(x.iter()
        .zip(y)
        .enumerate()
        .filter(|&(_, (&px, &py))| extents.contains(px, py))
        .map(|(i, _)| i)
        .collect())
}

/// Retain elements whose center-to-vertex radius is at most `max_radius`.
///
/// Input order is preserved and the returned rows reference the original
/// node indices; only the element set shrinks.
pub fn clip_triangulation(
    triangles: &[[usize; 3]],
    x: &[f64],
    y: &[f64],
    xc: &[f64],
    yc: &[f64],
    max_radius: f64,
) -> Result<Vec<[usize; 3]>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    check_len("element center y coordinates", xc.len(), yc.len())?;
    check_len("element centers", triangles.len(), xc.len())?;
    Ok(triangles
        .iter()
        .enumerate()
        .filter(|(k, t)| {
            t.iter()
                .all(|&v| (x[v] - xc[*k]).hypot(y[v] - yc[*k]) <= max_radius)
        })
        .map(|(_, &t)| t)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::element_centers;

    #[test]
    fn identity_clip_returns_all_nodes() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 2.0];
        let mask = clip_domain(&x, &y, Extents::new(0.0, 2.0, 0.0, 2.0)).unwrap();
        assert_eq!(mask, vec![0, 1, 2]);
    }

    #[test]
    fn boundary_nodes_are_included() {
        // Closed intervals: nodes exactly on the extent edge survive.
        let x = [0.0, 1.5, 3.0];
        let y = [0.0, 0.0, 0.0];
        let mask = clip_domain(&x, &y, Extents::new(0.0, 1.5, -1.0, 1.0)).unwrap();
        assert_eq!(mask, vec![0, 1]);
    }

    #[test]
    fn empty_input_clips_to_empty() {
        let mask = clip_domain(&[], &[], Extents::new(0.0, 1.0, 0.0, 1.0)).unwrap();
        assert!(mask.is_empty());
    }

    #[test]
    fn oversized_elements_are_dropped_in_order() {
        // Two compact triangles and one long sliver.
        let x = [0.0, 1.0, 0.0, 1.0, 10.0];
        let y = [0.0, 0.0, 1.0, 1.0, 0.0];
        let tri = [[0, 1, 2], [2, 1, 3], [1, 4, 3]];
        let (xc, yc) = element_centers(&x, &y, &tri).unwrap();
        let kept = clip_triangulation(&tri, &x, &y, &xc, &yc, 2.0).unwrap();
        assert_eq!(kept, vec![[0, 1, 2], [2, 1, 3]]);
    }

    #[test]
    fn generous_radius_keeps_everything() {
        let x = [0.0, 1.0, 0.0, 1.0];
        let y = [0.0, 0.0, 1.0, 1.0];
        let tri = [[0, 1, 2], [2, 1, 3]];
        let (xc, yc) = element_centers(&x, &y, &tri).unwrap();
        let kept = clip_triangulation(&tri, &x, &y, &xc, &yc, 100.0).unwrap();
        assert_eq!(kept, tri.to_vec());
    }
}
