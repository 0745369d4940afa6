//! Triangle-area and side-length primitives.
//!
//! # Coordinate layout
//! Node coordinates are supplied as two parallel `&[f64]` slices (x and y);
//! node identity is the index position. Triangle tables are `&[[usize; 3]]`
//! rows of node indices; winding order is not assumed, and routines that are
//! orientation-sensitive canonicalize internally via the signed area.
//!
//! Degenerate (collinear) triangles yield area 0 here without signaling
//! failure; see [`crate::geometry::quality`] for the configurable policy.

use crate::error::GridError;
use itertools::izip;

/// Unsigned area of a single triangle via the 2-D cross product.
#[inline]
pub fn triangle_area(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    signed_area(a, b, c).abs()
}

/// Signed area: positive for counter-clockwise winding.
#[inline]
pub(crate) fn signed_area(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]))
}

/// Unsigned triangle areas, vectorized across elements.
///
/// Each argument holds one vertex row per element, so `a[k]`, `b[k]`, `c[k]`
/// are the three corners of element `k`.
pub fn triangle_areas(
    a: &[[f64; 2]],
    b: &[[f64; 2]],
    c: &[[f64; 2]],
) -> Result<Vec<f64>, GridError> {
    check_len("triangle vertex rows (b)", a.len(), b.len())?;
    check_len("triangle vertex rows (c)", a.len(), c.len())?;
    Ok(izip!(a, b, c)
        .map(|(&va, &vb, &vc)| triangle_area(va, vb, vc))
        .collect())
}

/// Unsigned area of every element of a triangulation.
pub fn element_areas(
    x: &[f64],
    y: &[f64],
    triangles: &[[usize; 3]],
) -> Result<Vec<f64>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    Ok(triangles
        .iter()
        .map(|t| {
            triangle_area(
                [x[t[0]], y[t[0]]],
                [x[t[1]], y[t[1]]],
                [x[t[2]], y[t[2]]],
            )
        })
        .collect())
}

/// Euclidean side lengths per element, in winding order
/// (v0–v1, v1–v2, v2–v0).
pub fn element_side_lengths(
    triangles: &[[usize; 3]],
    x: &[f64],
    y: &[f64],
) -> Result<Vec<[f64; 3]>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    Ok(triangles
        .iter()
        .map(|t| {
            [
                (x[t[0]] - x[t[1]]).hypot(y[t[0]] - y[t[1]]),
                (x[t[1]] - x[t[2]]).hypot(y[t[1]] - y[t[2]]),
                (x[t[2]] - x[t[0]]).hypot(y[t[2]] - y[t[0]]),
            ]
        })
        .collect())
}

/// Transfer a nodal field to element centers by vertex averaging.
pub fn nodes_to_elements(
    field: &[f64],
    triangles: &[[usize; 3]],
) -> Result<Vec<f64>, GridError> {
    for (k, t) in triangles.iter().enumerate() {
        for &v in t {
            if v >= field.len() {
                return Err(GridError::NodeIndexOutOfRange {
                    element: k,
                    node: v,
                    n_nodes: field.len(),
                });
            }
        }
    }
    Ok(triangles
        .iter()
        .map(|t| (field[t[0]] + field[t[1]] + field[t[2]]) / 3.0)
        .collect())
}

/// Element-center coordinates (centroids), one (xc, yc) pair per element.
pub fn element_centers(
    x: &[f64],
    y: &[f64],
    triangles: &[[usize; 3]],
) -> Result<(Vec<f64>, Vec<f64>), GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    let xc = nodes_to_elements(x, triangles)?;
    let yc = nodes_to_elements(y, triangles)?;
    Ok((xc, yc))
}

/// Rotate point sets clockwise about `origin` by `angle_deg` degrees.
pub fn rotate_points(
    x: &[f64],
    y: &[f64],
    origin: (f64, f64),
    angle_deg: f64,
) -> Result<(Vec<f64>, Vec<f64>), GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let (xr, yr) = izip!(x, y)
        .map(|(&px, &py)| {
            let dx = px - origin.0;
            let dy = py - origin.1;
            (
                origin.0 + dx * cos + dy * sin,
                origin.1 - dx * sin + dy * cos,
            )
        })
        .unzip();
    Ok((xr, yr))
}

/// Element vertices reordered so the winding is counter-clockwise.
///
/// Zero-area elements are returned unchanged.
#[inline]
pub(crate) fn ccw_winding(t: [usize; 3], x: &[f64], y: &[f64]) -> [usize; 3] {
    let s = signed_area(
        [x[t[0]], y[t[0]]],
        [x[t[1]], y[t[1]]],
        [x[t[2]], y[t[2]]],
    );
    if s < 0.0 { [t[0], t[2], t[1]] } else { t }
}

pub(crate) fn check_len(
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), GridError> {
    if expected != found {
        return Err(GridError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn unit_right_triangle_area() {
        assert!(approx(
            triangle_area([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]),
            0.5
        ));
    }

    #[test]
    fn area_is_winding_independent() {
        let cw = triangle_area([0.0, 0.0], [0.0, 1.0], [1.0, 0.0]);
        let ccw = triangle_area([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
        assert!(approx(cw, ccw));
    }

    #[test]
    fn collinear_triangle_has_zero_area() {
        assert!(approx(
            triangle_area([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]),
            0.0
        ));
    }

    #[test]
    fn batch_area_shape_mismatch_errors() {
        let a = [[0.0, 0.0]];
        let err = triangle_areas(&a, &[], &a).unwrap_err();
        assert!(matches!(err, GridError::LengthMismatch { .. }));
    }

    #[test]
    fn side_lengths_follow_winding_order() {
        let x = [0.0, 3.0, 0.0];
        let y = [0.0, 0.0, 4.0];
        let lengths = element_side_lengths(&[[0, 1, 2]], &x, &y).unwrap();
        assert!(approx(lengths[0][0], 3.0));
        assert!(approx(lengths[0][1], 5.0));
        assert!(approx(lengths[0][2], 4.0));
    }

    #[test]
    fn nodes_to_elements_averages_vertices() {
        let field = [0.0, 3.0, 6.0];
        let means = nodes_to_elements(&field, &[[0, 1, 2]]).unwrap();
        assert!(approx(means[0], 3.0));
    }

    #[test]
    fn nodes_to_elements_rejects_bad_index() {
        let err = nodes_to_elements(&[0.0, 1.0], &[[0, 1, 2]]).unwrap_err();
        assert!(matches!(err, GridError::NodeIndexOutOfRange { node: 2, .. }));
    }

    #[test]
    fn ccw_winding_flips_clockwise_elements() {
        let x = [0.0, 1.0, 0.0];
        let y = [0.0, 0.0, 1.0];
        assert_eq!(ccw_winding([0, 2, 1], &x, &y), [0, 1, 2]);
        assert_eq!(ccw_winding([0, 1, 2], &x, &y), [0, 1, 2]);
    }

    #[test]
    fn rotation_is_clockwise_about_origin() {
        let (xr, yr) = rotate_points(&[0.0], &[0.0], (1.0, 1.0), 45.0).unwrap();
        assert!(approx(xr[0], 1.0 - 2.0_f64.sqrt()));
        assert!(approx(yr[0], 1.0));
    }
}
