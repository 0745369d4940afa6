//! Spatial queries over node coordinate arrays.
//!
//! Nearest-point search is a deterministic linear scan (ties go to the
//! first-encountered index). Line sampling marches a straight segment at a
//! step proportional to the local node spacing, snapping each sample to the
//! nearest node and projecting that node back onto the segment, so the
//! returned points lie on the line rather than on the mesh.

use crate::error::GridError;
use crate::geometry::primitives::check_len;

/// Result of a nearest-node query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// Coordinates of the winning node.
    pub x: f64,
    pub y: f64,
    /// Euclidean distance to the query target.
    pub distance: f64,
    /// Node index.
    pub index: usize,
}

/// Result of [`line_sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineSample {
    /// Ordered node indices hit along the segment (consecutive repeats
    /// removed).
    pub indices: Vec<usize>,
    /// Each hit node projected onto the sampling line.
    pub points: Vec<[f64; 2]>,
    /// Cumulative along-line distance of `points`, starting at 0.
    pub cumulative_distance: Vec<f64>,
}

/// Node minimizing Euclidean distance to `(target_x, target_y)`.
///
/// Ties break to the first-encountered (lowest) index; `None` on an empty
/// node set.
pub fn find_nearest_point(
    x: &[f64],
    y: &[f64],
    target_x: f64,
    target_y: f64,
) -> Result<Option<NearestPoint>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    let mut best: Option<NearestPoint> = None;
    for (index, (&px, &py)) in x.iter().zip(y).enumerate() {
        let distance = (px - target_x).hypot(py - target_y);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(NearestPoint {
                x: px,
                y: py,
                distance,
                index,
            });
        }
    }
    Ok(best)
}

/// Sample the node set along the straight segment `start`→`end`.
///
/// The march step at each position is half the spacing between the current
/// nearest node and its own nearest neighbor, so dense regions are sampled
/// densely; the endpoint is always evaluated. Sampled points are the hit
/// nodes projected onto the segment's carrier line, which may fall slightly
/// outside the segment for nodes beyond its ends.
pub fn line_sample(
    x: &[f64],
    y: &[f64],
    start: [f64; 2],
    end: [f64; 2],
) -> Result<LineSample, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    let empty = LineSample {
        indices: Vec::new(),
        points: Vec::new(),
        cumulative_distance: Vec::new(),
    };
    let length = (end[0] - start[0]).hypot(end[1] - start[1]);
    if x.is_empty() || length == 0.0 {
        return Ok(empty);
    }
    let unit = [(end[0] - start[0]) / length, (end[1] - start[1]) / length];
    // Keeps the march finite on meshes much coarser than the segment.
    let min_step = length / 10_000.0;

    let mut indices: Vec<usize> = Vec::new();
    let mut t = 0.0;
    loop {
        let p = [start[0] + t * unit[0], start[1] + t * unit[1]];
        let hit = nearest_index(x, y, p[0], p[1]);
        if indices.last() != Some(&hit) {
            indices.push(hit);
        }
        if t >= length {
            break;
        }
        let spacing = nearest_other_distance(x, y, hit);
        let step = (spacing * 0.5).max(min_step);
        t = (t + step).min(length);
    }

    let points: Vec<[f64; 2]> = indices
        .iter()
        .map(|&n| {
            let along = (x[n] - start[0]) * unit[0] + (y[n] - start[1]) * unit[1];
            [start[0] + along * unit[0], start[1] + along * unit[1]]
        })
        .collect();

    let mut cumulative_distance = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            let q = points[i - 1];
            total += (p[0] - q[0]).hypot(p[1] - q[1]);
        }
        cumulative_distance.push(total);
    }

    Ok(LineSample {
        indices,
        points,
        cumulative_distance,
    })
}

/// Resample a nodal field onto a rectilinear grid by nearest node.
///
/// Returns `grid[j][i]` = field value at the node nearest to
/// `(grid_x[i], grid_y[j])`; empty when the node set is empty.
pub fn mesh_to_grid(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    grid_x: &[f64],
    grid_y: &[f64],
) -> Result<Vec<Vec<f64>>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    check_len("node field values", x.len(), z.len())?;
    if x.is_empty() {
        return Ok(Vec::new());
    }
    Ok(grid_y
        .iter()
        .map(|&gy| {
            grid_x
                .iter()
                .map(|&gx| z[nearest_index(x, y, gx, gy)])
                .collect()
        })
        .collect())
}

/// Row-major flat index into a `(rows, cols)` grid as `(row, col)`
/// subscripts.
///
/// `None` when the index falls outside the grid.
pub fn flat_index_to_subscripts(shape: (usize, usize), index: usize) -> Option<(usize, usize)> {
    let (rows, cols) = shape;
    if cols == 0 || index >= rows * cols {
        return None;
    }
    Some((index / cols, index % cols))
}

fn nearest_index(x: &[f64], y: &[f64], target_x: f64, target_y: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, (&px, &py)) in x.iter().zip(y).enumerate() {
        let distance = (px - target_x).hypot(py - target_y);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

fn nearest_other_distance(x: &[f64], y: &[f64], node: usize) -> f64 {
    let mut best = f64::INFINITY;
    for (index, (&px, &py)) in x.iter().zip(y).enumerate() {
        if index != node {
            best = best.min((px - x[node]).hypot(py - y[node]));
        }
    }
    if best.is_finite() { best } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_to_first_index() {
        // (0.5, 0.75) is equidistant from nodes at (0,1) and (1,1).
        let x = [0.0, 1.0, 0.0, 1.0];
        let y = [0.0, 0.0, 1.0, 1.0];
        let hit = find_nearest_point(&x, &y, 0.5, 0.75).unwrap().unwrap();
        assert_eq!(hit.index, 2);
        assert_eq!((hit.x, hit.y), (0.0, 1.0));
    }

    #[test]
    fn empty_node_set_yields_none() {
        assert!(find_nearest_point(&[], &[], 0.0, 0.0).unwrap().is_none());
    }

    #[test]
    fn line_sample_walks_a_column_of_nodes() {
        let x = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        let y = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let sample = line_sample(&x, &y, [0.0, -0.1], [0.0, 2.1]).unwrap();
        let approx = |a: f64, b: f64| (a - b).abs() < 1e-12;
        assert_eq!(sample.indices, vec![0, 2, 4]);
        for (point, expected) in sample.points.iter().zip([0.0, 1.0, 2.0]) {
            assert!(approx(point[0], 0.0) && approx(point[1], expected));
        }
        for (d, expected) in sample.cumulative_distance.iter().zip([0.0, 1.0, 2.0]) {
            assert!(approx(*d, expected));
        }
    }

    #[test]
    fn degenerate_segment_is_empty() {
        let sample = line_sample(&[0.0], &[0.0], [1.0, 1.0], [1.0, 1.0]).unwrap();
        assert!(sample.indices.is_empty());
    }

    #[test]
    fn flat_index_unravels_row_major() {
        assert_eq!(flat_index_to_subscripts((10, 20), 25), Some((1, 5)));
        assert_eq!(flat_index_to_subscripts((10, 20), 0), Some((0, 0)));
        assert_eq!(flat_index_to_subscripts((10, 20), 199), Some((9, 19)));
        assert_eq!(flat_index_to_subscripts((10, 20), 200), None);
        assert_eq!(flat_index_to_subscripts((10, 0), 0), None);
    }

    #[test]
    fn grid_resampling_picks_nearest_nodes() {
        let x = [0.0, 1.0, 0.0, 1.0];
        let y = [0.0, 0.0, 1.0, 1.0];
        let z = [10.0, 20.0, 30.0, 40.0];
        let grid = mesh_to_grid(&x, &y, &z, &[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(grid, vec![vec![10.0, 20.0], vec![30.0, 40.0]]);
    }
}
