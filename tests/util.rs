#![allow(dead_code)]

/// Two rows of four right triangles over a 2x2 grid of unit squares.
///
/// ```text
/// 4---5---8
/// | \ | / |
/// 2---3---7
/// | / | \ |
/// 0---1---6
/// ```
///
/// Nine nodes, eight elements of area 0.5, sixteen edges. Node 3 is the
/// only interior node.
pub struct TwoRowGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub tri: Vec<[usize; 3]>,
}

pub fn two_row_grid() -> TwoRowGrid {
    TwoRowGrid {
        x: vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0, 2.0, 2.0],
        y: vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 0.0, 1.0, 2.0],
        tri: vec![
            [0, 2, 1],
            [1, 2, 3],
            [2, 5, 3],
            [2, 4, 5],
            [1, 3, 7],
            [1, 7, 6],
            [3, 5, 7],
            [7, 5, 8],
        ],
    }
}

pub fn assert_close(got: f64, want: f64, tol: f64) {
    assert!(
        (got - want).abs() < tol,
        "got {got}, want {want} (tol {tol})"
    );
}

pub fn assert_all_close(got: &[f64], want: &[f64], tol: f64) {
    assert_eq!(got.len(), want.len(), "length mismatch");
    for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
        assert!(
            (g - w).abs() < tol,
            "index {i}: got {g}, want {w} (tol {tol})"
        );
    }
}
