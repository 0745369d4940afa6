//! Degenerate-element detection.
//!
//! Sliver and fully collapsed (zero-area) elements are common in real coastal
//! meshes, so the numeric kernels tolerate them: they contribute zero area
//! and are excluded from weighted aggregates. Callers that would rather fail
//! fast can run [`check_degenerate_elements`] with
//! [`DegenerateHandling::Error`] before handing a mesh downstream.

use crate::error::GridError;
use crate::geometry::primitives::{check_len, signed_area};

/// Behavior when a zero-area element is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateHandling {
    /// Skip reporting entirely.
    Ignore,
    /// Log a warning per zero-area element.
    Warn,
    /// Return an error on the first zero-area element.
    Error,
}

/// Scan a triangulation for zero-area elements.
///
/// Returns the indices of all zero-area elements (empty under
/// [`DegenerateHandling::Error`], which fails on the first one found).
pub fn check_degenerate_elements(
    x: &[f64],
    y: &[f64],
    triangles: &[[usize; 3]],
    handling: DegenerateHandling,
) -> Result<Vec<usize>, GridError> {
    check_len("node y coordinates", x.len(), y.len())?;
    let mut degenerate = Vec::new();
    for (k, t) in triangles.iter().enumerate() {
        let s = signed_area(
            [x[t[0]], y[t[0]]],
            [x[t[1]], y[t[1]]],
            [x[t[2]], y[t[2]]],
        );
        if s == 0.0 {
            match handling {
                DegenerateHandling::Ignore => {}
                DegenerateHandling::Warn => {
                    log::warn!("element {k} has zero area (nodes {t:?})");
                }
                DegenerateHandling::Error => {
                    return Err(GridError::DegenerateElement { element: k });
                }
            }
            degenerate.push(k);
        }
    }
    Ok(degenerate)
}
