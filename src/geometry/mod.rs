//! Geometry utilities for fvcom-grid.
//!
//! This module provides the low-level triangle primitives (areas, side
//! lengths, centers) that every other component builds on, plus the
//! degenerate-element policy checks.

pub mod primitives;
pub mod quality;

pub use primitives::{
    element_areas, element_centers, element_side_lengths, nodes_to_elements, rotate_points,
    triangle_area, triangle_areas,
};
pub use quality::{DegenerateHandling, check_degenerate_elements};
