//! # fvcom-grid
//!
//! Connectivity, geometry, and post-processing tools for unstructured
//! triangular ocean-model grids.
//!
//! The crate takes a triangulation as plain parallel slices (node
//! coordinates plus a `[usize; 3]` element table) and derives everything a
//! finite-volume post-processor needs from it:
//!
//! - **Connectivity**: unique edges, element/edge incidence, boundary
//!   classification ([`topology::Connectivity`], [`topology::GridMetrics`]).
//! - **Node fans**: elements around every node, in input order or walked
//!   counter-clockwise ([`topology::NodeElementFans`]).
//! - **Control volumes**: median-dual areas for node-centred budgets
//!   ([`control_volume`]).
//! - **Boundary polygons**: closed node loops around the exterior and any
//!   islands ([`topology::boundary_polygons`]).
//! - **Gradients**: least-squares nodal gradients of a scalar field
//!   ([`gradient::trigradient`]).
//! - **Sampling and clipping**: nearest-node queries, transect extraction,
//!   rectangular and radius-based subsetting ([`sampling`], [`clip`]).
//! - **Geodesy**: OSGB36 national grid to WGS84 conversion ([`geodesy`]).
//!
//! All indices are zero-based. Fallible operations return
//! [`Result<_, GridError>`](error::GridError); functions that take a
//! triangulation validate node indices up front so downstream code can index
//! without bounds anxiety.
//!
//! ## Example
//!
//! ```
//! use fvcom_grid::prelude::*;
//!
//! // Two triangles sharing the diagonal of a unit square.
//! let x = [0.0, 1.0, 0.0, 1.0];
//! let y = [0.0, 0.0, 1.0, 1.0];
//! let tri = [[0, 1, 2], [1, 3, 2]];
//!
//! let conn = Connectivity::build(4, &tri)?;
//! assert_eq!(conn.n_edges(), 5);
//!
//! let cv = control_volumes(&x, &y, &tri)?;
//! let total: f64 = cv.node_areas.iter().sum();
//! assert!((total - 1.0).abs() < 1e-12);
//! # Ok::<(), fvcom_grid::error::GridError>(())
//! ```
//!
//! ## Feature flags
//!
//! - `rayon`: parallelise the per-node loops in [`control_volumes`]
//!   (control-volume assembly) and [`gradient::trigradient`].
//!
//! [`control_volumes`]: control_volume::control_volumes

pub mod clip;
pub mod control_volume;
pub mod error;
pub mod geodesy;
pub mod geometry;
pub mod gradient;
pub mod sampling;
pub mod topology;

/// Convenient re-exports of the crate's main entry points.
pub mod prelude {
    pub use crate::clip::{Extents, clip_domain, clip_triangulation};
    pub use crate::control_volume::{
        ControlVolumes, control_volumes, element_control_area, node_control_area,
    };
    pub use crate::error::GridError;
    pub use crate::geodesy::{osgb36_to_wgs84, osgb36_to_wgs84_batch};
    pub use crate::geometry::{
        DegenerateHandling, check_degenerate_elements, element_areas, element_centers,
        element_side_lengths, nodes_to_elements, rotate_points, triangle_area, triangle_areas,
    };
    pub use crate::gradient::trigradient;
    pub use crate::sampling::{
        LineSample, NearestPoint, find_nearest_point, flat_index_to_subscripts, line_sample,
        mesh_to_grid,
    };
    pub use crate::topology::{
        Connectivity, GridMetrics, NO_ELEMENT, NodeElementFans, attached_boundary_nodes,
        boundary_polygons, boundary_polygons_from_triangles, connected_elements, connected_nodes,
        is_under_connected,
    };
}
