//! Mesh topology: connectivity construction, adjacency arenas, solver
//! metrics, and boundary tracing.
//!
//! [`Connectivity::build`] is the single validation boundary for malformed
//! topology (out-of-range indices, repeated vertices, non-manifold edges);
//! everything downstream trusts a validated [`Connectivity`].

pub mod adjacency;
pub mod boundary;
pub mod connectivity;
pub mod metrics;

pub use adjacency::{NodeElementFans, connected_elements, connected_nodes, is_under_connected};
pub use boundary::{attached_boundary_nodes, boundary_polygons, boundary_polygons_from_triangles};
pub use connectivity::{Connectivity, NO_ELEMENT};
pub use metrics::GridMetrics;
