//! # rmsd-map-core
//!
//! Geometry and ordering primitives for exploring conformer clusters of
//! small molecules over precomputed 2D embeddings.
//!
//! The central operation is path ordering: given a hand-drawn polyline over
//! a 2D point cloud, project every cloud point onto its nearest position
//! along the line and sort the cloud by that arc-length coordinate,
//! producing a traversal order usable as a pseudo-trajectory of conformers.
//!
//! - **Types**: [`Polyline`], [`EmbeddedCloud`], [`PathTrace`]
//! - **Operations**: [`order_points_along_path`], [`representative_point_idx`]
//! - **Errors**: [`PathError`] with eager validate-then-compute semantics
//!
//! Clustering, dimensionality reduction, and molecular alignment stay
//! upstream; this crate only consumes their outputs (embedding coordinates
//! and cluster labels).

pub mod cloud;
pub mod errors;
pub mod median;
pub mod polyline;
pub mod projector;
pub mod trace;

// Re-export commonly used items
pub use cloud::EmbeddedCloud;
pub use errors::{PathError, Result};
pub use median::{geometric_median, representative_point_idx};
pub use polyline::{PathProjection, Point2, Polyline};
pub use projector::order_points_along_path;
pub use trace::PathTrace;
