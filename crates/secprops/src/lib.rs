//! Planar section properties via Green's theorem.
//!
//! Computes area, first/second moments, centroid, centroidal inertias,
//! envelope extrema, and elastic section moduli for a closed polygonal
//! outline, by accumulating closed-form line integrals edge by edge.
//!
//! Conventions
//! - The contour is an ordered vertex sequence; each consecutive pair is one
//!   integration edge. No closing edge is added: a contour that is not
//!   explicitly closed (last point == first) integrates an open boundary.
//! - Winding determines the sign of area and moments. The section templates
//!   in [`sections`] all use the same counter-clockwise convention; direct
//!   callers must pick one winding and stick to it.

pub mod error;
pub mod geometry;
pub mod sections;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ContourError;
pub use geometry::{Distance, GreenEdge, SectionProps};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ContourError;
    pub use crate::geometry::rand::{draw_closed_contour, ContourCfg, ReplayToken};
    pub use crate::geometry::{Distance, GreenEdge, Point2, SectionProps};
    pub use crate::sections::{ISection, ISectionCorbel, Rectangular, TSection, TSectionCorbel};
}
