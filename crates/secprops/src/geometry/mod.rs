//! 2D contour geometry and the property engine.
//!
//! Purpose
//! - `Point2`/`Distance`: leaf value types for vertices and named dimensions.
//! - `GreenEdge`: transient per-segment value feeding the accumulation.
//! - `SectionProps`: the engine; one constructing call produces an immutable,
//!   fully populated result.
//! - `rand`: deterministic closed-contour sampler for tests and benches.
//!
//! Code cross-refs: `edge::GreenEdge`, `props::SectionProps`

pub mod rand;

mod edge;
mod point;
mod props;

pub use edge::GreenEdge;
pub use point::{Distance, Point2};
pub use props::SectionProps;
