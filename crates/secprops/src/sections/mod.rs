//! Cross-section outline templates.
//!
//! Purpose
//! - Translate a small set of named dimensions into the closed,
//!   counter-clockwise vertex loop of a standard cross-section, ready for
//!   [`crate::geometry::SectionProps`]. Pure geometry: no iteration or
//!   accumulation logic lives here.
//!
//! Each template is a typed configuration struct (one [`Distance`] field per
//! required dimension, compile-time-checked construction), with `outline()`
//! producing the vertex loop and `props()` running the engine on it.
//!
//! Dimension values are expected non-negative; range and sanity checks are
//! the caller's responsibility.
//!
//! [`Distance`]: crate::geometry::Distance

mod i_section;
mod rectangular;
mod t_section;

pub use i_section::{ISection, ISectionCorbel};
pub use rectangular::Rectangular;
pub use t_section::{TSection, TSectionCorbel};
