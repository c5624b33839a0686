//! Plain rectangular section.

use crate::error::ContourError;
use crate::geometry::{Distance, Point2, SectionProps};

/// Solid rectangle, anchored at the origin (lower-left corner).
///
/// ```text
///     ┌─────────┐
///   h │         │
///     └─────────┘
///         bw
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rectangular {
    /// Width.
    pub bw: Distance,
    /// Overall height.
    pub h: Distance,
}

impl Rectangular {
    /// Closed CCW outline: origin, right, top-right, top-left, origin.
    pub fn outline(&self) -> Vec<Point2> {
        let bw = self.bw.value();
        let h = self.h.value();
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(bw, 0.0),
            Point2::new(bw, h),
            Point2::new(0.0, h),
            Point2::new(0.0, 0.0),
        ]
    }

    pub fn props(&self) -> Result<SectionProps, ContourError> {
        SectionProps::from_contour(&self.outline())
    }
}
