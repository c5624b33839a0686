//! Per-segment value for the Green-theorem accumulation.

use super::point::Point2;

/// One integration edge `p0 -> p1` of the contour, in the form the
/// closed-form antiderivatives are written in: start coordinates plus
/// deltas. Transient; built per consecutive vertex pair and discarded.
#[derive(Clone, Copy, Debug)]
pub struct GreenEdge {
    pub x0: f64,
    pub y0: f64,
    pub dx: f64,
    pub dy: f64,
}

impl GreenEdge {
    /// Edge from `p0` to `p1`.
    #[inline]
    pub fn between(p0: Point2, p1: Point2) -> Self {
        Self {
            x0: p0.x,
            y0: p0.y,
            dx: p1.x - p0.x,
            dy: p1.y - p0.y,
        }
    }
}
