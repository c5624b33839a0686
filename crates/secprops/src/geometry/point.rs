//! Leaf value types: contour vertices and named dimensions.

use nalgebra::Vector2;

/// Contour vertex. `Vector2<f64>` already is an immutable-by-convention
/// coordinate pair with `.x`/`.y` access, so no wrapper type is needed.
pub type Point2 = Vector2<f64>;

/// A named cross-section dimension: a magnitude with a nominal unit label.
///
/// Values are expected non-negative; the templates do no range checking
/// (caller responsibility, see [`crate::sections`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance(pub f64);

impl Distance {
    /// Nominal unit label; purely informational, no conversion anywhere.
    pub const UNIT: &'static str = "cm";

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Distance {
    #[inline]
    fn from(v: f64) -> Self {
        Distance(v)
    }
}
