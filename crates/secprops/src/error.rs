//! Error taxonomy for contour consumption.
//!
//! Only input arity is a hard failure. Degenerate (zero-area) contours are
//! not intercepted: centroid and modulus derivations divide by the
//! accumulated area and propagate IEEE inf/NaN, and a reverse-wound contour
//! yields globally flipped signs. Both are documented hazards on
//! [`crate::geometry::SectionProps`], not error variants.

use thiserror::Error;

/// Failure raised before any accumulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContourError {
    /// The vertex sequence has fewer than 2 points, so there is no edge to
    /// integrate over.
    #[error("contour must contain at least 2 points (got {0})")]
    TooFewPoints(usize),
}
