//! Section properties of a closed polygonal contour (Green's theorem).
//!
//! Purpose
//! - Accumulate the six raw line integrals `a, sx, sy, ix, iy, ixy` over the
//!   `n-1` consecutive edges of an ordered vertex sequence, then derive the
//!   centroid, centroidal inertias (parallel axis), envelope extrema, and
//!   elastic section moduli in one pass.
//!
//! Assumptions and conventions
//! - The contour is used as provided: no auto-closing, no winding
//!   normalization, no self-intersection check. An unclosed contour simply
//!   lacks its closing edge in the sums.
//! - Winding fixes the sign of `a` and every moment; reversing the vertex
//!   order negates all of them (centroid coordinates are unaffected since
//!   numerator and denominator flip together). Callers supply one
//!   consistent winding; the templates in [`crate::sections`] are CCW.
//! - A zero-area contour makes the centroid and modulus divisions undefined
//!   (IEEE inf/NaN). This is deliberate: degeneracy is the caller's range
//!   check, not something the engine clamps.

use super::edge::GreenEdge;
use super::point::Point2;
use crate::error::ContourError;

/// Running sums of the six raw integrals about the global origin.
#[derive(Clone, Copy, Debug, Default)]
struct Integrals {
    a: f64,
    sx: f64,
    sy: f64,
    ix: f64,
    iy: f64,
    ixy: f64,
}

impl Integrals {
    /// Add one edge's trapezoidal-strip contribution to every sum.
    ///
    /// These are the exact antiderivatives of `dA`, `y dA`, `x dA`, `y² dA`,
    /// `x² dA`, `xy dA` restricted to the strip under a single edge. The
    /// formula structure (Horner-like grouping) is kept as-is; regrouping
    /// changes rounding on thin or degenerate strips.
    fn accumulate(&mut self, e: GreenEdge) {
        let GreenEdge { x0, y0, dx, dy } = e;
        self.a += (x0 + dx / 2.0) * dy;
        self.sx += (x0 * (y0 + dy / 2.0) + dx * (y0 / 2.0 + dy / 3.0)) * dy;
        self.sy += (x0 * (x0 + dx) + dx * dx / 3.0) * dy / 2.0;
        self.ix += (x0 * (y0 * (dy + y0) + dy * dy / 3.0)
            + dx * (y0 * (y0 / 2.0 + 2.0 * dy / 3.0) + dy * dy / 4.0))
            * dy;
        self.iy += (dx * dx * dx / 4.0 + x0 * (dx * dx + x0 * (3.0 * dx / 2.0 + x0))) * dy / 3.0;
        self.ixy += (x0 * (x0 * (y0 + dy / 2.0) + dx * (y0 + 2.0 * dy / 3.0))
            + dx * dx * (y0 / 3.0 + dy / 4.0))
            * dy
            / 2.0;
    }
}

/// Envelope extrema of the vertex set, seeded from the first vertex.
#[derive(Clone, Copy, Debug)]
struct Envelope {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Envelope {
    fn scan(contour: &[Point2]) -> Self {
        let first = contour[0];
        let mut env = Self {
            xmin: first.x,
            xmax: first.x,
            ymin: first.y,
            ymax: first.y,
        };
        for p in &contour[1..] {
            // Ties keep the latest value; immaterial for f64 extrema.
            if p.x >= env.xmax {
                env.xmax = p.x;
            }
            if p.x <= env.xmin {
                env.xmin = p.x;
            }
            if p.y >= env.ymax {
                env.ymax = p.y;
            }
            if p.y <= env.ymin {
                env.ymin = p.y;
            }
        }
        env
    }
}

/// Immutable section-property aggregate.
///
/// Every field is computed once by [`SectionProps::from_contour`]; there is
/// no partial or lazy state. Raw integrals (`a` through `ixy`) are about the
/// global origin; `ixg, iyg, ixyg` are centroidal and thus translation
/// invariant.
///
/// Sign convention: `y1` is the distance from the centroid to the lower
/// fiber with a forced negative sign, `y2` the (positive) distance to the
/// upper fiber; `w1 = ixg / y1` inherits the negative sign, `w2` does not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionProps {
    /// Algebraic area (sign follows winding).
    pub a: f64,
    /// First moment about the x axis (origin).
    pub sx: f64,
    /// First moment about the y axis (origin).
    pub sy: f64,
    /// Second moment about the x axis (origin).
    pub ix: f64,
    /// Second moment about the y axis (origin).
    pub iy: f64,
    /// Product of inertia (origin).
    pub ixy: f64,
    /// Centroid x: `sy / a`.
    pub xg: f64,
    /// Centroid y: `sx / a`.
    pub yg: f64,
    /// Centroidal second moment about x: `ix - a·yg²`.
    pub ixg: f64,
    /// Centroidal second moment about y: `iy - a·xg²`.
    pub iyg: f64,
    /// Centroidal product of inertia: `ixy - a·xg·yg`.
    pub ixyg: f64,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    /// Envelope height `|ymax - ymin|`.
    pub height: f64,
    /// Envelope width `|xmax - xmin|`.
    pub base: f64,
    /// Centroid-to-lower-fiber distance, forced negative.
    pub y1: f64,
    /// Centroid-to-upper-fiber distance, positive.
    pub y2: f64,
    /// Lower section modulus `ixg / y1` (negative with `y1`).
    pub w1: f64,
    /// Upper section modulus `ixg / y2`.
    pub w2: f64,
}

impl SectionProps {
    /// Compute all properties of an ordered contour.
    ///
    /// Each consecutive vertex pair is one integration edge; the sequence is
    /// conventionally closed (last point equals first) but that is not
    /// enforced here. Errors only on fewer than 2 points.
    pub fn from_contour(contour: &[Point2]) -> Result<Self, ContourError> {
        if contour.len() < 2 {
            return Err(ContourError::TooFewPoints(contour.len()));
        }

        let mut sums = Integrals::default();
        for pair in contour.windows(2) {
            sums.accumulate(GreenEdge::between(pair[0], pair[1]));
        }

        let xg = sums.sy / sums.a;
        let yg = sums.sx / sums.a;
        let ixg = sums.ix - yg * yg * sums.a;
        let iyg = sums.iy - xg * xg * sums.a;
        let ixyg = sums.ixy - xg * yg * sums.a;

        let env = Envelope::scan(contour);
        let height = (env.ymax - env.ymin).abs();
        let base = (env.xmax - env.xmin).abs();
        // Lower-fiber sign convention folded into the derivation: y1 is
        // negative from the start and w1 divides by it, so the correction is
        // applied exactly once.
        let y1 = -(yg - env.ymin).abs();
        let y2 = (env.ymax - yg).abs();
        let w1 = ixg / y1;
        let w2 = ixg / y2;

        Ok(Self {
            a: sums.a,
            sx: sums.sx,
            sy: sums.sy,
            ix: sums.ix,
            iy: sums.iy,
            ixy: sums.ixy,
            xg,
            yg,
            ixg,
            iyg,
            ixyg,
            xmin: env.xmin,
            xmax: env.xmax,
            ymin: env.ymin,
            ymax: env.ymax,
            height,
            base,
            y1,
            y2,
            w1,
            w2,
        })
    }
}
