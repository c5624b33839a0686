//! I-shaped sections, symmetric about the y axis, bottom flange on y = 0.

use crate::error::ContourError;
use crate::geometry::{Distance, Point2, SectionProps};

/// I-section without corbels.
///
/// ```text
///   ┌───────────────┐
///   │               │ hf
///   └────┐     ┌────┘
///        │     │ bw      h = overall height
///    ┌───┘     └───┐
///    │             │ hi
///    └─────────────┘
///          bi
///   |←──── bf ────→|
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ISection {
    /// Top flange width.
    pub bf: Distance,
    /// Top flange height.
    pub hf: Distance,
    /// Web width.
    pub bw: Distance,
    /// Overall height.
    pub h: Distance,
    /// Bottom flange width.
    pub bi: Distance,
    /// Bottom flange height.
    pub hi: Distance,
}

impl ISection {
    /// Closed CCW outline, 13 points, starting at the bottom flange's
    /// bottom-left.
    pub fn outline(&self) -> Vec<Point2> {
        let bf = self.bf.value();
        let hf = self.hf.value();
        let bw = self.bw.value();
        let h = self.h.value();
        let bi = self.bi.value();
        let hi = self.hi.value();
        vec![
            Point2::new(-bi / 2.0, 0.0),
            Point2::new(bi / 2.0, 0.0),
            Point2::new(bi / 2.0, hi),
            Point2::new(bw / 2.0, hi),
            Point2::new(bw / 2.0, h - hf),
            Point2::new(bf / 2.0, h - hf),
            Point2::new(bf / 2.0, h),
            Point2::new(-bf / 2.0, h),
            Point2::new(-bf / 2.0, h - hf),
            Point2::new(-bw / 2.0, h - hf),
            Point2::new(-bw / 2.0, hi),
            Point2::new(-bi / 2.0, hi),
            Point2::new(-bi / 2.0, 0.0),
        ]
    }

    pub fn props(&self) -> Result<SectionProps, ContourError> {
        SectionProps::from_contour(&self.outline())
    }
}

/// I-section with triangular corbels at the web-flange junctions.
///
/// A side's corbel pair is emitted only when both that side's width and
/// height are strictly positive; otherwise the corner degenerates to the
/// single vertex of [`ISection`].
#[derive(Clone, Copy, Debug)]
pub struct ISectionCorbel {
    pub bf: Distance,
    pub hf: Distance,
    pub bw: Distance,
    pub h: Distance,
    pub bi: Distance,
    pub hi: Distance,
    /// Top corbel width.
    pub bmissup: Distance,
    /// Top corbel height.
    pub hmissup: Distance,
    /// Bottom corbel width.
    pub bmisinf: Distance,
    /// Bottom corbel height.
    pub hmisinf: Distance,
}

impl ISectionCorbel {
    /// Closed CCW outline. 13 points with both corbels degenerate, up to 17
    /// with both present.
    pub fn outline(&self) -> Vec<Point2> {
        let bf = self.bf.value();
        let hf = self.hf.value();
        let bw = self.bw.value();
        let h = self.h.value();
        let bi = self.bi.value();
        let hi = self.hi.value();
        let bmissup = self.bmissup.value();
        let hmissup = self.hmissup.value();
        let bmisinf = self.bmisinf.value();
        let hmisinf = self.hmisinf.value();
        let top_corbel = bmissup > 0.0 && hmissup > 0.0;
        let bottom_corbel = bmisinf > 0.0 && hmisinf > 0.0;

        let mut points = Vec::with_capacity(17);

        // Bottom flange.
        points.push(Point2::new(-bi / 2.0, 0.0));
        points.push(Point2::new(bi / 2.0, 0.0));
        points.push(Point2::new(bi / 2.0, hi));

        // Bottom corbel, right side.
        if bottom_corbel {
            points.push(Point2::new(bw / 2.0 + bmisinf, hi));
            points.push(Point2::new(bw / 2.0, hi + hmisinf));
        } else {
            points.push(Point2::new(bw / 2.0, hi));
        }

        // Web up the right side.
        if top_corbel {
            points.push(Point2::new(bw / 2.0, h - hf - hmissup));
            points.push(Point2::new(bw / 2.0 + bmissup, h - hf));
        } else {
            points.push(Point2::new(bw / 2.0, h - hf));
        }

        // Top flange.
        points.push(Point2::new(bf / 2.0, h - hf));
        points.push(Point2::new(bf / 2.0, h));
        points.push(Point2::new(-bf / 2.0, h));
        points.push(Point2::new(-bf / 2.0, h - hf));

        // Top corbel, left side.
        if top_corbel {
            points.push(Point2::new(-bw / 2.0 - bmissup, h - hf));
            points.push(Point2::new(-bw / 2.0, h - hf - hmissup));
        } else {
            points.push(Point2::new(-bw / 2.0, h - hf));
        }

        // Web down the left side, then bottom corbel.
        if bottom_corbel {
            points.push(Point2::new(-bw / 2.0, hi + hmisinf));
            points.push(Point2::new(-bw / 2.0 - bmisinf, hi));
        } else {
            points.push(Point2::new(-bw / 2.0, hi));
        }

        // Close the loop.
        points.push(Point2::new(-bi / 2.0, hi));
        points.push(Point2::new(-bi / 2.0, 0.0));

        points
    }

    pub fn props(&self) -> Result<SectionProps, ContourError> {
        SectionProps::from_contour(&self.outline())
    }
}
