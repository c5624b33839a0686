//! T-shaped sections, symmetric about the y axis, web base on y = 0.

use crate::error::ContourError;
use crate::geometry::{Distance, Point2, SectionProps};

/// T-section without corbels.
///
/// ```text
///   ┌───────────────┐
///   │               │ hf
///   └────┐     ┌────┘
///        │     │
///        │     │        h = overall height
///        └─────┘
///          bw
///   |←──── bf ────→|
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TSection {
    /// Flange width.
    pub bf: Distance,
    /// Flange height.
    pub hf: Distance,
    /// Web width.
    pub bw: Distance,
    /// Overall height.
    pub h: Distance,
}

impl TSection {
    /// Closed CCW outline, 9 points, starting at the web's bottom-right.
    pub fn outline(&self) -> Vec<Point2> {
        let bf = self.bf.value();
        let hf = self.hf.value();
        let bw = self.bw.value();
        let h = self.h.value();
        vec![
            Point2::new(bw / 2.0, 0.0),
            Point2::new(bw / 2.0, h - hf),
            Point2::new(bf / 2.0, h - hf),
            Point2::new(bf / 2.0, h),
            Point2::new(-bf / 2.0, h),
            Point2::new(-bf / 2.0, h - hf),
            Point2::new(-bw / 2.0, h - hf),
            Point2::new(-bw / 2.0, 0.0),
            Point2::new(bw / 2.0, 0.0),
        ]
    }

    pub fn props(&self) -> Result<SectionProps, ContourError> {
        SectionProps::from_contour(&self.outline())
    }
}

/// T-section with one triangular corbel pair under the flange.
///
/// The corbels span `bmis` horizontally and `hmis` vertically on each side
/// of the web. Zero-size corbels merely collapse the corbel edges to zero
/// length (they contribute nothing to the integrals).
#[derive(Clone, Copy, Debug)]
pub struct TSectionCorbel {
    pub bf: Distance,
    pub hf: Distance,
    pub bw: Distance,
    pub h: Distance,
    /// Corbel width (horizontal run).
    pub bmis: Distance,
    /// Corbel height (vertical rise).
    pub hmis: Distance,
}

impl TSectionCorbel {
    /// Closed CCW outline, 11 points, starting at the web's bottom-left.
    pub fn outline(&self) -> Vec<Point2> {
        let bf = self.bf.value();
        let hf = self.hf.value();
        let bw = self.bw.value();
        let h = self.h.value();
        let bmis = self.bmis.value();
        let hmis = self.hmis.value();
        vec![
            Point2::new(-bw / 2.0, 0.0),
            Point2::new(bw / 2.0, 0.0),
            Point2::new(bw / 2.0, h - hf - hmis),
            Point2::new(bw / 2.0 + bmis, h - hf),
            Point2::new(bf / 2.0, h - hf),
            Point2::new(bf / 2.0, h),
            Point2::new(-bf / 2.0, h),
            Point2::new(-bf / 2.0, h - hf),
            Point2::new(-bw / 2.0 - bmis, h - hf),
            Point2::new(-bw / 2.0, h - hf - hmis),
            Point2::new(-bw / 2.0, 0.0),
        ]
    }

    pub fn props(&self) -> Result<SectionProps, ContourError> {
        SectionProps::from_contour(&self.outline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_section_reference_values() {
        let t = TSection {
            bf: Distance(60.0),
            hf: Distance(9.0),
            bw: Distance(12.0),
            h: Distance(40.0),
        };
        let outline = t.outline();
        assert_eq!(outline.len(), 9);
        assert_eq!(outline[0], outline[8]);

        let p = t.props().unwrap();
        assert!((p.a - 912.0).abs() < 1e-9);
        assert!((p.sx - 24936.0).abs() < 1e-6);
        assert!(p.sy.abs() < 1e-6);
        assert!((p.ix - 803_344.0).abs() < 1e-6);
        assert!((p.iy - 166_464.0).abs() < 1e-6);
        assert!(p.ixy.abs() < 1e-6);
        assert!(p.xg.abs() < 1e-9);
        assert!((p.yg - 27.34).abs() < 5e-3);
        assert!((p.ixg - 121_541.26).abs() < 0.5);
        assert!((p.iyg - 166_464.0).abs() < 1e-6);
        assert!(p.ixyg.abs() < 1e-6);
        assert!((p.y1 + 27.34).abs() < 5e-3);
        assert!((p.y2 - 12.66).abs() < 5e-3);
        assert!((p.w1 + 4445.21).abs() < 0.5);
        assert!((p.w2 - 9602.21).abs() < 0.5);
        assert!((p.height - 40.0).abs() < 1e-12);
        assert!((p.base - 60.0).abs() < 1e-12);
    }

    #[test]
    fn t_corbel_zero_size_matches_plain_t() {
        let plain = TSection {
            bf: Distance(60.0),
            hf: Distance(9.0),
            bw: Distance(12.0),
            h: Distance(40.0),
        };
        let corbel = TSectionCorbel {
            bf: Distance(60.0),
            hf: Distance(9.0),
            bw: Distance(12.0),
            h: Distance(40.0),
            bmis: Distance(0.0),
            hmis: Distance(0.0),
        };
        // Outlines differ (degenerate corbel vertices remain as zero-length
        // edges) but every integral agrees.
        let p = plain.props().unwrap();
        let c = corbel.props().unwrap();
        assert!((p.a - c.a).abs() < 1e-9);
        assert!((p.ixg - c.ixg).abs() < 1e-6);
        assert!((p.iyg - c.iyg).abs() < 1e-6);
        assert!((p.yg - c.yg).abs() < 1e-9);
    }

    #[test]
    fn t_corbel_adds_area() {
        let corbel = TSectionCorbel {
            bf: Distance(60.0),
            hf: Distance(9.0),
            bw: Distance(12.0),
            h: Distance(40.0),
            bmis: Distance(5.0),
            hmis: Distance(5.0),
        };
        let p = corbel.props().unwrap();
        // Two triangles of 5×5/2 on top of the plain T's 912.
        assert!((p.a - (912.0 + 25.0)).abs() < 1e-9);
        assert!(p.xg.abs() < 1e-9);
    }
}
