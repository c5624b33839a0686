//! Random closed contours (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler for closed, star-shaped, counter-clockwise
//!   contours used by the property tests and benches. Star-shaped around the
//!   sampling center means simple (non-self-intersecting), which is all the
//!   engine's input contract asks for.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   and radial jitter, emit vertices in sorted-angle order (CCW by
//!   construction), then repeat the first vertex to close the loop.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use super::point::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ContourCfg {
    /// Number of distinct vertices (the closing repeat is added on top).
    /// Clamped to >= 3.
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49]
    /// so sorted-angle order survives the jitter.
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude): radii are `base_radius * (1 + u)`
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius around the center.
    pub base_radius: f64,
    /// Contour center (the star-shape anchor).
    pub center: Point2,
}

impl Default for ContourCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Point2::new(0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a closed CCW contour via radial jitter around `cfg.center`.
///
/// The returned sequence has `vertex_count + 1` points, last equal to first,
/// ready for [`super::SectionProps::from_contour`]. Positive area is
/// guaranteed by the CCW emission order.
pub fn draw_closed_contour(cfg: ContourCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);

    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut pts: Vec<Point2> = angles
        .into_iter()
        .map(|th| {
            let u = rng.gen::<f64>() * 2.0 - 1.0;
            let r = r0 * (1.0 + rj * u);
            cfg.center + Point2::new(r * th.cos(), r * th.sin())
        })
        .collect();
    let first = pts[0];
    pts.push(first);
    pts
}
