//! Ellipse through one point with prescribed foci on the axis.

use nalgebra::Vector2;

use super::cfg::DISCRIMINANT_EPS;
use super::types::{ConicError, ConicProfile, FocalPair};

/// Square root with a small negative slack; `None` for anything below `-eps` or NaN.
#[inline]
pub fn checked_sqrt(x: f64, eps: f64) -> Option<f64> {
    if x >= 0.0 {
        Some(x.sqrt())
    } else if x >= -eps {
        Some(0.0)
    } else {
        None
    }
}

impl ConicProfile {
    /// Fit the ellipse with foci `focal` passing through `anchor = (z, r)`.
    ///
    /// With `u` the anchor's axial offset from the ellipse centre, the point
    /// satisfies `u²/a² + r²/(a² − c²) = 1`, a quadratic in `a²` whose larger
    /// root is the physical one (`a > |c|`):
    /// `a² = (S + sqrt(S² − 4c²u²)) / 2` with `S = u² + c² + r²`.
    pub fn fit(focal: FocalPair, anchor: Vector2<f64>) -> Result<Self, ConicError> {
        if focal.is_degenerate() {
            return Err(ConicError::DegenerateFoci);
        }
        let c = focal.half_separation();
        let shift = c - focal.end;
        let u = anchor.x + shift;
        let r = anchor.y;
        let s = u * u + c * c + r * r;
        let disc = s * s - 4.0 * c * c * u * u;
        let root = checked_sqrt(disc, DISCRIMINANT_EPS)
            .ok_or(ConicError::NegativeDiscriminant { value: disc })?;
        let a_sq = (s + root) / 2.0;
        let a = checked_sqrt(a_sq, 0.0).ok_or(ConicError::NegativeSemiMajor { value: a_sq })?;

        let k3 = c * c / a_sq - 1.0;
        let k2 = 2.0 * k3 * shift;
        let k1 = k3 * shift * shift - c * c + a_sq;
        Ok(Self { k1, k2, k3, a })
    }
}
