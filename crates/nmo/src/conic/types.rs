//! Value types for focal geometry, mirror span and conic profiles.

use std::fmt;

use nalgebra::Vector2;

use super::fit::checked_sqrt;

/// Axial positions of the two ellipse foci `(LStart, LEnd)`.
///
/// Invariants:
/// - `start != end` (checked by the chain solver before any arithmetic).
/// - `c = (end − start)/2` is signed; formulas only use `c²` and `c − end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalPair {
    pub start: f64,
    pub end: f64,
}

impl FocalPair {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Half focal separation `c`.
    #[inline]
    pub fn half_separation(&self) -> f64 {
        (self.end - self.start) / 2.0
    }

    /// Axial coordinate of the ellipse centre.
    #[inline]
    pub fn center(&self) -> f64 {
        self.end - self.half_separation()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Move `p = (z, r)` along the line through the first focus `(start, 0)`
    /// until it reaches the axial plane `z_target`.
    ///
    /// Pre: `p.x != start`.
    #[inline]
    pub fn project_through_start(&self, p: Vector2<f64>, z_target: f64) -> Vector2<f64> {
        Vector2::new(z_target, p.y * (z_target - self.start) / (p.x - self.start))
    }
}

/// Axial extent `[start, end]` shared by every shell (leading, trailing edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MirrorSpan {
    pub start: f64,
    pub end: f64,
}

impl MirrorSpan {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Squared-radius profile `r² = k1 + k2·z + k3·z²` of one elliptical shell.
///
/// `a` is the semi-major axis the coefficients were derived from; it is kept
/// for diagnostics and does not take part in evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConicProfile {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub a: f64,
}

impl ConicProfile {
    /// Raw polynomial value; may be negative outside the shell's axial extent.
    #[inline]
    pub fn radius_sq(&self, z: f64) -> f64 {
        self.k1 + self.k2 * z + self.k3 * z * z
    }

    /// Radius at `z`, or `OutsideProfile` if the radicand is below `-eps`.
    pub fn radius(&self, z: f64, eps: f64) -> Result<f64, ConicError> {
        let radicand = self.radius_sq(z);
        checked_sqrt(radicand, eps).ok_or(ConicError::OutsideProfile { z, radicand })
    }

    /// `r² − profile(z)` for a point `(z, r)`; zero when the point lies on the shell.
    #[inline]
    pub fn residual(&self, p: Vector2<f64>) -> f64 {
        p.y * p.y - self.radius_sq(p.x)
    }
}

/// Failures of a single fit or evaluation. Values are the offending radicands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConicError {
    /// `start == end`; no ellipse has coincident foci in this parametrisation.
    DegenerateFoci,
    /// `(u² + c² + r²)² − 4c²u²` came out negative.
    NegativeDiscriminant { value: f64 },
    /// The semi-major axis radicand `a²` came out negative.
    NegativeSemiMajor { value: f64 },
    /// The profile has no real radius at `z`.
    OutsideProfile { z: f64, radicand: f64 },
}

impl ConicError {
    pub fn radicand(&self) -> Option<f64> {
        match *self {
            Self::DegenerateFoci => None,
            Self::NegativeDiscriminant { value } | Self::NegativeSemiMajor { value } => Some(value),
            Self::OutsideProfile { radicand, .. } => Some(radicand),
        }
    }
}

impl fmt::Display for ConicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateFoci => write!(f, "focal points coincide"),
            Self::NegativeDiscriminant { value } => {
                write!(f, "semi-major discriminant is negative ({value:e})")
            }
            Self::NegativeSemiMajor { value } => {
                write!(f, "semi-major axis radicand is negative ({value:e})")
            }
            Self::OutsideProfile { z, radicand } => write!(
                f,
                "profile has no real radius at z = {z} m (r² = {radicand:e})"
            ),
        }
    }
}

impl std::error::Error for ConicError {}
