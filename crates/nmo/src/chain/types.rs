//! Inputs, configuration and results of a chain solve.

use nalgebra::Vector2;

use super::error::ChainError;
use crate::conic::{cfg::RADICAND_EPS, ConicProfile, FocalPair, MirrorSpan};

/// Numeric configuration of the solver.
#[derive(Clone, Copy, Debug)]
pub struct ChainCfg {
    /// Negative radius radicands down to `-eps_radicand` evaluate as zero.
    /// Default `0`: every negative radicand is a domain error.
    pub eps_radicand: f64,
}

impl Default for ChainCfg {
    fn default() -> Self {
        Self {
            eps_radicand: RADICAND_EPS,
        }
    }
}

/// Everything one solve needs. Lengths in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainInputs {
    /// Number of shells to compute (≥ 1).
    pub number: usize,
    /// `(z0, r0)` on the outermost shell.
    pub seed: Vector2<f64>,
    /// Axial plane at which every `b` is sampled.
    pub z_extract: f64,
    pub focal: FocalPair,
    pub span: MirrorSpan,
}

impl ChainInputs {
    #[inline]
    pub fn new(
        number: usize,
        seed: Vector2<f64>,
        z_extract: f64,
        focal: FocalPair,
        span: MirrorSpan,
    ) -> Self {
        Self {
            number,
            seed,
            z_extract,
            focal,
            span,
        }
    }

    /// Reject inputs that cannot enter the arithmetic at all.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.number == 0 {
            return Err(ChainError::invalid("need at least one mirror"));
        }
        let scalars = [
            ("z0", self.seed.x),
            ("r0", self.seed.y),
            ("z_extract", self.z_extract),
            ("focus start", self.focal.start),
            ("focus end", self.focal.end),
            ("span start", self.span.start),
            ("span end", self.span.end),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ChainError::invalid(format!("{name} must be finite")));
        }
        if self.focal.is_degenerate() {
            return Err(ChainError::invalid("focal points coincide"));
        }
        if self.span.end == self.focal.start {
            return Err(ChainError::invalid(
                "trailing edge coincides with the first focus",
            ));
        }
        Ok(())
    }
}

/// One computed shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MirrorShell {
    pub index: usize,
    /// Point the ellipse was fitted through: the seed for index 0, the
    /// projected leading-edge point afterwards.
    pub anchor: Vector2<f64>,
    pub profile: ConicProfile,
    /// Half-aperture at the extraction plane.
    pub b: f64,
    /// Radius at the trailing edge of the span.
    pub r_trailing: f64,
}

/// Half-apertures at the extraction plane, index 0 outermost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MirrorChain {
    b: Vec<f64>,
}

impl MirrorChain {
    /// Project detailed shells onto their `b` values.
    pub fn from_shells(shells: &[MirrorShell]) -> Result<Self, ChainError> {
        let mut b = Vec::new();
        b.try_reserve_exact(shells.len())
            .map_err(|_| ChainError::Allocation {
                mirrors: shells.len(),
            })?;
        b.extend(shells.iter().map(|s| s.b));
        Ok(Self { b })
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.b
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.b.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }
    #[inline]
    pub fn outermost(&self) -> Option<f64> {
        self.b.first().copied()
    }
    #[inline]
    pub fn innermost(&self) -> Option<f64> {
        self.b.last().copied()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.b.iter()
    }
    pub fn into_vec(self) -> Vec<f64> {
        self.b
    }
}

impl AsRef<[f64]> for MirrorChain {
    fn as_ref(&self) -> &[f64] {
        &self.b
    }
}

impl std::ops::Index<usize> for MirrorChain {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.b[i]
    }
}

impl<'a> IntoIterator for &'a MirrorChain {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.b.iter()
    }
}
