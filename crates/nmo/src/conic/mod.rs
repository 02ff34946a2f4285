//! Axial conic geometry for a single mirror shell.
//!
//! Purpose
//! - Describe a rotationally symmetric elliptical shell by its squared-radius
//!   polynomial `r² = k1 + k2·z + k3·z²` (`ConicProfile`).
//! - Fit that profile through one point given the two foci on the optical axis.
//! - Evaluate radii with explicit radicand checks (no silent NaN).
//!
//! Conventions
//! - Points are `Vector2<f64>` holding `(z, r)`: axial coordinate, then radius.
//! - `FocalPair { start, end }` is `(LStart, LEnd)`; the ellipse centre sits at
//!   `end − c` with `c = (end − start)/2`.
//!
//! References
//! - O. Zimmer, "Multi-mirror imaging optics for low-loss transport of divergent
//!   neutron beams and tailored wavelength spectra", arXiv:1611.07353 (2016).

pub(crate) mod cfg;
mod fit;
mod types;

pub use fit::checked_sqrt;
pub use types::{ConicError, ConicProfile, FocalPair, MirrorSpan};

#[cfg(test)]
mod tests;
