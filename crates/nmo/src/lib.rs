//! Nested mirror optics (NMO): layout of confocal elliptical mirror shells.
//!
//! A nested mirror optic is a stack of coaxial elliptical shells sharing two
//! foci on the beam axis. Starting from one point on the outermost shell, each
//! inner shell is chosen so that the ray from the first focus that grazes the
//! trailing edge of one shell grazes the leading edge of the next. The result
//! is the half-aperture of every shell at one extraction plane.
//!
//! Layout
//! - `conic`: focal pair, mirror span, squared-radius profile and its fit.
//! - `chain`: the iterative solver and its error type.
//! - `report`: text report of a solve (no computation of its own).
//! - `api`: flat scalar entry points.
//!
//! Logging
//! - The solver emits `tracing` events (per-mirror coefficients at DEBUG). It
//!   never installs a subscriber; binaries decide what is shown.

pub mod api;
pub mod chain;
pub mod conic;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use chain::{
    solve_chain, solve_shells, ChainCfg, ChainError, ChainInputs, DomainStage, MirrorChain,
    MirrorShell,
};
pub use conic::{ConicError, ConicProfile, FocalPair, MirrorSpan};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chain::{
        solve_chain, solve_shells, ChainCfg, ChainError, ChainInputs, MirrorChain, MirrorShell,
    };
    pub use crate::conic::{ConicProfile, FocalPair, MirrorSpan};
    pub use crate::report::{divergence_range_deg, Report};
    pub use nalgebra::Vector2 as Vec2;
}
