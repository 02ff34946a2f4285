//! Nested mirror chain: iterative ellipse fitting from the outermost shell inward.
//!
//! Purpose
//! - Given a seed point on the outermost shell, the shared foci and the shared
//!   axial span, derive every inner shell so that a ray from the first focus
//!   grazing the trailing edge of shell k also grazes the leading edge of
//!   shell k+1.
//! - Report each shell's half-aperture `b` at one extraction plane.
//!
//! Why this design
//! - `solve_shells` is the single loop; `solve_chain` only projects it to the
//!   `b` values, so trace output, exports and tests see the same numbers.
//! - Every square root is checked. A negative radicand stops the chain with the
//!   failing mirror index instead of propagating NaN into later shells.
//! - Per-mirror coefficients are emitted as `tracing` DEBUG events; callers pick
//!   the verbosity at runtime through their subscriber.
//!
//! References
//! - O. Zimmer, arXiv:1611.07353 (2016), iterative multi-mirror construction.
//! - Code cross-refs: `conic::{ConicProfile, FocalPair, MirrorSpan}`, `report`.

mod error;
mod solve;
mod types;

pub use error::{ChainError, DomainStage};
pub use solve::{solve_chain, solve_shells};
pub use types::{ChainCfg, ChainInputs, MirrorChain, MirrorShell};
