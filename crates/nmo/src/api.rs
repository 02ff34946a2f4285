//! Flat scalar entry points.
//!
//! Argument order follows the usual NMO notation:
//! `(number, z0, r0, z_extract, LStart, LEnd, lStart, lEnd)`. Prefer
//! `chain::ChainInputs` in new code; these exist for callers that hold plain numbers.

use nalgebra::Vector2;

use crate::chain::{self, ChainCfg, ChainError, ChainInputs, MirrorChain};
use crate::conic::{FocalPair, MirrorSpan};
use crate::report;

#[allow(clippy::too_many_arguments)]
#[inline]
pub fn chain_inputs(
    number: usize,
    z0: f64,
    r0: f64,
    z_extract: f64,
    focus_start: f64,
    focus_end: f64,
    span_start: f64,
    span_end: f64,
) -> ChainInputs {
    ChainInputs::new(
        number,
        Vector2::new(z0, r0),
        z_extract,
        FocalPair::new(focus_start, focus_end),
        MirrorSpan::new(span_start, span_end),
    )
}

/// Half-apertures of `number` nested shells at `z_extract`, outermost first.
#[allow(clippy::too_many_arguments)]
pub fn solve_chain(
    number: usize,
    z0: f64,
    r0: f64,
    z_extract: f64,
    focus_start: f64,
    focus_end: f64,
    span_start: f64,
    span_end: f64,
) -> Result<MirrorChain, ChainError> {
    let inputs = chain_inputs(
        number, z0, r0, z_extract, focus_start, focus_end, span_start, span_end,
    );
    chain::solve_chain(&inputs, ChainCfg::default())
}

/// As [`solve_chain`], and prints the report to stdout.
#[allow(clippy::too_many_arguments)]
pub fn solve_chain_verbose(
    number: usize,
    z0: f64,
    r0: f64,
    z_extract: f64,
    focus_start: f64,
    focus_end: f64,
    span_start: f64,
    span_end: f64,
) -> Result<MirrorChain, ChainError> {
    let inputs = chain_inputs(
        number, z0, r0, z_extract, focus_start, focus_end, span_start, span_end,
    );
    let stdout = std::io::stdout();
    report::solve_and_report(&inputs, ChainCfg::default(), &mut stdout.lock())
}
