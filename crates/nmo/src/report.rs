//! Human-readable rendering of a chain solve.
//!
//! The report only formats values it is given: input echo, one line per
//! shell and the divergence coverage `atan(b / LStart)` of the innermost and
//! outermost shell. A failed solve prints the error instead of the table.

use std::fmt;
use std::io::{self, Write};

use crate::chain::{solve_chain, ChainCfg, ChainError, ChainInputs, MirrorChain};
use crate::conic::FocalPair;

/// Angle (degrees) under which a shell of half-aperture `b` is seen from the first focus.
#[inline]
pub fn divergence_deg(b: f64, focal: FocalPair) -> f64 {
    (b / focal.start).atan().to_degrees()
}

/// `(innermost, outermost)` divergence angles in degrees; `None` for an empty chain.
pub fn divergence_range_deg(chain: &MirrorChain, focal: FocalPair) -> Option<(f64, f64)> {
    let inner = chain.innermost()?;
    let outer = chain.outermost()?;
    Some((divergence_deg(inner, focal), divergence_deg(outer, focal)))
}

/// A solve together with the inputs that produced it.
pub struct Report<'a> {
    pub inputs: &'a ChainInputs,
    pub result: Result<&'a MirrorChain, &'a ChainError>,
}

impl<'a> Report<'a> {
    pub fn new(inputs: &'a ChainInputs, result: Result<&'a MirrorChain, &'a ChainError>) -> Self {
        Self { inputs, result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ChainInputs {
            number,
            seed,
            z_extract,
            focal,
            span,
        } = *self.inputs;
        writeln!(f, "Calculating {number} nested mirror positions:")?;
        writeln!(f, "  Focal points: F1 = {} m, F2 = {} m", focal.start, focal.end)?;
        writeln!(f, "  Mirror extent: z = [{}, {}] m", span.start, span.end)?;
        writeln!(f, "  Outermost mirror: r_0 = {} m at z_0 = {} m", seed.y, seed.x)?;
        writeln!(f, "  Extraction plane: z = {z_extract} m")?;
        match self.result {
            Ok(chain) => {
                writeln!(f, "  Results:")?;
                for (i, b) in chain.iter().enumerate() {
                    writeln!(f, "    Mirror[{i:2}]: b = {b:10.6} m")?;
                }
                if let Some((inner, outer)) = divergence_range_deg(chain, focal) {
                    writeln!(f, "  Divergence coverage: {inner:.3} deg to {outer:.3} deg")?;
                }
            }
            Err(err) => writeln!(f, "  FAILED: {err}")?,
        }
        Ok(())
    }
}

/// Solve and write the report to `out`. The solve result is returned
/// unchanged; a failing writer is logged, not turned into a solver error.
pub fn solve_and_report<W: Write>(
    inputs: &ChainInputs,
    cfg: ChainCfg,
    out: &mut W,
) -> Result<MirrorChain, ChainError> {
    let result = solve_chain(inputs, cfg);
    let report = Report::new(inputs, result.as_ref());
    if let Err(e) = write_report(out, &report) {
        tracing::warn!(error = %e, "could not write mirror report");
    }
    result
}

pub fn write_report<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    write!(out, "{report}")?;
    out.flush()
}
