//! The chain loop: fit, sample, project, refit.

use nalgebra::Vector2;

use super::error::{ChainError, DomainStage};
use super::types::{ChainCfg, ChainInputs, MirrorChain, MirrorShell};
use crate::conic::ConicProfile;

/// Solve all shells and keep their per-mirror detail.
///
/// Per mirror k: sample the profile at `z_extract` and at the trailing edge,
/// then (if a shell k+1 exists) project the trailing-edge point through the
/// first focus onto the leading edge and fit the next ellipse through it.
pub fn solve_shells(inputs: &ChainInputs, cfg: ChainCfg) -> Result<Vec<MirrorShell>, ChainError> {
    inputs.validate()?;
    if !(cfg.eps_radicand.is_finite() && cfg.eps_radicand >= 0.0) {
        return Err(ChainError::invalid("eps_radicand must be finite and >= 0"));
    }
    let n = inputs.number;
    let mut shells = Vec::new();
    shells
        .try_reserve_exact(n)
        .map_err(|_| ChainError::Allocation { mirrors: n })?;

    let ChainInputs {
        focal,
        span,
        z_extract,
        ..
    } = *inputs;
    let eps = cfg.eps_radicand;
    tracing::debug!(
        mirrors = n,
        focus_start = focal.start,
        focus_end = focal.end,
        span_start = span.start,
        span_end = span.end,
        z_extract,
        "solving nested mirror chain"
    );

    let mut anchor = inputs.seed;
    let mut profile = ConicProfile::fit(focal, anchor)
        .map_err(|e| ChainError::at_mirror(0, e, DomainStage::SemiMajorAxis))?;
    for k in 0..n {
        let b = profile
            .radius(z_extract, eps)
            .map_err(|e| ChainError::at_mirror(k, e, DomainStage::ExtractionRadius))?;
        let r_trailing = profile
            .radius(span.end, eps)
            .map_err(|e| ChainError::at_mirror(k, e, DomainStage::TrailingEdgeRadius))?;
        tracing::debug!(
            mirror = k,
            b,
            r_trailing,
            k1 = profile.k1,
            k2 = profile.k2,
            k3 = profile.k3,
            a = profile.a,
            "mirror"
        );
        shells.push(MirrorShell {
            index: k,
            anchor,
            profile,
            b,
            r_trailing,
        });

        if k + 1 < n {
            anchor = focal.project_through_start(Vector2::new(span.end, r_trailing), span.start);
            tracing::trace!(mirror = k + 1, z = anchor.x, r = anchor.y, "leading-edge anchor");
            profile = ConicProfile::fit(focal, anchor)
                .map_err(|e| ChainError::at_mirror(k + 1, e, DomainStage::SemiMajorAxis))?;
        }
    }
    Ok(shells)
}

/// Half-apertures of all shells at `inputs.z_extract`, outermost first.
pub fn solve_chain(inputs: &ChainInputs, cfg: ChainCfg) -> Result<MirrorChain, ChainError> {
    let shells = solve_shells(inputs, cfg)?;
    MirrorChain::from_shells(&shells)
}
