//! Error taxonomy of the chain solver.

use std::fmt;

use crate::conic::ConicError;

/// Where a negative radicand was met while building one shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainStage {
    /// Inner root of the semi-major axis formula.
    SemiMajorDiscriminant,
    /// Outer root of the semi-major axis formula.
    SemiMajorAxis,
    /// Profile evaluated at the extraction plane.
    ExtractionRadius,
    /// Profile evaluated at the trailing edge of the span.
    TrailingEdgeRadius,
}

impl fmt::Display for DomainStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SemiMajorDiscriminant => "semi-major discriminant",
            Self::SemiMajorAxis => "semi-major axis",
            Self::ExtractionRadius => "radius at extraction plane",
            Self::TrailingEdgeRadius => "radius at trailing edge",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by the chain solver. No partial chain is ever returned.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainError {
    /// Rejected before any arithmetic.
    InvalidInput { reason: String },
    /// Geometry has no real solution at mirror `mirror`.
    Domain {
        mirror: usize,
        stage: DomainStage,
        radicand: f64,
    },
    /// Output storage for `mirrors` shells could not be reserved.
    Allocation { mirrors: usize },
}

impl ChainError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Attach the mirror index to a conic failure. `eval_stage` names the
    /// evaluation plane for `OutsideProfile`; fit failures carry their own stage.
    pub(crate) fn at_mirror(mirror: usize, err: ConicError, eval_stage: DomainStage) -> Self {
        let (stage, radicand) = match err {
            ConicError::DegenerateFoci => return Self::invalid("focal points coincide"),
            ConicError::NegativeDiscriminant { value } => {
                (DomainStage::SemiMajorDiscriminant, value)
            }
            ConicError::NegativeSemiMajor { value } => (DomainStage::SemiMajorAxis, value),
            ConicError::OutsideProfile { radicand, .. } => (eval_stage, radicand),
        };
        Self::Domain {
            mirror,
            stage,
            radicand,
        }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::Domain {
                mirror,
                stage,
                radicand,
            } => write!(
                f,
                "infeasible geometry at mirror {mirror}: negative {stage} radicand ({radicand:e})"
            ),
            Self::Allocation { mirrors } => {
                write!(f, "could not allocate output for {mirrors} mirrors")
            }
        }
    }
}

impl std::error::Error for ChainError {}
