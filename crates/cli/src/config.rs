//! Geometry configuration: optional JSON file, overridden by command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use nmo::prelude::*;
use serde::{Deserialize, Serialize};

/// Full solver geometry. Missing file keys fall back to the reference layout
/// (10 shells, seed (0, 0.02) m, extraction at -0.05 m, foci ±0.6 m, span ±0.05 m).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    pub number: usize,
    pub z0: f64,
    pub r0: f64,
    pub z_extract: f64,
    pub focus_start: f64,
    pub focus_end: f64,
    pub span_start: f64,
    pub span_end: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            number: 10,
            z0: 0.0,
            r0: 0.02,
            z_extract: -0.05,
            focus_start: -0.6,
            focus_end: 0.6,
            span_start: -0.05,
            span_end: 0.05,
        }
    }
}

impl GeometryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn apply(&mut self, args: &GeometryArgs) {
        let GeometryArgs {
            number,
            z0,
            r0,
            z_extract,
            focus_start,
            focus_end,
            span_start,
            span_end,
        } = *args;
        self.number = number.unwrap_or(self.number);
        self.z0 = z0.unwrap_or(self.z0);
        self.r0 = r0.unwrap_or(self.r0);
        self.z_extract = z_extract.unwrap_or(self.z_extract);
        self.focus_start = focus_start.unwrap_or(self.focus_start);
        self.focus_end = focus_end.unwrap_or(self.focus_end);
        self.span_start = span_start.unwrap_or(self.span_start);
        self.span_end = span_end.unwrap_or(self.span_end);
    }

    pub fn to_inputs(&self) -> ChainInputs {
        ChainInputs::new(
            self.number,
            Vec2::new(self.z0, self.r0),
            self.z_extract,
            FocalPair::new(self.focus_start, self.focus_end),
            MirrorSpan::new(self.span_start, self.span_end),
        )
    }
}

/// Per-field overrides; lengths in metres.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct GeometryArgs {
    /// Number of mirror shells
    #[arg(long)]
    pub number: Option<usize>,
    /// Axial coordinate of the seed point on the outermost shell
    #[arg(long, allow_hyphen_values = true)]
    pub z0: Option<f64>,
    /// Radius of the seed point on the outermost shell
    #[arg(long)]
    pub r0: Option<f64>,
    /// Axial plane at which half-apertures are reported
    #[arg(long, allow_hyphen_values = true)]
    pub z_extract: Option<f64>,
    /// First focal point (LStart)
    #[arg(long, allow_hyphen_values = true)]
    pub focus_start: Option<f64>,
    /// Second focal point (LEnd)
    #[arg(long, allow_hyphen_values = true)]
    pub focus_end: Option<f64>,
    /// Leading edge of every shell (lStart)
    #[arg(long, allow_hyphen_values = true)]
    pub span_start: Option<f64>,
    /// Trailing edge of every shell (lEnd)
    #[arg(long, allow_hyphen_values = true)]
    pub span_end: Option<f64>,
}

/// Resolve the geometry: file (or defaults), then flags.
pub fn resolve(config: Option<&Path>, args: &GeometryArgs) -> Result<GeometryConfig> {
    let mut geometry = match config {
        Some(path) => GeometryConfig::load(path)?,
        None => GeometryConfig::default(),
    };
    geometry.apply(args);
    Ok(geometry)
}
