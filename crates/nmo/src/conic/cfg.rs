//! Tolerance defaults for conic evaluation (internal).
//!
//! Policy
//! - The semi-major discriminant `(u² + c² + r²)² − 4c²u²` factors as
//!   `((u − c)² + r²)((u + c)² + r²) ≥ 0`; a value in `[-DISCRIMINANT_EPS, 0)`
//!   is cancellation noise and evaluates as zero.
//! - Radius radicands get no slack by default (`ChainCfg::eps_radicand = 0`):
//!   any negative value is a domain failure.
//! - Units are m⁴ for the discriminant and m² for radius radicands.

/// Absolute slack for the semi-major discriminant.
pub(crate) const DISCRIMINANT_EPS: f64 = 1e-15;
/// Default slack for radius radicands.
pub(crate) const RADICAND_EPS: f64 = 0.0;
