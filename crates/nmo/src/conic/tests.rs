use super::*;
use nalgebra::{vector, Vector2};

const EPS: f64 = 1e-15;

fn focal_distance_sum(focal: FocalPair, p: Vector2<f64>) -> f64 {
    let d1 = ((p.x - focal.start).powi(2) + p.y * p.y).sqrt();
    let d2 = ((p.x - focal.end).powi(2) + p.y * p.y).sqrt();
    d1 + d2
}

#[test]
fn symmetric_foci_closed_form() {
    // Anchor at the centre: u = 0, so a² = c² + r².
    let focal = FocalPair::new(-0.6, 0.6);
    let prof = ConicProfile::fit(focal, vector![0.0, 0.02]).unwrap();
    let a_sq: f64 = 0.36 + 0.0004;
    assert!((prof.a - a_sq.sqrt()).abs() < 1e-15);
    assert!((prof.k3 - (0.36 / a_sq - 1.0)).abs() < 1e-15);
    assert_eq!(prof.k2, 0.0);
    assert!((prof.k1 - 0.0004).abs() < 1e-15);
}

#[test]
fn fit_passes_through_anchor_and_satisfies_focal_sum() {
    let cases = [
        (FocalPair::new(-0.6, 0.6), vector![0.0, 0.02]),
        (FocalPair::new(-0.6, 0.6), vector![-0.05, 0.0168]),
        (FocalPair::new(-1.3, 0.4), vector![0.1, 0.035]),
        (FocalPair::new(-2.0, 2.5), vector![-0.2, 0.005]),
    ];
    for (focal, anchor) in cases {
        let prof = ConicProfile::fit(focal, anchor).unwrap();
        assert!(prof.residual(anchor).abs() < 1e-14, "{focal:?} {anchor:?}");
        assert!(prof.a > focal.half_separation().abs());
        assert!((focal_distance_sum(focal, anchor) - 2.0 * prof.a).abs() < 1e-12);
        // Any other point of the profile lies on the same ellipse.
        let z = anchor.x + 0.03;
        let r = prof.radius(z, EPS).unwrap();
        assert!((focal_distance_sum(focal, vector![z, r]) - 2.0 * prof.a).abs() < 1e-12);
    }
}

#[test]
fn radius_vanishes_at_vertices() {
    let focal = FocalPair::new(-0.6, 0.6);
    let prof = ConicProfile::fit(focal, vector![0.0, 0.02]).unwrap();
    for z in [focal.center() - prof.a, focal.center() + prof.a] {
        let r = prof.radius(z, EPS).unwrap();
        assert!(r < 1e-6, "vertex radius {r}");
    }
}

#[test]
fn radius_beyond_vertex_is_reported() {
    let focal = FocalPair::new(-0.6, 0.6);
    let prof = ConicProfile::fit(focal, vector![0.0, 0.02]).unwrap();
    let err = prof.radius(5.0, EPS).unwrap_err();
    match err {
        ConicError::OutsideProfile { z, radicand } => {
            assert_eq!(z, 5.0);
            assert!((radicand + 0.027346947835735658).abs() < 1e-12);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.radicand().unwrap() < 0.0);
}

#[test]
fn degenerate_foci_rejected() {
    let focal = FocalPair::new(0.5, 0.5);
    assert!(focal.is_degenerate());
    let err = ConicProfile::fit(focal, vector![0.0, 0.02]).unwrap_err();
    assert_eq!(err, ConicError::DegenerateFoci);
    assert!(err.radicand().is_none());
}

#[test]
fn checked_sqrt_slack_and_nan() {
    assert_eq!(checked_sqrt(4.0, EPS), Some(2.0));
    assert_eq!(checked_sqrt(-1e-16, EPS), Some(0.0));
    assert_eq!(checked_sqrt(-1e-3, EPS), None);
    assert_eq!(checked_sqrt(f64::NAN, EPS), None);
}

#[test]
fn default_radius_slack_rejects_any_negative_radicand() {
    let prof = ConicProfile {
        k1: -1e-18,
        k2: 0.0,
        k3: 0.0,
        a: 1.0,
    };
    let eps = cfg::RADICAND_EPS;
    assert_eq!(eps, 0.0);
    assert!(matches!(
        prof.radius(0.0, eps),
        Err(ConicError::OutsideProfile { .. })
    ));
    assert_eq!(prof.radius(0.0, EPS), Ok(0.0));
}

#[test]
fn projection_is_colinear_with_first_focus() {
    let focal = FocalPair::new(-0.6, 0.6);
    let trailing = vector![0.05, 0.0199];
    let leading = focal.project_through_start(trailing, -0.05);
    assert_eq!(leading.x, -0.05);
    let f = vector![focal.start, 0.0];
    let (d1, d2) = (trailing - f, leading - f);
    assert!((d1.x * d2.y - d1.y * d2.x).abs() < 1e-15);
    assert!(leading.y < trailing.y);
}

#[test]
fn span_length() {
    let span = MirrorSpan::new(-0.05, 0.05);
    assert!((span.length() - 0.1).abs() < 1e-15);
}
