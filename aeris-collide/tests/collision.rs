use aeris_collide::{detect_collision, pairwise_reports, risk_level, CollisionReport};
use aeris_core::{CaseSelector, DigitVector};
use aeris_geom::{Ellipse, Orientation};
use proptest::prelude::*;

fn from_digits(raw: [u8; 8], case: CaseSelector) -> Ellipse {
    Ellipse::from_digits(DigitVector::new(raw).unwrap(), case).unwrap()
}

/// Arbitrary-center ellipse for scenarios outside the digit grid; the digit
/// payload is irrelevant to the geometry probes here.
fn at(center: (i32, i32), axes: (i32, i32)) -> Ellipse {
    let digits = DigitVector::new([0, 0, 1, 1, 1, 1, 0, 0]).unwrap();
    Ellipse::from_parts(center, axes, Orientation::Horizontal, digits, CaseSelector::Odd).unwrap()
}

// Sanity probe: a boundary trivially intersects itself.
#[test]
fn self_collision_is_true() {
    let e = from_digits([1, 2, 3, 4, 5, 6, 7, 8], CaseSelector::Odd);
    assert!(detect_collision(&e, &e));
}

// Identical axes, identical center, orthogonal orientations: must collide,
// risk saturates at 1.
#[test]
fn crossed_twins_collide_at_full_risk() {
    let e1 = from_digits([1, 2, 3, 4, 5, 6, 7, 8], CaseSelector::Odd);
    let e2 = from_digits([1, 2, 3, 4, 5, 6, 7, 9], CaseSelector::Odd);
    assert!(detect_collision(&e1, &e2));
    assert_eq!(risk_level(&e1, &e2), 1.0);
}

#[test]
fn distant_pair_is_silent() {
    let near = at((0, 0), (9, 9));
    let far = at((100, 100), (9, 9));
    assert!(!detect_collision(&near, &far));
    assert_eq!(risk_level(&near, &far), 0.0);
}

#[test]
fn identical_centers_always_max_risk() {
    let small = at((3, 3), (1, 2));
    let large = at((3, 3), (9, 7));
    assert_eq!(risk_level(&small, &large), 1.0);
}

// Boundary-only semantics: a boundary fully inside another, with no edge
// crossing, is NOT a collision even though the risk stays high.
#[test]
fn nested_boundaries_do_not_collide() {
    let outer = at((0, 0), (9, 9));
    let inner = at((0, 0), (2, 2));
    assert!(!detect_collision(&outer, &inner));
    assert_eq!(risk_level(&outer, &inner), 1.0);
}

#[test]
fn overlapping_circles_collide() {
    let left = at((0, 0), (2, 2));
    let right = at((3, 0), (2, 2));
    assert!(detect_collision(&left, &right));
}

#[test]
fn risk_is_a_proxy_not_the_verdict() {
    // Boundaries clear of each other, centers still close enough for a
    // non-zero risk.
    let left = at((0, 0), (1, 3));
    let right = at((3, 0), (1, 3));
    assert!(!detect_collision(&left, &right));
    let risk = risk_level(&left, &right);
    assert!(risk > 0.0 && risk < 1.0);
}

#[test]
fn golden_risk_percent_rounding() {
    let left = at((0, 0), (2, 2));
    let right = at((3, 0), (2, 2));
    // distance 3, safe radius 4 -> risk 0.25
    let report = CollisionReport::new(0, 1, &left, &right);
    assert_eq!(report.risk, 0.25);
    assert_eq!(report.risk_percent(), 25);
}

#[test]
fn pairwise_reports_cover_ascending_pairs() {
    let set = [at((0, 0), (2, 2)), at((3, 0), (2, 2)), at((40, 40), (2, 2))];
    let reports = pairwise_reports(&set);
    let pairs: Vec<_> = reports.iter().map(|r| (r.first, r.second)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    assert!(reports[0].collides);
    assert!(!reports[1].collides);
    assert!(!reports[2].collides);
}

proptest! {
    /// Centers farther apart than the full axis sum: never a collision, risk
    /// exactly zero.
    #[test]
    fn prop_far_apart_is_silent(
        a1 in 1i32..10, b1 in 1i32..10,
        a2 in 1i32..10, b2 in 1i32..10,
        gap in 1i32..50,
    ) {
        let spread = a1 + b1 + a2 + b2 + gap;
        let e1 = at((0, 0), (a1, b1));
        let e2 = at((spread, 0), (a2, b2));
        prop_assert!(!detect_collision(&e1, &e2));
        prop_assert_eq!(risk_level(&e1, &e2), 0.0);
    }

    /// Risk is symmetric and clamped to [0,1].
    #[test]
    fn prop_risk_symmetric_and_clamped(
        h1 in -20i32..20, k1 in -20i32..20,
        h2 in -20i32..20, k2 in -20i32..20,
        a1 in 1i32..10, b1 in 1i32..10,
        a2 in 1i32..10, b2 in 1i32..10,
    ) {
        let e1 = at((h1, k1), (a1, b1));
        let e2 = at((h2, k2), (a2, b2));
        let r12 = risk_level(&e1, &e2);
        let r21 = risk_level(&e2, &e1);
        prop_assert_eq!(r12, r21);
        prop_assert!((0.0..=1.0).contains(&r12));
    }
}
