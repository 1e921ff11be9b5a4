//! Staged adjustment of one colliding ellipse pair.
//!
//! The engine prefers touching the second ellipse alone, then the first
//! alone, then shrinking both; when everything fails it still returns a
//! best-effort pair rather than erroring, tagged so callers can tell the
//! difference. Callers must re-check collision state on a
//! [`Outcome::BestEffort`] result.

use aeris_collide::{detect_collision, risk_level};
use aeris_core::{CheckToken, Scalar};
use aeris_geom::Ellipse;

use crate::candidates::{forced_shrink_digits, shrink_candidates, AxisPair};

/// The final pair produced for one conflict, with identifier strings carrying
/// the original check tokens. An untouched ellipse keeps its original raw
/// identifier; an adjusted one is re-rendered in the canonical form.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjustment {
    pub first: Ellipse,
    pub second: Ellipse,
    pub first_identifier: String,
    pub second_identifier: String,
}

/// Outcome of one pair adjustment.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The returned pair is verified collision-free.
    Resolved(Adjustment),
    /// The bounded search space is exhausted; the returned pair is the best
    /// available and may still collide.
    BestEffort {
        adjustment: Adjustment,
        remaining_risk: Scalar,
    },
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn adjustment(&self) -> &Adjustment {
        match self {
            Self::Resolved(adjustment) | Self::BestEffort { adjustment, .. } => adjustment,
        }
    }

    pub fn into_adjustment(self) -> Adjustment {
        match self {
            Self::Resolved(adjustment) | Self::BestEffort { adjustment, .. } => adjustment,
        }
    }
}

/// Adjusts a pair so that it stops colliding, minimizing axis shrink first
/// and digit change second. Stages:
///
/// 1. reshape the second ellipse against the fixed first;
/// 2. reshape the first against the ORIGINAL second;
/// 3. force-shrink both a-axes by one;
/// 4. fall back to (first unchanged, stage-1 second) as a best effort.
///
/// A non-colliding input pair is returned unchanged.
pub fn adjust_pair(e1: &Ellipse, ident1: &str, e2: &Ellipse, ident2: &str) -> Outcome {
    if !detect_collision(e1, e2) {
        return Outcome::Resolved(Adjustment {
            first: *e1,
            second: *e2,
            first_identifier: ident1.to_string(),
            second_identifier: ident2.to_string(),
        });
    }

    let check1 = check_token(ident1);
    let check2 = check_token(ident2);

    // Stage 1: move only the second ellipse.
    let reshaped2 = reshape_against(e2, e1);
    if !detect_collision(e1, &reshaped2) {
        return Outcome::Resolved(Adjustment {
            first: *e1,
            second: reshaped2,
            first_identifier: ident1.to_string(),
            second_identifier: reshaped2.digits().format(&check2),
        });
    }

    // Stage 2: move only the first ellipse, against the original second.
    let reshaped1 = reshape_against(e1, e2);
    if !detect_collision(&reshaped1, e2) {
        return Outcome::Resolved(Adjustment {
            first: reshaped1,
            second: *e2,
            first_identifier: reshaped1.digits().format(&check1),
            second_identifier: ident2.to_string(),
        });
    }

    // Stage 3: force-shrink both a-axes by one, b untouched.
    let forced1 = forced_shrink(e1);
    let forced2 = forced_shrink(e2);
    if !detect_collision(&forced1, &forced2) {
        return Outcome::Resolved(Adjustment {
            first: forced1,
            second: forced2,
            first_identifier: forced1.digits().format(&check1),
            second_identifier: forced2.digits().format(&check2),
        });
    }

    // Stage 4: best effort, the stage-1 result stands.
    let remaining_risk = risk_level(e1, &reshaped2);
    Outcome::BestEffort {
        adjustment: Adjustment {
            first: *e1,
            second: reshaped2,
            first_identifier: ident1.to_string(),
            second_identifier: reshaped2.digits().format(&check2),
        },
        remaining_risk,
    }
}

/// First ranked shrink candidate for `target` that no longer collides with
/// `fixed`; falls back to the forced shrink when the space is exhausted. The
/// fallback is NOT re-tested here; the staged caller re-checks it.
fn reshape_against(target: &Ellipse, fixed: &Ellipse) -> Ellipse {
    let map = target.case().axis_map();
    let orig = AxisPair { a: target.a(), b: target.b() };
    shrink_candidates(target.digits(), map, orig)
        .find_map(|candidate| {
            let trial = Ellipse::from_digits(candidate.digits, target.case()).ok()?;
            (!detect_collision(fixed, &trial)).then_some(trial)
        })
        .unwrap_or_else(|| forced_shrink(target))
}

/// The unconditional fallback: a reduced by one (floor 1) through the widest
/// digit pair, everything else untouched.
fn forced_shrink(e: &Ellipse) -> Ellipse {
    let map = e.case().axis_map();
    let (digits, _new_a) = forced_shrink_digits(e.digits(), map, e.a());
    // both axes stay >= 1, so re-derivation cannot fail
    Ellipse::from_digits(digits, e.case()).unwrap_or(*e)
}

/// The verifier suffix to re-attach after a rewrite: everything after the
/// identifier's last dash, letters included. A dash-less identifier carries
/// no suffix into the canonical re-rendering.
fn check_token(identifier: &str) -> CheckToken {
    match identifier.rsplit_once('-') {
        Some((_, suffix)) => CheckToken::new(suffix),
        None => CheckToken::default(),
    }
}
