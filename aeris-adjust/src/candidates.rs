//! Ranked enumeration of shrink candidates for one ellipse.
//!
//! The search space is ordered so that the first candidate passing the
//! collision test is also the preferred one: smallest total axis shrink
//! first, then the digit pair closest to the original digits.

use aeris_core::{AxisMap, DigitVector};

/// A semi-axis pair under consideration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPair {
    pub a: i32,
    pub b: i32,
}

/// One candidate replacement: a full digit vector whose pair sums realize
/// `axes`, with every other position untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub digits: DigitVector,
    pub axes: AxisPair,
}

/// All digit pairs `(i, target - i)` with both members in [0,9], ranked by
/// absolute distance of `i` from `anchor`, ties broken toward the larger `i`.
pub fn ranked_digit_pairs(target: i32, anchor: u8) -> Vec<(u8, u8)> {
    let mut pairs: Vec<(i32, u8, u8)> = (0..=9i32)
        .filter_map(|i| {
            let j = target - i;
            (0..=9).contains(&j).then(|| ((i - i32::from(anchor)).abs(), i as u8, j as u8))
        })
        .collect();
    pairs.sort_by_key(|&(distance, i, _)| (distance, std::cmp::Reverse(i)));
    pairs.into_iter().map(|(_, i, j)| (i, j)).collect()
}

/// The pair `(i, target - i)` with the largest feasible `i`, used by the
/// forced-shrink fallback. `None` only when `target` itself is infeasible
/// (outside [0,18]).
pub fn widest_digit_pair(target: i32) -> Option<(u8, u8)> {
    (0..=9i32).rev().find_map(|i| {
        let j = target - i;
        (0..=9).contains(&j).then(|| (i as u8, j as u8))
    })
}

/// Lazy sequence of shrink candidates for an ellipse whose current axes are
/// `orig`, in strict preference order:
///
/// 1. total reduction 1 upward (bounded by a+b),
/// 2. new-a from a−1 down to 1, with new-b = b − (reduction − (a − new-a)),
///    rejected outside [1, b],
/// 3. ranked a-digit pairs × ranked b-digit pairs.
///
/// Every yielded candidate keeps both axes ≥ 1, so downstream construction
/// cannot hit the axis invariant.
pub fn shrink_candidates(
    digits: DigitVector,
    map: AxisMap,
    orig: AxisPair,
) -> impl Iterator<Item = Candidate> {
    let (a0, b0) = (orig.a, orig.b);
    (1..=a0 + b0).flat_map(move |reduction| {
        (1..a0)
            .rev()
            .filter_map(move |new_a| {
                let new_b = b0 - (reduction - (a0 - new_a));
                (new_b >= 1 && new_b <= b0).then_some(AxisPair { a: new_a, b: new_b })
            })
            .flat_map(move |axes| {
                let pairs_a = ranked_digit_pairs(axes.a, digits[map.a.0]);
                let pairs_b = ranked_digit_pairs(axes.b, digits[map.b.0]);
                pairs_a.into_iter().flat_map(move |pair_a| {
                    pairs_b.clone().into_iter().map(move |pair_b| Candidate {
                        digits: digits.with_pair(map.a, pair_a).with_pair(map.b, pair_b),
                        axes,
                    })
                })
            })
    })
}

/// Forced-shrink digits: a reduced to max(1, a−1) via the widest pair, b left
/// untouched. Returns the digits unchanged when no feasible pair exists.
pub fn forced_shrink_digits(digits: DigitVector, map: AxisMap, orig_a: i32) -> (DigitVector, i32) {
    let new_a = (orig_a - 1).max(1);
    match widest_digit_pair(new_a) {
        Some(pair) => (digits.with_pair(map.a, pair), new_a),
        None => (digits, orig_a),
    }
}
