use aeris_adjust::{ranked_digit_pairs, shrink_candidates, widest_digit_pair, AxisPair};
use aeris_core::{CaseSelector, DigitVector};
use proptest::prelude::*;

// Golden: ranked by distance from the anchor, larger i wins ties.
#[test]
fn golden_ranking_order() {
    assert_eq!(
        ranked_digit_pairs(7, 3),
        vec![(3, 4), (4, 3), (2, 5), (5, 2), (1, 6), (6, 1), (0, 7), (7, 0)]
    );
}

#[test]
fn ranking_respects_digit_bounds() {
    // target 15 forces both members >= 6
    let pairs = ranked_digit_pairs(15, 0);
    assert!(pairs.iter().all(|&(i, j)| i <= 9 && j <= 9 && i32::from(i) + i32::from(j) == 15));
    // anchor 0: closest feasible i first
    assert_eq!(pairs[0], (6, 9));
}

#[test]
fn golden_widest_pairs() {
    assert_eq!(widest_digit_pair(7), Some((7, 0)));
    assert_eq!(widest_digit_pair(12), Some((9, 3)));
    assert_eq!(widest_digit_pair(0), Some((0, 0)));
    assert_eq!(widest_digit_pair(19), None);
}

#[test]
fn first_candidate_shaves_one_off_a() {
    let digits = DigitVector::new([1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let map = CaseSelector::Odd.axis_map();
    let orig = AxisPair { a: 7, b: 11 };

    let first = shrink_candidates(digits, map, orig).next().unwrap();
    assert_eq!(first.axes, AxisPair { a: 6, b: 11 });
    // a-pair anchored on d[2]=3: closest is (3,3); b-pair unchanged target 11
    // anchored on d[4]=5: closest is (5,6).
    assert_eq!(first.digits.as_slice(), &[1, 2, 3, 3, 5, 6, 7, 8]);
}

#[test]
fn candidates_never_touch_center_or_parity_digits() {
    let digits = DigitVector::new([4, 7, 3, 4, 5, 6, 2, 9]).unwrap();
    let map = CaseSelector::Odd.axis_map();
    let orig = AxisPair { a: 7, b: 11 };
    for candidate in shrink_candidates(digits, map, orig).take(500) {
        assert_eq!(candidate.digits[0], 4);
        assert_eq!(candidate.digits[1], 7);
        assert_eq!(candidate.digits[7], 9);
    }
}

#[test]
fn even_case_candidates_use_the_even_slots() {
    let digits = DigitVector::new([1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let map = CaseSelector::Even.axis_map();
    // even case: a = d5+d6 = 13, b = d7+d2 = 11
    let orig = AxisPair { a: 13, b: 11 };
    let first = shrink_candidates(digits, map, orig).next().unwrap();
    assert_eq!(first.axes, AxisPair { a: 12, b: 11 });
    assert_eq!(first.digits.pair_sum(map.a), 12);
    assert_eq!(first.digits.pair_sum(map.b), 11);
    // d3 and d4 belong to neither even-case axis
    assert_eq!(first.digits[3], 4);
    assert_eq!(first.digits[4], 5);
}

proptest! {
    /// Every candidate keeps all digits in [0,9], keeps both axes >= 1, and
    /// its pair sums realize exactly the axes it claims.
    #[test]
    fn prop_candidates_are_well_formed(
        raw in prop::array::uniform8(0u8..=9),
        case in prop_oneof![Just(CaseSelector::Odd), Just(CaseSelector::Even)],
    ) {
        let digits = DigitVector::new(raw).unwrap();
        let map = case.axis_map();
        let orig = AxisPair { a: digits.pair_sum(map.a), b: digits.pair_sum(map.b) };
        prop_assume!(orig.a >= 1 && orig.b >= 1);

        for candidate in shrink_candidates(digits, map, orig).take(2_000) {
            prop_assert!(candidate.axes.a >= 1 && candidate.axes.b >= 1);
            prop_assert!(candidate.axes.a < orig.a);
            prop_assert!(candidate.axes.b <= orig.b);
            prop_assert!(candidate.digits.as_slice().iter().all(|&d| d <= 9));
            prop_assert_eq!(candidate.digits.pair_sum(map.a), candidate.axes.a);
            prop_assert_eq!(candidate.digits.pair_sum(map.b), candidate.axes.b);
        }
    }

    /// Total shrink is non-decreasing along the sequence.
    #[test]
    fn prop_shrink_order_is_monotone(raw in prop::array::uniform8(1u8..=9)) {
        let digits = DigitVector::new(raw).unwrap();
        let map = CaseSelector::Odd.axis_map();
        let orig = AxisPair { a: digits.pair_sum(map.a), b: digits.pair_sum(map.b) };

        let mut last_reduction = 0;
        for candidate in shrink_candidates(digits, map, orig).take(2_000) {
            let reduction = (orig.a - candidate.axes.a) + (orig.b - candidate.axes.b);
            prop_assert!(reduction >= last_reduction);
            last_reduction = reduction;
        }
    }
}
