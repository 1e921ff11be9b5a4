#![doc = r#"aeris-adjust: constraint-preserving adjustment search and conflict resolution.

Given a colliding ellipse pair, [`adjust_pair`] searches for replacement
identifier digits that remove the collision with the smallest axis shrink and
the closest digit match, preserving check tokens and the [0,9] digit range
throughout. [`resolve_conflicts`] iterates that repair over an arbitrary set
of tracks until collision-free or a fixed sweep bound.

The search is bounded (at most 10×10×(a+b) candidate evaluations per ellipse
per direction) and CPU-only; within one sweep, per-pair work reads a snapshot
of the scan and could run on a worker pool unchanged.

Examples

```rust
use aeris_adjust::{resolve_conflicts, survey, Track, MAX_RESOLUTION_ITERATIONS};
use aeris_core::CaseSelector;

let mut tracks = vec![
    Track::from_identifier("15.111.100", CaseSelector::Odd).unwrap(),
    Track::from_identifier("45.111.100", CaseSelector::Odd).unwrap(),
];
let report = resolve_conflicts(&mut tracks, MAX_RESOLUTION_ITERATIONS);
assert!(report.converged);
assert!(survey(&tracks).iter().all(|r| !r.collides));
```
"#]

pub mod candidates;
pub mod engine;
pub mod orchestrate;

pub use candidates::{
    forced_shrink_digits, ranked_digit_pairs, shrink_candidates, widest_digit_pair, AxisPair,
    Candidate,
};
pub use engine::{adjust_pair, Adjustment, Outcome};
pub use orchestrate::{
    resolve_conflicts, survey, ResolutionReport, Track, MAX_RESOLUTION_ITERATIONS,
};
