//! Iterative conflict resolution over a set of flight paths.
//!
//! Alternates a full pairwise scan with a repair pass until no pair collides
//! or the iteration bound is hit. Each scan re-evaluates every pair against
//! the CURRENT working array, so a repair made for one pair may fix or
//! re-break another; nothing is skipped as "already fixed".

use aeris_collide::{detect_collision, CollisionReport};
use aeris_core::CaseSelector;
use aeris_geom::{Ellipse, ModelError};

use crate::engine::adjust_pair;

/// Repair sweeps attempted before giving up (matching the source system).
pub const MAX_RESOLUTION_ITERATIONS: usize = 50;

/// One entity in the working set: its current ellipse and the identifier
/// string it is currently encoded as. The identifier keeps its raw input
/// punctuation until an adjustment rewrites it canonically.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub ellipse: Ellipse,
    pub identifier: String,
}

impl Track {
    pub fn from_identifier(identifier: &str, case: CaseSelector) -> Result<Self, ModelError> {
        let (ellipse, _check) = Ellipse::from_identifier(identifier, case)?;
        Ok(Self { ellipse, identifier: identifier.to_string() })
    }
}

/// How a resolution run ended. Bound exhaustion is reported, never raised;
/// survey the tracks again to see what remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Repair sweeps performed.
    pub iterations: usize,
    /// True when the final scan found no colliding pair.
    pub converged: bool,
}

/// Pairwise collision/risk reports for the current state of `tracks`,
/// ascending (i, j) order.
pub fn survey(tracks: &[Track]) -> Vec<CollisionReport> {
    let mut reports = Vec::new();
    for i in 0..tracks.len() {
        for j in (i + 1)..tracks.len() {
            reports.push(CollisionReport::new(i, j, &tracks[i].ellipse, &tracks[j].ellipse));
        }
    }
    reports
}

fn colliding_pairs(tracks: &[Track]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..tracks.len() {
        for j in (i + 1)..tracks.len() {
            if detect_collision(&tracks[i].ellipse, &tracks[j].ellipse) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Repairs `tracks` in place until collision-free or `max_iterations` sweeps
/// have run. Within one sweep the pair list is a snapshot of the scan; the
/// engine itself no-ops on pairs an earlier repair already separated.
pub fn resolve_conflicts(tracks: &mut [Track], max_iterations: usize) -> ResolutionReport {
    let mut iterations = 0;
    while iterations < max_iterations {
        let pairs = colliding_pairs(tracks);
        if pairs.is_empty() {
            return ResolutionReport { iterations, converged: true };
        }
        iterations += 1;
        for (i, j) in pairs {
            let outcome = adjust_pair(
                &tracks[i].ellipse,
                &tracks[i].identifier,
                &tracks[j].ellipse,
                &tracks[j].identifier,
            );
            let adjustment = outcome.into_adjustment();
            tracks[i] = Track {
                ellipse: adjustment.first,
                identifier: adjustment.first_identifier,
            };
            tracks[j] = Track {
                ellipse: adjustment.second,
                identifier: adjustment.second_identifier,
            };
        }
    }
    let converged = colliding_pairs(tracks).is_empty();
    ResolutionReport { iterations, converged }
}
