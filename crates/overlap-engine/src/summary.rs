//! Match summary — reduce per-slot overlap into one job ↔ worker verdict.

use serde::{Deserialize, Serialize};

use crate::catalog::TimeZoneCatalog;
use crate::error::Result;
use crate::normalize::normalize_all;
use crate::overlap::{overlap_minutes, union, union_minutes};
use crate::slot::WeeklySlot;

/// Aggregate compatibility verdict for one job ↔ worker comparison.
///
/// Created fresh per comparison and discarded; carries the input slots so a
/// ranking UI can render the breakdown without re-fetching the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// The job's required slots, as given.
    pub required_slots: Vec<WeeklySlot>,
    /// The worker's available slots, as given.
    pub available_slots: Vec<WeeklySlot>,
    /// Minutes of required time covered by at least one available interval.
    pub covered_minutes: u32,
    /// Total length of the required union (overlapping required slots are
    /// not double-counted).
    pub required_minutes: u32,
    /// `covered / required`, in [0, 1]. 0.0 when nothing is required.
    pub coverage_ratio: f64,
    /// True iff every required minute is covered. A job with no requirement
    /// is never a full match.
    pub is_full_match: bool,
}

impl MatchSummary {
    /// Whether this pairing clears a ranking threshold, e.g. "show this job
    /// only if coverage is at least 0.8".
    pub fn meets(&self, threshold: f64) -> bool {
        self.coverage_ratio >= threshold
    }
}

/// Compare a job's required slots against a worker's availability.
///
/// Both collections are normalized onto the UTC week-minute axis, the
/// required union length becomes `required_minutes`, and the intersection
/// with the availability union becomes `covered_minutes`. All arithmetic is
/// integer minutes, so `is_full_match` is exact equality, no epsilon.
///
/// Zero required slots is defined behavior, not an error: the summary comes
/// back with `required_minutes = 0`, `coverage_ratio = 0.0` and
/// `is_full_match = false`. Callers wanting "any availability is fine"
/// semantics special-case that before calling.
///
/// # Errors
/// Returns [`crate::EngineError::UnknownTimeZone`] when any slot's zone does
/// not resolve in `catalog`. The error covers only this pair; a batch sweep
/// catches it, logs, and moves on to the next pair.
pub fn summarize(
    required: &[WeeklySlot],
    available: &[WeeklySlot],
    catalog: &TimeZoneCatalog,
) -> Result<MatchSummary> {
    let required_intervals = normalize_all(required, catalog)?;
    let available_intervals = normalize_all(available, catalog)?;

    let required_minutes = union_minutes(&union(&required_intervals));
    let covered_minutes = overlap_minutes(&required_intervals, &available_intervals);

    let coverage_ratio = if required_minutes == 0 {
        0.0
    } else {
        f64::from(covered_minutes) / f64::from(required_minutes)
    };

    Ok(MatchSummary {
        required_slots: required.to_vec(),
        available_slots: available.to_vec(),
        covered_minutes,
        required_minutes,
        coverage_ratio,
        is_full_match: required_minutes > 0 && covered_minutes == required_minutes,
    })
}
