//! Slot normalization — weekly slots onto the canonical UTC week-minute axis.
//!
//! A "week minute" counts minutes since Sunday 00:00 UTC, 0..10080. Every
//! slot, whatever its time zone, lands on this shared axis so that a job's
//! requirement and a worker's availability become directly comparable.
//! Intervals are half-open `[start, end)`.

use serde::{Deserialize, Serialize};

use crate::catalog::TimeZoneCatalog;
use crate::error::Result;
use crate::slot::WeeklySlot;

/// Minutes in one week: 7 × 24 × 60.
pub const MINUTES_PER_WEEK: u32 = 10_080;

const MINUTES_PER_DAY: i32 = 1_440;

/// A slot's bounds translated onto the UTC week-minute axis.
///
/// Half-open: `start` in 0..10080, `end` in 1..=10080, `start < end`. Derived
/// from a [`WeeklySlot`], never persisted; `source` keeps the originating slot
/// for human-inspectable breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalInterval {
    pub week_minute_start: u32,
    pub week_minute_end: u32,
    pub source_slot: WeeklySlot,
}

impl CanonicalInterval {
    /// Length of the interval in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.week_minute_end - self.week_minute_start
    }
}

/// Convert a weekly slot into one or two canonical UTC intervals.
///
/// Subtracts the slot's UTC offset from its raw week-minute bounds, then
/// re-anchors into `[0, 10080)`. A shift across the week boundary splits the
/// slot into a tail segment ending at 10080 and a head segment starting at 0;
/// a Sunday 00:00 slot in a positive-offset zone therefore lands late
/// Saturday rather than clamping to 0. A slot is at most 24h long, so at most
/// two segments result.
///
/// # Errors
/// Returns [`crate::EngineError::UnknownTimeZone`] when the slot's zone does
/// not resolve in `catalog`.
pub fn normalize(slot: &WeeklySlot, catalog: &TimeZoneCatalog) -> Result<Vec<CanonicalInterval>> {
    let offset = catalog.offset_minutes(slot.time_zone())?;

    let raw_start =
        i32::from(slot.day_of_week()) * MINUTES_PER_DAY + i32::from(slot.start_hour()) * 60;
    let length = slot.duration_minutes() as i32;

    // Shift into UTC, then re-anchor the start into [0, 10080). The end
    // follows the start so the segment keeps its length across the wrap.
    let shifted_start = (raw_start - offset).rem_euclid(MINUTES_PER_WEEK as i32) as u32;
    let shifted_end = shifted_start + length as u32;

    let mut intervals = Vec::with_capacity(2);
    if shifted_end <= MINUTES_PER_WEEK {
        intervals.push(CanonicalInterval {
            week_minute_start: shifted_start,
            week_minute_end: shifted_end,
            source_slot: slot.clone(),
        });
    } else {
        // Crosses Saturday midnight: tail of the week, then head of the next.
        intervals.push(CanonicalInterval {
            week_minute_start: shifted_start,
            week_minute_end: MINUTES_PER_WEEK,
            source_slot: slot.clone(),
        });
        intervals.push(CanonicalInterval {
            week_minute_start: 0,
            week_minute_end: shifted_end - MINUTES_PER_WEEK,
            source_slot: slot.clone(),
        });
    }

    Ok(intervals)
}

/// Normalize a whole slot collection and flatten the segments.
///
/// Errors on the first unresolvable time zone; callers wanting skip-the-slot
/// semantics normalize slot by slot instead.
pub fn normalize_all(
    slots: &[WeeklySlot],
    catalog: &TimeZoneCatalog,
) -> Result<Vec<CanonicalInterval>> {
    let mut intervals = Vec::with_capacity(slots.len());
    for slot in slots {
        intervals.extend(normalize(slot, catalog)?);
    }
    Ok(intervals)
}
