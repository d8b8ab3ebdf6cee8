//! Overlap computation between required and available canonical intervals.
//!
//! Union each side first, then intersect the two unioned sets. Unioning first
//! is what keeps overlapping same-side slots from being double-counted; the
//! pairwise intersection of two internally non-overlapping lists is then safe
//! to sum directly.

use crate::normalize::CanonicalInterval;

/// Merge a side's intervals into a sorted, non-overlapping span list.
///
/// Sorts by start and merges any pair where `next.start <= current.end` —
/// touching segments merge, so a slot ending 17:00 and one starting 17:00
/// form one continuous span. The wrap split performed at normalization time
/// means no circular arithmetic is needed here.
pub fn union(intervals: &[CanonicalInterval]) -> Vec<(u32, u32)> {
    let mut spans: Vec<(u32, u32)> = intervals
        .iter()
        .map(|i| (i.week_minute_start, i.week_minute_end))
        .collect();

    if spans.is_empty() {
        return spans;
    }

    spans.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Total length of a merged span list in minutes.
pub fn union_minutes(merged: &[(u32, u32)]) -> u32 {
    merged.iter().map(|&(start, end)| end - start).sum()
}

/// Total UTC week-minutes where at least one required interval and at least
/// one available interval coincide.
///
/// Both sides are unioned before intersecting, so duplicate or overlapping
/// slots within one side never inflate the count. Symmetric in its arguments.
pub fn overlap_minutes(required: &[CanonicalInterval], available: &[CanonicalInterval]) -> u32 {
    let required = union(required);
    let available = union(available);

    let mut total = 0;
    for &(r_start, r_end) in &required {
        for &(a_start, a_end) in &available {
            let start = r_start.max(a_start);
            let end = r_end.min(a_end);
            if start < end {
                total += end - start;
            }
        }
    }
    total
}
