//! Tests for interval union and required/available overlap computation.

use overlap_engine::{
    normalize_all, overlap_minutes, union, union_minutes, TimeZoneCatalog, WeeklySlot,
};

fn slot(day: u8, start: u8, end: u8, tz: &str) -> WeeklySlot {
    WeeklySlot::new(day, start, end, tz).unwrap()
}

fn intervals(slots: &[WeeklySlot]) -> Vec<overlap_engine::CanonicalInterval> {
    normalize_all(slots, TimeZoneCatalog::builtin()).unwrap()
}

#[test]
fn union_merges_overlapping_intervals() {
    // Mon 9-13 and Mon 11-17 form one 9-17 span.
    let merged = union(&intervals(&[slot(1, 9, 13, "UTC"), slot(1, 11, 17, "UTC")]));

    assert_eq!(merged, vec![(1440 + 540, 1440 + 1020)]);
    assert_eq!(union_minutes(&merged), 480);
}

#[test]
fn union_merges_touching_intervals() {
    // Mon 9-13 and Mon 13-17 touch at 13:00 and merge into one span.
    let merged = union(&intervals(&[slot(1, 9, 13, "UTC"), slot(1, 13, 17, "UTC")]));

    assert_eq!(merged.len(), 1);
    assert_eq!(union_minutes(&merged), 480);
}

#[test]
fn union_keeps_disjoint_intervals_apart() {
    let merged = union(&intervals(&[slot(1, 9, 12, "UTC"), slot(3, 9, 12, "UTC")]));

    assert_eq!(merged.len(), 2);
    assert_eq!(union_minutes(&merged), 360);
}

#[test]
fn union_is_idempotent_on_duplicates() {
    let base = intervals(&[slot(1, 9, 17, "UTC"), slot(2, 10, 12, "UTC")]);
    let doubled: Vec<_> = base.iter().chain(base.iter()).cloned().collect();

    assert_eq!(union_minutes(&union(&base)), union_minutes(&union(&doubled)));
    assert_eq!(union(&base), union(&doubled));
}

#[test]
fn union_of_nothing_is_empty() {
    assert!(union(&[]).is_empty());
    assert_eq!(union_minutes(&[]), 0);
}

#[test]
fn partial_overlap_counts_exact_minutes() {
    // Required Mon 9-17, available Mon 13-21: overlap 13:00-17:00 = 240 min.
    let required = intervals(&[slot(1, 9, 17, "GMT+0")]);
    let available = intervals(&[slot(1, 13, 21, "GMT+0")]);

    assert_eq!(overlap_minutes(&required, &available), 240);
}

#[test]
fn disjoint_days_have_zero_overlap() {
    let required = intervals(&[slot(1, 9, 17, "UTC")]);
    let available = intervals(&[
        slot(2, 0, 24, "UTC"),
        slot(3, 0, 24, "UTC"),
        slot(4, 0, 24, "UTC"),
        slot(5, 0, 24, "UTC"),
        slot(6, 0, 24, "UTC"),
        slot(0, 0, 24, "UTC"),
    ]);

    assert_eq!(overlap_minutes(&required, &available), 0);
}

#[test]
fn adjacent_intervals_do_not_overlap() {
    // Required ends 13:00 exactly when availability starts: zero minutes.
    let required = intervals(&[slot(1, 9, 13, "UTC")]);
    let available = intervals(&[slot(1, 13, 17, "UTC")]);

    assert_eq!(overlap_minutes(&required, &available), 0);
}

#[test]
fn overlap_is_commutative() {
    let a = intervals(&[slot(1, 9, 17, "UTC"), slot(3, 8, 20, "Asia/Tokyo")]);
    let b = intervals(&[slot(1, 13, 21, "GMT-5"), slot(3, 0, 6, "UTC")]);

    assert_eq!(overlap_minutes(&a, &b), overlap_minutes(&b, &a));
}

#[test]
fn overlapping_required_slots_are_not_double_counted() {
    // Two required slots covering the same Mon 10-12 window, availability
    // covering all of Monday: coverage is 10-12 once, not twice.
    let required = intervals(&[slot(1, 9, 12, "UTC"), slot(1, 10, 14, "UTC")]);
    let available = intervals(&[slot(1, 0, 24, "UTC")]);

    // Union of required is 9-14 = 300 minutes, all covered.
    assert_eq!(overlap_minutes(&required, &available), 300);
}

#[test]
fn cross_timezone_overlap_lands_on_the_same_axis() {
    // Required Mon 9-17 New York (-5) is Mon 14:00-22:00 UTC.
    // Available Mon 19-24 UTC overlaps 19:00-22:00 = 180 minutes.
    let required = intervals(&[slot(1, 9, 17, "America/New_York")]);
    let available = intervals(&[slot(1, 19, 24, "UTC")]);

    assert_eq!(overlap_minutes(&required, &available), 180);
}

#[test]
fn wrapped_slot_overlaps_both_week_edges() {
    // Sat 20-24 GMT-2 normalizes to Sat 22:00-24:00 + Sun 00:00-02:00 UTC.
    let wrapped = intervals(&[slot(6, 20, 24, "GMT-2")]);

    let saturday_tail = intervals(&[slot(6, 23, 24, "UTC")]);
    assert_eq!(overlap_minutes(&wrapped, &saturday_tail), 60);

    let sunday_head = intervals(&[slot(0, 0, 1, "UTC")]);
    assert_eq!(overlap_minutes(&wrapped, &sunday_head), 60);
}
