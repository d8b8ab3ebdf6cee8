//! Static time-zone reference data — identifier → fixed UTC offset in minutes.
//!
//! The catalog deliberately models every zone as a single constant offset with
//! no daylight-saving transitions (see DESIGN.md). Half- and quarter-hour
//! offsets (+5:30, +5:45, -3:30) are first-class. Besides named zones, fixed
//! `GMT±H[:MM]` / `UTC±H[:MM]` identifiers resolve without a table entry.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Offset, TimeZone, Utc};

use crate::error::{EngineError, Result};

/// Named zones the job-posting and profile UIs offer, at their standard
/// (non-DST) offsets. Minutes east of UTC.
const BUILTIN_ZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("Europe/London", 0),
    ("Europe/Dublin", 0),
    ("Europe/Lisbon", 0),
    ("Africa/Casablanca", 60),
    ("Africa/Lagos", 60),
    ("Europe/Amsterdam", 60),
    ("Europe/Berlin", 60),
    ("Europe/Madrid", 60),
    ("Europe/Paris", 60),
    ("Europe/Rome", 60),
    ("Europe/Stockholm", 60),
    ("Europe/Warsaw", 60),
    ("Africa/Cairo", 120),
    ("Africa/Johannesburg", 120),
    ("Europe/Athens", 120),
    ("Europe/Helsinki", 120),
    ("Europe/Kyiv", 120),
    ("Africa/Nairobi", 180),
    ("Asia/Riyadh", 180),
    ("Europe/Istanbul", 180),
    ("Europe/Moscow", 180),
    ("Asia/Tehran", 210),
    ("Asia/Dubai", 240),
    ("Asia/Karachi", 300),
    ("Asia/Kolkata", 330),
    ("Asia/Kathmandu", 345),
    ("Asia/Dhaka", 360),
    ("Asia/Bangkok", 420),
    ("Asia/Jakarta", 420),
    ("Asia/Hong_Kong", 480),
    ("Asia/Manila", 480),
    ("Asia/Shanghai", 480),
    ("Asia/Singapore", 480),
    ("Australia/Perth", 480),
    ("Asia/Seoul", 540),
    ("Asia/Tokyo", 540),
    ("Australia/Adelaide", 570),
    ("Australia/Brisbane", 600),
    ("Australia/Melbourne", 600),
    ("Australia/Sydney", 600),
    ("Pacific/Auckland", 720),
    ("America/St_Johns", -210),
    ("America/Argentina/Buenos_Aires", -180),
    ("America/Sao_Paulo", -180),
    ("America/Halifax", -240),
    ("America/Santiago", -240),
    ("America/Bogota", -300),
    ("America/Lima", -300),
    ("America/New_York", -300),
    ("America/Toronto", -300),
    ("America/Chicago", -360),
    ("America/Mexico_City", -360),
    ("America/Denver", -420),
    ("America/Phoenix", -420),
    ("America/Los_Angeles", -480),
    ("America/Tijuana", -480),
    ("America/Vancouver", -480),
    ("America/Anchorage", -540),
    ("Pacific/Honolulu", -600),
];

static BUILTIN: OnceLock<TimeZoneCatalog> = OnceLock::new();

/// Immutable identifier → offset table. Loaded once, never mutated; safe to
/// share across threads without locking.
#[derive(Debug, Clone)]
pub struct TimeZoneCatalog {
    offsets: HashMap<String, i32>,
}

impl TimeZoneCatalog {
    /// The process-wide catalog over the built-in zone table, built on first use.
    pub fn builtin() -> &'static TimeZoneCatalog {
        BUILTIN.get_or_init(|| {
            TimeZoneCatalog::from_table(
                BUILTIN_ZONES
                    .iter()
                    .map(|&(name, offset)| (name.to_string(), offset)),
            )
        })
    }

    /// Build a catalog from an explicit identifier → offset-minutes table.
    pub fn from_table(entries: impl IntoIterator<Item = (String, i32)>) -> Self {
        Self {
            offsets: entries.into_iter().collect(),
        }
    }

    /// Snapshot every IANA zone's offset at `reference` into a fixed table.
    ///
    /// This is the "load from an external time-zone database at startup"
    /// path. The snapshot is taken once; the resulting catalog still has one
    /// constant offset per zone, so DST transitions after `reference` are
    /// not reflected.
    pub fn from_tz_database(reference: DateTime<Utc>) -> Self {
        let naive = reference.naive_utc();
        Self::from_table(chrono_tz::TZ_VARIANTS.iter().map(|tz| {
            let seconds = tz
                .offset_from_utc_datetime(&naive)
                .fix()
                .local_minus_utc();
            (tz.name().to_string(), seconds / 60)
        }))
    }

    /// Number of named zones in the table.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Resolve a zone identifier to its signed UTC offset in minutes.
    ///
    /// Named zones are looked up in the table; `GMT±H[:MM]` and `UTC±H[:MM]`
    /// forms resolve without a table entry.
    ///
    /// # Errors
    /// Returns [`EngineError::UnknownTimeZone`] when the identifier is neither
    /// in the table nor a valid fixed-offset form.
    pub fn offset_minutes(&self, zone: &str) -> Result<i32> {
        if let Some(&offset) = self.offsets.get(zone) {
            return Ok(offset);
        }
        parse_fixed_offset(zone).ok_or_else(|| EngineError::UnknownTimeZone(zone.to_string()))
    }
}

/// Parse fixed-offset identifiers: `GMT+0`, `GMT-5`, `GMT+5:30`, `UTC+05:45`.
///
/// Hours up to 14, minutes 0-59. Bare `GMT`/`UTC` mean zero. Anything else
/// (missing sign, out-of-range components) is rejected.
fn parse_fixed_offset(zone: &str) -> Option<i32> {
    let rest = zone
        .strip_prefix("GMT")
        .or_else(|| zone.strip_prefix("UTC"))?;
    if rest.is_empty() {
        return Some(0);
    }

    let (sign, digits) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };

    let (hours_str, minutes_str) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None => (digits, "0"),
    };

    // `str::parse` accepts a leading sign, which would let "GMT+-5" through.
    if !hours_str.bytes().all(|b| b.is_ascii_digit())
        || !minutes_str.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hours: i32 = hours_str.parse().ok()?;
    let minutes: i32 = minutes_str.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}
