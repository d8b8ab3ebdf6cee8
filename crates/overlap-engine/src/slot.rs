//! The weekly slot value type — one interval of required or available time.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One recurring weekly interval: day-of-week + start/end hour + time zone.
///
/// Serializes to the REST payload shape used by job and profile records:
/// `{"dayOfWeek": 1, "startHour": 9, "endHour": 17, "timeZone": "GMT+0"}`.
///
/// Invariants, enforced at construction (including deserialization):
/// - `day_of_week` in 0..=6 (0 = Sunday)
/// - `start_hour` in 0..=23, `end_hour` in 1..=24
/// - `start_hour < end_hour` — a slot never spans midnight; an overnight
///   requirement is expressed as two adjacent-day slots by the caller.
///
/// Whether `time_zone` resolves is checked when the slot is normalized, not
/// here, so a catalog is not needed to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSlot")]
pub struct WeeklySlot {
    day_of_week: u8,
    start_hour: u8,
    end_hour: u8,
    time_zone: String,
}

/// Unvalidated wire form; `WeeklySlot: TryFrom<RawSlot>` is the only way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSlot {
    day_of_week: u8,
    start_hour: u8,
    end_hour: u8,
    time_zone: String,
}

impl TryFrom<RawSlot> for WeeklySlot {
    type Error = EngineError;

    fn try_from(raw: RawSlot) -> Result<Self> {
        WeeklySlot::new(raw.day_of_week, raw.start_hour, raw.end_hour, raw.time_zone)
    }
}

impl WeeklySlot {
    /// Construct a validated slot.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidSlot`] for out-of-range fields or
    /// `start_hour >= end_hour`. Values are never clamped into range.
    pub fn new(
        day_of_week: u8,
        start_hour: u8,
        end_hour: u8,
        time_zone: impl Into<String>,
    ) -> Result<Self> {
        if day_of_week > 6 {
            return Err(EngineError::InvalidSlot(format!(
                "dayOfWeek {} out of range 0..=6",
                day_of_week
            )));
        }
        if start_hour > 23 {
            return Err(EngineError::InvalidSlot(format!(
                "startHour {} out of range 0..=23",
                start_hour
            )));
        }
        if end_hour < 1 || end_hour > 24 {
            return Err(EngineError::InvalidSlot(format!(
                "endHour {} out of range 1..=24",
                end_hour
            )));
        }
        if start_hour >= end_hour {
            return Err(EngineError::InvalidSlot(format!(
                "startHour {} must be before endHour {}",
                start_hour, end_hour
            )));
        }
        Ok(Self {
            day_of_week,
            start_hour,
            end_hour,
            time_zone: time_zone.into(),
        })
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Start hour in the slot's own time zone, 0..=23.
    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    /// End hour in the slot's own time zone, 1..=24 (exclusive bound).
    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    /// The slot's time-zone identifier (named zone or `GMT±H[:MM]` form).
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Length of the slot in minutes.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end_hour - self.start_hour) * 60
    }
}
