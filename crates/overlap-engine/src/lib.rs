//! # overlap-engine
//!
//! Weekly time-zone availability overlap for remote-job matching.
//!
//! A job posting carries required weekly slots (day-of-week, start/end hour,
//! time zone); a worker profile carries availability slots in their own zone.
//! This crate normalizes both onto a shared UTC week-minute axis and computes
//! how much of the requirement the availability covers.
//!
//! The whole pipeline is pure and synchronous: no I/O, no shared mutable
//! state beyond the read-only [`TimeZoneCatalog`], safe to call concurrently
//! from any number of threads.
//!
//! ## Modules
//!
//! - [`catalog`] — time-zone identifier → fixed UTC offset table
//! - [`slot`] — the validated [`WeeklySlot`] value type
//! - [`normalize`] — slots → canonical UTC week-minute intervals
//! - [`overlap`] — interval union and required/available intersection
//! - [`summary`] — per-pair [`MatchSummary`] verdict
//! - [`error`] — error types
//!
//! ```
//! use overlap_engine::{summarize, TimeZoneCatalog, WeeklySlot};
//!
//! let required = vec![WeeklySlot::new(1, 9, 17, "GMT+0").unwrap()];
//! let available = vec![WeeklySlot::new(1, 13, 21, "GMT+0").unwrap()];
//!
//! let summary = summarize(&required, &available, TimeZoneCatalog::builtin()).unwrap();
//! assert_eq!(summary.covered_minutes, 240);
//! assert_eq!(summary.coverage_ratio, 0.5);
//! ```

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod overlap;
pub mod slot;
pub mod summary;

pub use catalog::TimeZoneCatalog;
pub use error::{EngineError, Result};
pub use normalize::{normalize, normalize_all, CanonicalInterval, MINUTES_PER_WEEK};
pub use overlap::{overlap_minutes, union, union_minutes};
pub use slot::WeeklySlot;
pub use summary::{summarize, MatchSummary};
