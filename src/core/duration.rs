//! Elapsed-time computation between two timestamps.
//!
//! Durations are clamped at zero: this code also runs over stored data
//! that may predate validation, so an inverted range is not an error here.

use chrono::NaiveDateTime;
use std::ops::Add;

/// Non-negative whole-minute duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkDuration {
    minutes: i64,
}

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration { minutes: 0 };

    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes: minutes.max(0),
        }
    }

    /// Elapsed time between `start` and `end`, zero when `end <= start`.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::from_minutes((end - start).num_minutes())
    }

    pub fn total_minutes(&self) -> i64 {
        self.minutes
    }

    /// Whole hours, unbounded.
    pub fn hours(&self) -> i64 {
        self.minutes / 60
    }

    /// Remaining minutes, 0–59.
    pub fn minutes(&self) -> i64 {
        self.minutes % 60
    }

    /// On-screen form, e.g. "02:30". Hours grow past two digits if needed.
    pub fn hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hours(), self.minutes())
    }

    /// Export form: decimal hours (2h30m → 2.5).
    pub fn decimal_hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }
}

impl Add for WorkDuration {
    type Output = WorkDuration;

    fn add(self, rhs: WorkDuration) -> WorkDuration {
        WorkDuration {
            minutes: self.minutes + rhs.minutes,
        }
    }
}
