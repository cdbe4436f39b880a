//! Calendar period buckets.
//!
//! A goal's period maps each submission date to a bucket key; submissions
//! sharing a key are evaluated together.  Daily keys are unique per date, so
//! the same grouping pass handles every period uniformly.

use chrono::{Datelike, NaiveDate};
use metas_schemas::Period;

/// Bucket identifier for a date under the given period.
///
/// - Daily     → `2025-07-15`
/// - Weekly    → `2025-W29` (ISO week, year of the ISO week)
/// - Monthly   → `2025-07`
/// - Quarterly → `2025-Q3`
/// - Yearly    → `2025`
pub fn period_key(period: Period, date: NaiveDate) -> String {
    match period {
        Period::Daily => date.format("%Y-%m-%d").to_string(),
        Period::Weekly => {
            let iso = date.iso_week();
            format!("{:04}-W{:02}", iso.year(), iso.week())
        }
        Period::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
        Period::Quarterly => {
            format!("{:04}-Q{}", date.year(), (date.month() - 1) / 3 + 1)
        }
        Period::Yearly => format!("{:04}", date.year()),
    }
}

/// Inclusive date window for a reward query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The single-calendar-month window, `None` for an invalid year/month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start,
            end: next.pred_opt()?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
