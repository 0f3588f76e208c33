//! Reference month model.
//!
//! A payroll record is keyed by a reference month: the calendar month and
//! year the pay computation covers. At most one record may exist per
//! contractor per reference month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month and year identifying a payroll period.
///
/// Displays as `MM/YYYY`, matching the format used on pay statements.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReferenceMonth;
///
/// let month = ReferenceMonth::new(2026, 1).unwrap();
/// assert_eq!(month.to_string(), "01/2026");
/// assert_eq!(month.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReferenceMonth {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl ReferenceMonth {
    /// Creates a reference month, validating that `month` is in 1-12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::validation(
                "month",
                format!("month must be between 1 and 12, got {month}"),
            ));
        }
        Ok(ReferenceMonth { year, month })
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Month range is validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("invalid reference month {}/{}", self.month, self.year))
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let first_of_next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        first_of_next
            .unwrap_or_else(|| panic!("invalid reference month {}/{}", self.month, self.year))
            .pred_opt()
            .expect("month start has a predecessor")
    }

    /// Returns the number of calendar days in the month (28-31).
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Iterates over every calendar day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day().iter_days().take(self.days_in_month() as usize)
    }
}

impl std::fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
