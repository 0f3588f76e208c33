//! Calendar resolution for weekly-rest compensation.
//!
//! This module partitions a reference month into business days and
//! "Sunday or public holiday" days. The two buckets drive the DSR
//! (weekly-rest compensation) proration: premium pay earned on business
//! days is shared proportionally across the non-working days.
//!
//! The holiday table is an injected dependency, never global state, so
//! the resolution is deterministic and side-effect-free.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::ReferenceMonth;

/// A jurisdiction's public holiday dates.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::HolidayTable;
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::brazilian_national(2026);
/// assert!(table.is_holiday(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
/// assert!(!table.is_holiday(NaiveDate::from_ymd_opt(2026, 5, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTable {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayTable {
    /// A table with no holidays.
    pub fn empty() -> Self {
        HolidayTable::default()
    }

    /// Builds a table from an explicit set of dates.
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        HolidayTable {
            dates: dates.into_iter().collect(),
        }
    }

    /// The fixed-date Brazilian national holidays for a given year.
    ///
    /// Covers the holidays that fall on the same calendar date every
    /// year; movable feasts (Carnival, Good Friday, Corpus Christi) must
    /// be supplied separately when the jurisdiction observes them.
    pub fn brazilian_national(year: i32) -> Self {
        const FIXED: [(u32, u32); 8] = [
            (1, 1),   // Confraternização Universal
            (4, 21),  // Tiradentes
            (5, 1),   // Dia do Trabalho
            (9, 7),   // Independência
            (10, 12), // Nossa Senhora Aparecida
            (11, 2),  // Finados
            (11, 15), // Proclamação da República
            (12, 25), // Natal
        ];
        HolidayTable::new(
            FIXED
                .iter()
                .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day)),
        )
    }

    /// Returns true if `date` is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// The two-bucket partition of a calendar month.
///
/// The buckets partition the month exactly:
/// `business_days + sunday_or_holiday_days == days_in_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPartition {
    /// Days that are neither Sundays nor public holidays.
    pub business_days: u32,
    /// Sundays plus non-Sunday public holidays. A holiday falling on a
    /// Sunday is counted once.
    pub sunday_or_holiday_days: u32,
}

/// Partitions a reference month into business and Sunday/holiday days.
///
/// Every calendar day lands in exactly one bucket: Sundays and public
/// holidays in the second, everything else in the first.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{resolve_month, HolidayTable};
/// use payroll_engine::models::ReferenceMonth;
///
/// // May 2026 has 5 Sundays plus Labour Day on Friday May 1st.
/// let month = ReferenceMonth::new(2026, 5).unwrap();
/// let partition = resolve_month(month, &HolidayTable::brazilian_national(2026));
/// assert_eq!(partition.business_days, 25);
/// assert_eq!(partition.sunday_or_holiday_days, 6);
/// ```
pub fn resolve_month(month: ReferenceMonth, table: &HolidayTable) -> MonthPartition {
    let mut business_days = 0;
    let mut sunday_or_holiday_days = 0;

    for day in month.days() {
        if day.weekday() == Weekday::Sun || table.is_holiday(day) {
            sunday_or_holiday_days += 1;
        } else {
            business_days += 1;
        }
    }

    MonthPartition {
        business_days,
        sunday_or_holiday_days,
    }
}
