//! Calculation logic for the contractor payroll engine.
//!
//! This module contains all the pure calculation functions: the calendar
//! partition behind weekly-rest compensation, hourly rate and mid-month
//! proration, premium earnings, deductions, and the aggregating pipeline
//! that produces every derived field of a payroll record.

mod aggregate;
mod calendar;
mod deductions;
mod earnings;
mod rates;

pub use aggregate::{compute, line_items, Computation};
pub use calendar::{resolve_month, HolidayTable, MonthPartition};
pub use deductions::{
    absence_discount, calculate_deductions, commute_reimbursement, late_discount,
    DeductionsBreakdown,
};
pub use earnings::{calculate_earnings, dsr_amount, EarningsBreakdown};
pub use rates::{
    advance_amount, effective_base_salary, hourly_rate, prorated_salary, validate_advance,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Quantizes a monetary amount to 2 decimal places, rounding half-up.
///
/// Applied at every computation point so no field ever carries more than
/// 2 decimal places into a later step.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("73.3333").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from_str("73.33").unwrap());
/// let midpoint = Decimal::from_str("2.345").unwrap();
/// assert_eq!(round_currency(midpoint), Decimal::from_str("2.35").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
        assert_eq!(round_currency(dec("1.015")), dec("1.02"));
    }

    #[test]
    fn test_round_currency_leaves_two_places_alone() {
        assert_eq!(round_currency(dec("10.00")), dec("10.00"));
        assert_eq!(round_currency(dec("73.33")), dec("73.33"));
    }
}
