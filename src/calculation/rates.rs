//! Hourly rate, advance payment and mid-month proration.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::error::{EngineError, EngineResult};
use crate::models::ReferenceMonth;

/// Computes the hourly rate: contracted monthly salary over contracted
/// monthly hours, rounded to 2 decimal places half-up.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// let rate = hourly_rate(Decimal::new(220000, 2), 220).unwrap();
/// assert_eq!(rate, Decimal::new(1000, 2)); // R$10.00
/// ```
pub fn hourly_rate(monthly_salary: Decimal, monthly_hours: u32) -> EngineResult<Decimal> {
    if monthly_hours == 0 {
        return Err(EngineError::validation(
            "monthly_hours",
            "must be greater than zero",
        ));
    }
    Ok(round_currency(monthly_salary / Decimal::from(monthly_hours)))
}

/// Computes the default advance amount from a percentage of the base
/// value, rounded to 2 decimal places.
pub fn advance_amount(base_value: Decimal, percentage: Decimal) -> Decimal {
    round_currency(base_value * percentage / Decimal::ONE_HUNDRED)
}

/// Validates an explicitly supplied advance against the base value.
///
/// An explicit advance overrides the computed default but must satisfy
/// `0 <= advance <= base`.
pub fn validate_advance(advance: Decimal, base_value: Decimal) -> EngineResult<()> {
    if advance < Decimal::ZERO {
        return Err(EngineError::validation(
            "advance_value",
            "must not be negative",
        ));
    }
    if advance > base_value {
        return Err(EngineError::validation(
            "advance_value",
            format!("advance {advance} exceeds base salary {base_value}"),
        ));
    }
    Ok(())
}

/// Computes the proportional salary for a contractor hired mid-month.
///
/// Worked calendar days are the days from the hire date to the end of
/// the month, inclusive; the salary is scaled by
/// `worked_days / days_in_month` and rounded to 2 decimal places.
pub fn prorated_salary(
    monthly_salary: Decimal,
    month: ReferenceMonth,
    hire_date: NaiveDate,
) -> Decimal {
    let days_in_month = month.days_in_month();
    let worked_days = days_in_month - (hire_date.day() - 1);
    round_currency(
        monthly_salary * Decimal::from(worked_days) / Decimal::from(days_in_month),
    )
}

/// The base value for the month: the full contracted salary, or the
/// prorated salary when the hire date falls inside the reference month.
pub fn effective_base_salary(
    monthly_salary: Decimal,
    month: ReferenceMonth,
    hire_date: Option<NaiveDate>,
) -> Decimal {
    match hire_date {
        Some(hired) if month.contains(hired) => prorated_salary(monthly_salary, month, hired),
        _ => monthly_salary,
    }
}
