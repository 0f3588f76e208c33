//! Earnings calculation: overtime, holiday work, night shift and DSR.
//!
//! All premiums come from the company multiplier configuration as
//! additional percentages over the base rate. Amounts are rounded to
//! 2 decimal places at the point of computation, never deferred to the
//! final total.

use rust_decimal::Decimal;

use crate::calculation::{round_currency, MonthPartition};
use crate::config::MultiplierConfig;
use crate::models::MonthlyInputs;

/// The itemized earnings components for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarningsBreakdown {
    /// Overtime pay: `hours × rate × overtime factor`.
    pub overtime_amount: Decimal,
    /// Sunday/holiday work pay: `hours × rate × holiday factor`.
    pub holiday_amount: Decimal,
    /// Night-shift pay: `hours × rate × night factor`. The factor
    /// applies to the full hour, a contractual choice, not the
    /// statutory premium-fraction rule.
    pub night_amount: Decimal,
    /// Weekly-rest compensation derived from the premium amounts.
    pub dsr_amount: Decimal,
}

impl EarningsBreakdown {
    /// Total earnings: the post-advance base plus every component.
    pub fn total(&self, remaining_value: Decimal) -> Decimal {
        remaining_value
            + self.overtime_amount
            + self.holiday_amount
            + self.night_amount
            + self.dsr_amount
    }
}

/// Computes a premium amount: `hours × rate × factor`, rounded to
/// 2 decimal places.
fn premium_amount(hours: Decimal, hourly_rate: Decimal, factor: Decimal) -> Decimal {
    round_currency(hours * hourly_rate * factor)
}

/// Computes the DSR (weekly-rest compensation) amount.
///
/// DSR spreads the month's overtime and holiday pay over the non-working
/// days: `(overtime + holiday) / business_days × sunday_or_holiday_days`,
/// rounded to 2 decimal places. It is zero whenever both premium amounts
/// are zero, and recomputed whenever they or the calendar change.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{dsr_amount, MonthPartition};
/// use rust_decimal::Decimal;
///
/// let partition = MonthPartition { business_days: 25, sunday_or_holiday_days: 6 };
/// let dsr = dsr_amount(Decimal::new(15000, 2), Decimal::new(16000, 2), partition);
/// assert_eq!(dsr, Decimal::new(7440, 2)); // R$74.40
/// ```
pub fn dsr_amount(
    overtime_amount: Decimal,
    holiday_amount: Decimal,
    partition: MonthPartition,
) -> Decimal {
    let premium = overtime_amount + holiday_amount;
    if premium.is_zero() || partition.business_days == 0 {
        return Decimal::ZERO;
    }
    round_currency(
        premium / Decimal::from(partition.business_days)
            * Decimal::from(partition.sunday_or_holiday_days),
    )
}

/// Computes every earnings component from the monthly inputs.
pub fn calculate_earnings(
    inputs: &MonthlyInputs,
    hourly_rate: Decimal,
    config: &MultiplierConfig,
    partition: MonthPartition,
) -> EarningsBreakdown {
    let overtime_amount = premium_amount(inputs.overtime_hours, hourly_rate, config.overtime_factor());
    let holiday_amount = premium_amount(inputs.holiday_hours, hourly_rate, config.holiday_factor());
    let night_amount = premium_amount(inputs.night_hours, hourly_rate, config.night_shift_factor());
    let dsr_amount = dsr_amount(overtime_amount, holiday_amount, partition);

    EarningsBreakdown {
        overtime_amount,
        holiday_amount,
        night_amount,
        dsr_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_partition() -> MonthPartition {
        MonthPartition {
            business_days: 25,
            sunday_or_holiday_days: 6,
        }
    }

    fn base_inputs() -> MonthlyInputs {
        MonthlyInputs {
            overtime_hours: dec("10"),
            holiday_hours: dec("8"),
            night_hours: dec("20"),
            ..MonthlyInputs::default()
        }
    }

    #[test]
    fn test_earnings_base_case() {
        let breakdown = calculate_earnings(
            &base_inputs(),
            dec("10.00"),
            &MultiplierConfig::system_default(),
            base_partition(),
        );

        assert_eq!(breakdown.overtime_amount, dec("150.00"));
        assert_eq!(breakdown.holiday_amount, dec("160.00"));
        assert_eq!(breakdown.night_amount, dec("240.00"));
        assert_eq!(breakdown.dsr_amount, dec("74.40"));
    }

    #[test]
    fn test_total_adds_remaining_value() {
        let breakdown = calculate_earnings(
            &base_inputs(),
            dec("10.00"),
            &MultiplierConfig::system_default(),
            base_partition(),
        );
        assert_eq!(breakdown.total(dec("1320.00")), dec("1944.40"));
    }

    #[test]
    fn test_night_factor_applies_to_full_hour() {
        // 1 night hour at R$10.00 pays R$12.00, not the R$2.00 premium.
        let inputs = MonthlyInputs {
            night_hours: dec("1"),
            ..MonthlyInputs::default()
        };
        let breakdown = calculate_earnings(
            &inputs,
            dec("10.00"),
            &MultiplierConfig::system_default(),
            base_partition(),
        );
        assert_eq!(breakdown.night_amount, dec("12.00"));
    }

    #[test]
    fn test_zero_inputs_yield_zero_components() {
        let breakdown = calculate_earnings(
            &MonthlyInputs::default(),
            dec("10.00"),
            &MultiplierConfig::system_default(),
            base_partition(),
        );
        assert_eq!(breakdown.overtime_amount, Decimal::ZERO);
        assert_eq!(breakdown.holiday_amount, Decimal::ZERO);
        assert_eq!(breakdown.night_amount, Decimal::ZERO);
        assert_eq!(breakdown.dsr_amount, Decimal::ZERO);
        assert_eq!(breakdown.total(dec("1320.00")), dec("1320.00"));
    }

    #[test]
    fn test_dsr_zero_without_premium_pay() {
        // Night hours alone never produce DSR.
        let inputs = MonthlyInputs {
            night_hours: dec("40"),
            ..MonthlyInputs::default()
        };
        let breakdown = calculate_earnings(
            &inputs,
            dec("10.00"),
            &MultiplierConfig::system_default(),
            base_partition(),
        );
        assert_eq!(breakdown.dsr_amount, Decimal::ZERO);
    }

    #[test]
    fn test_dsr_guards_against_zero_business_days() {
        let partition = MonthPartition {
            business_days: 0,
            sunday_or_holiday_days: 30,
        };
        assert_eq!(dsr_amount(dec("100.00"), dec("0"), partition), Decimal::ZERO);
    }

    #[test]
    fn test_dsr_rounds_half_up() {
        // 100 / 24 * 7 = 29.1666... -> 29.17
        let partition = MonthPartition {
            business_days: 24,
            sunday_or_holiday_days: 7,
        };
        assert_eq!(dsr_amount(dec("100.00"), dec("0"), partition), dec("29.17"));
    }

    #[test]
    fn test_dsr_tracks_calendar_changes() {
        // Same premium amounts, different partitions, different DSR.
        let tight = MonthPartition {
            business_days: 26,
            sunday_or_holiday_days: 4,
        };
        let loose = MonthPartition {
            business_days: 23,
            sunday_or_holiday_days: 8,
        };
        let in_tight = dsr_amount(dec("310.00"), dec("0"), tight);
        let in_loose = dsr_amount(dec("310.00"), dec("0"), loose);
        assert!(in_loose > in_tight);
    }

    #[test]
    fn test_fractional_hours_round_at_component() {
        // 1.5h * 11.43 * 1.5 = 25.7175 -> 25.72
        let inputs = MonthlyInputs {
            overtime_hours: dec("1.5"),
            ..MonthlyInputs::default()
        };
        let breakdown = calculate_earnings(
            &inputs,
            dec("11.43"),
            &MultiplierConfig::system_default(),
            base_partition(),
        );
        assert_eq!(breakdown.overtime_amount, dec("25.72"));
    }

    #[test]
    fn test_custom_multipliers() {
        let config = MultiplierConfig {
            overtime_percentage: dec("60"),
            holiday_percentage: dec("150"),
            night_shift_percentage: dec("35"),
            advance_percentage: dec("40"),
        };
        let breakdown = calculate_earnings(&base_inputs(), dec("10.00"), &config, base_partition());
        assert_eq!(breakdown.overtime_amount, dec("160.00")); // 10 * 10 * 1.6
        assert_eq!(breakdown.holiday_amount, dec("200.00")); // 8 * 10 * 2.5
        assert_eq!(breakdown.night_amount, dec("270.00")); // 20 * 10 * 1.35
    }
}
