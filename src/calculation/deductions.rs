//! Deductions calculation: lateness, absence and commute reimbursement.

use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::models::{ContractorProfile, MonthlyInputs};

/// Divisor for day-based absence discounts. Absence is always discounted
/// in thirtieths of the base salary, whatever the month's actual length.
const ABSENCE_DAY_DIVISOR: u32 = 30;

/// The itemized deduction components for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionsBreakdown {
    /// Lateness deduction: `(minutes / 60) × hourly rate`.
    pub late_discount: Decimal,
    /// Absence deduction: `(base salary / 30) × absence days`.
    pub absence_discount: Decimal,
    /// Commute subsidy reversed for absent days: the subsidy was assumed
    /// paid for the month, so days not worked return it.
    pub commute_reimbursement: Decimal,
    /// The operator-entered manual discount, carried as-is.
    pub manual_discount: Decimal,
}

impl DeductionsBreakdown {
    /// Total discounts: every component plus the manual discount.
    pub fn total(&self) -> Decimal {
        self.late_discount + self.absence_discount + self.commute_reimbursement + self.manual_discount
    }
}

/// Computes the lateness deduction, rounded to 2 decimal places.
pub fn late_discount(late_minutes: u32, hourly_rate: Decimal) -> Decimal {
    round_currency(Decimal::from(late_minutes) / Decimal::from(60) * hourly_rate)
}

/// Computes the day-based absence deduction, rounded to 2 decimal places.
///
/// Absence is deliberately discounted per whole day rather than per hour:
/// `(base_value / 30) × days`, regardless of how many hours a day
/// nominally contains.
pub fn absence_discount(base_value: Decimal, absence_days: u32) -> Decimal {
    round_currency(
        base_value / Decimal::from(ABSENCE_DAY_DIVISOR) * Decimal::from(absence_days),
    )
}

/// Computes the commute subsidy reimbursement for absent days.
///
/// Only applies when the contractor's commute subsidy is enabled: with
/// the flag off the reimbursement is zero regardless of absence days.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::commute_reimbursement;
/// use payroll_engine::models::ContractorProfile;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let mut profile = ContractorProfile::new(
///     Uuid::new_v4(),
///     Uuid::new_v4(),
///     "João".to_string(),
///     Decimal::new(220000, 2),
///     220,
/// )
/// .unwrap();
/// profile.commute_subsidy_enabled = true;
/// profile.commute_fare = Decimal::new(460, 2); // R$4.60
/// profile.commute_trips_per_day = 2;
///
/// assert_eq!(commute_reimbursement(&profile, 1), Decimal::new(920, 2)); // R$9.20
/// ```
pub fn commute_reimbursement(profile: &ContractorProfile, absence_days: u32) -> Decimal {
    if !profile.commute_subsidy_enabled {
        return Decimal::ZERO;
    }
    round_currency(
        profile.commute_fare
            * Decimal::from(profile.commute_trips_per_day)
            * Decimal::from(absence_days),
    )
}

/// Computes every deduction component from the monthly inputs.
pub fn calculate_deductions(
    inputs: &MonthlyInputs,
    profile: &ContractorProfile,
    base_value: Decimal,
    hourly_rate: Decimal,
) -> DeductionsBreakdown {
    DeductionsBreakdown {
        late_discount: late_discount(inputs.late_minutes, hourly_rate),
        absence_discount: absence_discount(base_value, inputs.absence_days),
        commute_reimbursement: commute_reimbursement(profile, inputs.absence_days),
        manual_discount: inputs.manual_discount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn profile_with_subsidy(enabled: bool) -> ContractorProfile {
        let mut profile = ContractorProfile::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "João Pereira".to_string(),
            dec("2200.00"),
            220,
        )
        .unwrap();
        profile.commute_subsidy_enabled = enabled;
        profile.commute_fare = dec("4.60");
        profile.commute_trips_per_day = 2;
        profile
    }

    #[test]
    fn test_late_discount_base_case() {
        assert_eq!(late_discount(30, dec("10.00")), dec("5.00"));
    }

    #[test]
    fn test_late_discount_rounds() {
        // 25 / 60 * 11.43 = 4.7625 -> 4.76
        assert_eq!(late_discount(25, dec("11.43")), dec("4.76"));
    }

    #[test]
    fn test_late_discount_zero_minutes() {
        assert_eq!(late_discount(0, dec("10.00")), Decimal::ZERO);
    }

    #[test]
    fn test_absence_discount_is_day_based() {
        // 2200 / 30 * 1 = 73.333... -> 73.33
        assert_eq!(absence_discount(dec("2200.00"), 1), dec("73.33"));
        // Two days double the single-day amount before rounding:
        // 2200 / 30 * 2 = 146.666... -> 146.67
        assert_eq!(absence_discount(dec("2200.00"), 2), dec("146.67"));
    }

    #[test]
    fn test_absence_discount_zero_days() {
        assert_eq!(absence_discount(dec("2200.00"), 0), Decimal::ZERO);
    }

    #[test]
    fn test_commute_reimbursement_when_enabled() {
        let profile = profile_with_subsidy(true);
        assert_eq!(commute_reimbursement(&profile, 1), dec("9.20"));
        assert_eq!(commute_reimbursement(&profile, 3), dec("27.60"));
    }

    #[test]
    fn test_commute_reimbursement_zero_when_disabled() {
        let profile = profile_with_subsidy(false);
        assert_eq!(commute_reimbursement(&profile, 5), Decimal::ZERO);
    }

    #[test]
    fn test_commute_reimbursement_zero_absences() {
        let profile = profile_with_subsidy(true);
        assert_eq!(commute_reimbursement(&profile, 0), Decimal::ZERO);
    }

    #[test]
    fn test_total_includes_manual_discount() {
        let inputs = MonthlyInputs {
            late_minutes: 30,
            absence_days: 1,
            manual_discount: dec("50.00"),
            ..MonthlyInputs::default()
        };
        let profile = profile_with_subsidy(true);
        let breakdown = calculate_deductions(&inputs, &profile, dec("2200.00"), dec("10.00"));

        assert_eq!(breakdown.late_discount, dec("5.00"));
        assert_eq!(breakdown.absence_discount, dec("73.33"));
        assert_eq!(breakdown.commute_reimbursement, dec("9.20"));
        assert_eq!(breakdown.manual_discount, dec("50.00"));
        assert_eq!(breakdown.total(), dec("137.53"));
    }

    #[test]
    fn test_zero_inputs_yield_zero_total() {
        let profile = profile_with_subsidy(true);
        let breakdown = calculate_deductions(
            &MonthlyInputs::default(),
            &profile,
            dec("2200.00"),
            dec("10.00"),
        );
        assert_eq!(breakdown.total(), Decimal::ZERO);
    }
}
