//! The full computation pipeline and line-item generation.
//!
//! [`compute`] turns a contractor profile, a multiplier configuration and
//! a set of monthly inputs into every derived field of a payroll record.
//! It is pure and deterministic: fixed inputs always produce identical
//! outputs, which is what makes recalculation idempotent.

use rust_decimal::Decimal;

use crate::calculation::{
    advance_amount, calculate_deductions, calculate_earnings, effective_base_salary, hourly_rate,
    resolve_month, validate_advance, HolidayTable,
};
use crate::config::MultiplierConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ContractorProfile, MonthlyInputs, PayrollLineItem, PayrollRecord, ReferenceMonth,
};

/// Every derived field of a payroll record, produced in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    /// The base salary for the month (prorated for mid-month hires).
    pub base_value: Decimal,
    /// The contractual hourly rate.
    pub hourly_rate: Decimal,
    /// The advance paid earlier in the month.
    pub advance_value: Decimal,
    /// The percentage used for the advance line-item label.
    pub advance_percentage: Decimal,
    /// Base value minus advance.
    pub remaining_value: Decimal,
    /// Overtime pay.
    pub overtime_amount: Decimal,
    /// Sunday/holiday work pay.
    pub holiday_amount: Decimal,
    /// Night-shift pay.
    pub night_amount: Decimal,
    /// Weekly-rest compensation.
    pub dsr_amount: Decimal,
    /// Remaining value plus all earnings components.
    pub total_earnings: Decimal,
    /// Lateness deduction.
    pub late_discount: Decimal,
    /// Day-based absence deduction.
    pub absence_discount: Decimal,
    /// Commute subsidy reversed for absent days.
    pub commute_reimbursement: Decimal,
    /// All deductions including the manual discount.
    pub total_discounts: Decimal,
    /// Gross value, equal to total earnings.
    pub gross_value: Decimal,
    /// Net value. Negative values are surfaced, never clamped: they
    /// signal an overpayment the operator must resolve.
    pub net_value: Decimal,
}

impl Computation {
    /// Writes every derived field onto a record, leaving identity,
    /// status, inputs and lifecycle timestamps untouched.
    pub fn write_to(&self, record: &mut PayrollRecord) {
        record.base_value = self.base_value;
        record.hourly_rate = self.hourly_rate;
        record.advance_value = self.advance_value;
        record.advance_percentage = self.advance_percentage;
        record.remaining_value = self.remaining_value;
        record.overtime_amount = self.overtime_amount;
        record.holiday_amount = self.holiday_amount;
        record.night_amount = self.night_amount;
        record.dsr_amount = self.dsr_amount;
        record.total_earnings = self.total_earnings;
        record.late_discount = self.late_discount;
        record.absence_discount = self.absence_discount;
        record.commute_reimbursement = self.commute_reimbursement;
        record.total_discounts = self.total_discounts;
        record.gross_value = self.gross_value;
        record.net_value = self.net_value;
    }
}

/// Runs the full calculation pipeline for one reference month.
///
/// Steps: proration of the base salary, hourly rate, advance (default
/// percentage or validated explicit override), calendar partition,
/// earnings with DSR, deductions, totals. Every monetary field is
/// quantized to 2 decimal places at its point of computation.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] when the profile or inputs carry
/// out-of-range values, or when an explicit advance falls outside
/// `0 ..= base value`.
pub fn compute(
    profile: &ContractorProfile,
    config: &MultiplierConfig,
    month: ReferenceMonth,
    inputs: &MonthlyInputs,
    advance_override: Option<Decimal>,
    table: &HolidayTable,
) -> EngineResult<Computation> {
    profile.validate()?;
    inputs.validate()?;

    let base_value = effective_base_salary(profile.monthly_salary, month, profile.hire_date);
    let rate = hourly_rate(profile.monthly_salary, profile.monthly_hours)?;

    let advance_percentage = if profile.advance_enabled {
        profile
            .advance_percentage
            .unwrap_or(config.advance_percentage)
    } else {
        Decimal::ZERO
    };
    let advance_value = match advance_override {
        Some(advance) => {
            validate_advance(advance, base_value)?;
            advance
        }
        None => {
            let advance = advance_amount(base_value, advance_percentage);
            validate_advance(advance, base_value)?;
            advance
        }
    };
    let remaining_value = base_value - advance_value;

    let partition = resolve_month(month, table);
    let earnings = calculate_earnings(inputs, rate, config, partition);
    let deductions = calculate_deductions(inputs, profile, base_value, rate);

    let total_earnings = earnings.total(remaining_value);
    let total_discounts = deductions.total();
    let gross_value = total_earnings;
    let net_value = gross_value - total_discounts;

    let computation = Computation {
        base_value,
        hourly_rate: rate,
        advance_value,
        advance_percentage,
        remaining_value,
        overtime_amount: earnings.overtime_amount,
        holiday_amount: earnings.holiday_amount,
        night_amount: earnings.night_amount,
        dsr_amount: earnings.dsr_amount,
        total_earnings,
        late_discount: deductions.late_discount,
        absence_discount: deductions.absence_discount,
        commute_reimbursement: deductions.commute_reimbursement,
        total_discounts,
        gross_value,
        net_value,
    };
    ensure_non_negative(&computation)?;
    Ok(computation)
}

/// Rejects computations where a component went negative, which can only
/// happen through an out-of-range multiplier configuration. Net value is
/// exempt: a negative net signals overpayment and must be surfaced.
fn ensure_non_negative(computation: &Computation) -> EngineResult<()> {
    let components = [
        ("overtime_amount", computation.overtime_amount),
        ("holiday_amount", computation.holiday_amount),
        ("night_amount", computation.night_amount),
        ("dsr_amount", computation.dsr_amount),
        ("late_discount", computation.late_discount),
        ("absence_discount", computation.absence_discount),
        ("commute_reimbursement", computation.commute_reimbursement),
        ("remaining_value", computation.remaining_value),
    ];
    for (field, amount) in components {
        if amount < Decimal::ZERO {
            return Err(EngineError::validation(
                field,
                format!("computed a negative amount ({amount})"),
            ));
        }
    }
    Ok(())
}

/// Regenerates the itemized breakdown for a computed record.
///
/// Order: the post-advance base credit, one credit per non-zero earnings
/// component, the advance debit (labelled with its percentage), then one
/// debit per non-zero deduction. Zero components produce no line, so the
/// item set is always exactly the decomposition of the record's current
/// amounts.
pub fn line_items(record: &PayrollRecord) -> Vec<PayrollLineItem> {
    let mut items = Vec::new();

    let credits = [
        ("Base salary (post-advance)".to_string(), record.remaining_value),
        ("Overtime".to_string(), record.overtime_amount),
        ("Sunday/holiday work".to_string(), record.holiday_amount),
        ("Night shift".to_string(), record.night_amount),
        (
            "Weekly rest compensation (DSR)".to_string(),
            record.dsr_amount,
        ),
    ];
    for (description, amount) in credits {
        if !amount.is_zero() {
            items.push(PayrollLineItem::credit(description, amount));
        }
    }

    if !record.advance_value.is_zero() {
        items.push(PayrollLineItem::debit(
            format!("Advance ({}%)", record.advance_percentage.normalize()),
            record.advance_value,
        ));
    }

    let debits = [
        ("Lateness".to_string(), record.late_discount),
        (
            format!("Absence ({} day(s))", record.inputs.absence_days),
            record.absence_discount,
        ),
        (
            "Commute subsidy reversal".to_string(),
            record.commute_reimbursement,
        ),
        ("Manual discount".to_string(), record.inputs.manual_discount),
    ];
    for (description, amount) in debits {
        if !amount.is_zero() {
            items.push(PayrollLineItem::debit(description, amount));
        }
    }

    items
}
