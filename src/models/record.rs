//! Payroll record model and its monthly inputs.
//!
//! The [`PayrollRecord`] is the central entity of the engine: one per
//! contractor per reference month. Its computed fields are derived by the
//! calculation pipeline and never hand-edited; all mutation goes through
//! the lifecycle manager.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollLineItem, ReferenceMonth};

/// The lifecycle status of a payroll record.
///
/// Records are created `Open`, move to `Closed` when the month is
/// finalized, and to `Paid` once payment is made. `Closed` records may be
/// reopened; `Paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// The record is editable and subject to recalculation.
    Open,
    /// The record is finalized; amounts are frozen until reopened.
    Closed,
    /// The record has been paid. No further transition is permitted.
    Paid,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Open => write!(f, "open"),
            RecordStatus::Closed => write!(f, "closed"),
            RecordStatus::Paid => write!(f, "paid"),
        }
    }
}

/// The variable inputs entered for a month.
///
/// These are the only operator-supplied quantities; everything else on a
/// record is derived from them, the contractor profile and the multiplier
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInputs {
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Hours worked on Sundays or public holidays.
    pub holiday_hours: Decimal,
    /// Night-shift hours worked.
    pub night_hours: Decimal,
    /// Minutes of lateness accumulated over the month.
    pub late_minutes: u32,
    /// Whole days of absence. Absence is always expressed in days.
    pub absence_days: u32,
    /// A free-form operator-entered deduction, added to discounts as-is.
    pub manual_discount: Decimal,
    /// Free-text notes attached to the record.
    pub notes: Option<String>,
}

impl MonthlyInputs {
    /// Validates that all quantities are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::validation(
                "overtime_hours",
                "must not be negative",
            ));
        }
        if self.holiday_hours < Decimal::ZERO {
            return Err(EngineError::validation(
                "holiday_hours",
                "must not be negative",
            ));
        }
        if self.night_hours < Decimal::ZERO {
            return Err(EngineError::validation(
                "night_hours",
                "must not be negative",
            ));
        }
        if self.manual_discount < Decimal::ZERO {
            return Err(EngineError::validation(
                "manual_discount",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

/// A typed partial update applied to an open record.
///
/// Every mutable input field appears here explicitly as an `Option`;
/// computed output fields are not representable, so they cannot be set
/// through a recalculation no matter what the caller sends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    /// New overtime hours, if changing.
    pub overtime_hours: Option<Decimal>,
    /// New holiday hours, if changing.
    pub holiday_hours: Option<Decimal>,
    /// New night-shift hours, if changing.
    pub night_hours: Option<Decimal>,
    /// New lateness minutes, if changing.
    pub late_minutes: Option<u32>,
    /// New absence day count, if changing.
    pub absence_days: Option<u32>,
    /// New manual discount, if changing.
    pub manual_discount: Option<Decimal>,
    /// New notes, if changing.
    pub notes: Option<String>,
    /// Explicit advance override. Must satisfy `0 <= advance <= base`.
    /// When absent the advance is recomputed from the configured
    /// percentage.
    pub advance_value: Option<Decimal>,
    /// When true, base salary, advance settings and commute subsidy
    /// fields are re-read from the current contractor profile before
    /// recomputation.
    pub sync_profile: bool,
}

impl RecordUpdate {
    /// A profile re-sync with no input changes, as used by the reactive
    /// recalculation trigger.
    pub fn profile_sync() -> Self {
        RecordUpdate {
            sync_profile: true,
            ..RecordUpdate::default()
        }
    }

    /// Applies this update on top of existing inputs, returning the
    /// merged result.
    pub fn merged_into(&self, current: &MonthlyInputs) -> MonthlyInputs {
        MonthlyInputs {
            overtime_hours: self.overtime_hours.unwrap_or(current.overtime_hours),
            holiday_hours: self.holiday_hours.unwrap_or(current.holiday_hours),
            night_hours: self.night_hours.unwrap_or(current.night_hours),
            late_minutes: self.late_minutes.unwrap_or(current.late_minutes),
            absence_days: self.absence_days.unwrap_or(current.absence_days),
            manual_discount: self.manual_discount.unwrap_or(current.manual_discount),
            notes: self.notes.clone().or_else(|| current.notes.clone()),
        }
    }
}

/// A contractor's payroll record for one reference month.
///
/// All monetary fields are quantized to 2 decimal places. Output fields
/// (everything from `base_value` down to `net_value`) are derived by the
/// calculation pipeline; only the lifecycle manager writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The contractor this record belongs to.
    pub contractor_id: Uuid,
    /// The organization owning the contractor at creation time.
    pub organization_id: Uuid,
    /// The month this record covers. Unique per contractor.
    pub reference_month: ReferenceMonth,
    /// The lifecycle status.
    pub status: RecordStatus,
    /// The operator-entered variable inputs.
    pub inputs: MonthlyInputs,
    /// The base salary for the month (prorated when the contractor was
    /// hired mid-month).
    pub base_value: Decimal,
    /// The hourly rate: contracted salary over contracted hours.
    pub hourly_rate: Decimal,
    /// The advance paid earlier in the month.
    pub advance_value: Decimal,
    /// The advance percentage used to derive `advance_value`, kept for
    /// line-item labelling.
    pub advance_percentage: Decimal,
    /// Base value minus advance.
    pub remaining_value: Decimal,
    /// Overtime pay.
    pub overtime_amount: Decimal,
    /// Sunday/holiday work pay.
    pub holiday_amount: Decimal,
    /// Night-shift pay.
    pub night_amount: Decimal,
    /// Weekly-rest compensation derived from overtime and holiday pay.
    pub dsr_amount: Decimal,
    /// Remaining value plus all earnings components.
    pub total_earnings: Decimal,
    /// Deduction for lateness.
    pub late_discount: Decimal,
    /// Day-based deduction for absences.
    pub absence_discount: Decimal,
    /// Commute subsidy reversed for absent days.
    pub commute_reimbursement: Decimal,
    /// All deductions, including the manual discount.
    pub total_discounts: Decimal,
    /// Gross value (equal to total earnings).
    pub gross_value: Decimal,
    /// Net value: earnings minus discounts. May be negative, signalling
    /// an overpayment.
    pub net_value: Decimal,
    /// When the record was closed, if it ever was.
    pub closed_at: Option<DateTime<Utc>>,
    /// When the record was paid, if it ever was.
    pub paid_at: Option<DateTime<Utc>>,
}

/// A record together with its regenerated line-item breakdown.
///
/// This is the read model returned by the lifecycle manager's query and
/// mutation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDetails {
    /// The payroll record.
    pub record: PayrollRecord,
    /// The itemized breakdown, in presentation order.
    pub line_items: Vec<PayrollLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Open).unwrap(),
            "\"open\""
        );
        assert_eq!(
            serde_json::to_string(&RecordStatus::Closed).unwrap(),
            "\"closed\""
        );
        assert_eq!(
            serde_json::to_string(&RecordStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RecordStatus::Open.to_string(), "open");
        assert_eq!(RecordStatus::Closed.to_string(), "closed");
        assert_eq!(RecordStatus::Paid.to_string(), "paid");
    }

    #[test]
    fn test_default_inputs_are_all_zero() {
        let inputs = MonthlyInputs::default();
        assert_eq!(inputs.overtime_hours, Decimal::ZERO);
        assert_eq!(inputs.holiday_hours, Decimal::ZERO);
        assert_eq!(inputs.night_hours, Decimal::ZERO);
        assert_eq!(inputs.late_minutes, 0);
        assert_eq!(inputs.absence_days, 0);
        assert_eq!(inputs.manual_discount, Decimal::ZERO);
        assert!(inputs.notes.is_none());
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_inputs_reject_negative_hours() {
        let inputs = MonthlyInputs {
            overtime_hours: dec("-1"),
            ..MonthlyInputs::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(EngineError::Validation { field, .. }) if field == "overtime_hours"
        ));
    }

    #[test]
    fn test_inputs_reject_negative_manual_discount() {
        let inputs = MonthlyInputs {
            manual_discount: dec("-10.00"),
            ..MonthlyInputs::default()
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_update_merges_only_set_fields() {
        let current = MonthlyInputs {
            overtime_hours: dec("10"),
            holiday_hours: dec("8"),
            night_hours: dec("20"),
            late_minutes: 30,
            absence_days: 1,
            manual_discount: dec("0"),
            notes: Some("initial".to_string()),
        };
        let update = RecordUpdate {
            overtime_hours: Some(dec("12")),
            absence_days: Some(2),
            ..RecordUpdate::default()
        };

        let merged = update.merged_into(&current);
        assert_eq!(merged.overtime_hours, dec("12"));
        assert_eq!(merged.absence_days, 2);
        // Untouched fields keep their current values.
        assert_eq!(merged.holiday_hours, dec("8"));
        assert_eq!(merged.night_hours, dec("20"));
        assert_eq!(merged.late_minutes, 30);
        assert_eq!(merged.notes.as_deref(), Some("initial"));
    }

    #[test]
    fn test_profile_sync_update_changes_no_inputs() {
        let current = MonthlyInputs {
            overtime_hours: dec("5"),
            ..MonthlyInputs::default()
        };
        let update = RecordUpdate::profile_sync();
        assert!(update.sync_profile);
        assert_eq!(update.merged_into(&current), current);
    }
}
