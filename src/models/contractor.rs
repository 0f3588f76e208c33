//! Contractor profile model.
//!
//! This module defines the [`ContractorProfile`] struct representing an
//! independent service provider paid under a commercial contract. The
//! profile is owned by an external collaborator and is read-only to the
//! engine: the engine consumes it as input to the calculation pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// An independent contractor's pay-relevant profile.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ContractorProfile;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let profile = ContractorProfile::new(
///     Uuid::new_v4(),
///     Uuid::new_v4(),
///     "Maria Souza".to_string(),
///     Decimal::new(220000, 2), // R$2,200.00
///     220,
/// )
/// .unwrap();
/// assert!(profile.advance_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorProfile {
    /// Unique identifier for the contractor.
    pub id: Uuid,
    /// The organization this contractor belongs to. Records may only be
    /// reassigned between contractors of the same organization.
    pub organization_id: Uuid,
    /// The contractor's display name.
    pub name: String,
    /// The contracted monthly base salary.
    pub monthly_salary: Decimal,
    /// The contracted monthly hours (must be greater than zero).
    pub monthly_hours: u32,
    /// Whether an advance payment is made earlier in the month.
    pub advance_enabled: bool,
    /// The advance payment percentage of the base salary, when no
    /// company-level default applies. Must be within 0-100.
    pub advance_percentage: Option<Decimal>,
    /// Whether the contractor receives a per-trip commute subsidy.
    pub commute_subsidy_enabled: bool,
    /// The commute fare per trip.
    pub commute_fare: Decimal,
    /// The number of commute trips per working day.
    pub commute_trips_per_day: u32,
    /// The hire date, used to prorate the first month's salary when the
    /// contractor started mid-month.
    pub hire_date: Option<NaiveDate>,
}

impl ContractorProfile {
    /// Creates a profile with advance enabled and no commute subsidy,
    /// validating the salary and contracted hours.
    pub fn new(
        id: Uuid,
        organization_id: Uuid,
        name: String,
        monthly_salary: Decimal,
        monthly_hours: u32,
    ) -> EngineResult<Self> {
        if monthly_salary < Decimal::ZERO {
            return Err(EngineError::validation(
                "monthly_salary",
                "must not be negative",
            ));
        }
        if monthly_hours == 0 {
            return Err(EngineError::validation(
                "monthly_hours",
                "must be greater than zero",
            ));
        }
        Ok(ContractorProfile {
            id,
            organization_id,
            name,
            monthly_salary,
            monthly_hours,
            advance_enabled: true,
            advance_percentage: None,
            commute_subsidy_enabled: false,
            commute_fare: Decimal::ZERO,
            commute_trips_per_day: 0,
            hire_date: None,
        })
    }

    /// Validates the profile fields the engine relies on.
    ///
    /// Collaborators own the profile, so the engine re-checks its
    /// invariants at every entry point rather than trusting upstream
    /// storage: salary non-negative, contracted hours positive, advance
    /// percentage within 0-100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::validation(
                "monthly_salary",
                "must not be negative",
            ));
        }
        if self.monthly_hours == 0 {
            return Err(EngineError::validation(
                "monthly_hours",
                "must be greater than zero",
            ));
        }
        if let Some(pct) = self.advance_percentage {
            if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
                return Err(EngineError::validation(
                    "advance_percentage",
                    format!("must be between 0 and 100, got {pct}"),
                ));
            }
        }
        if self.commute_fare < Decimal::ZERO {
            return Err(EngineError::validation(
                "commute_fare",
                "must not be negative",
            ));
        }
        Ok(())
    }
}
