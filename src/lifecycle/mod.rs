//! Record lifecycle management.
//!
//! The [`LifecycleManager`] orchestrates the life of a payroll record:
//! creation with duplicate prevention, recalculation while open, the
//! open → closed → paid state machine, and the reactive bulk
//! recalculation run when a contractor profile changes.
//!
//! ```text
//!   create            close             mark_paid
//!  ───────▶  OPEN  ─────────▶  CLOSED  ──────────▶  PAID (terminal)
//!              ▲                  │
//!              └────── reopen ────┘
//! ```

mod store;

pub use store::{InMemoryStore, PayrollStore};

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{compute, line_items, HolidayTable};
use crate::config::MultiplierConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ContractorProfile, MonthlyInputs, PayrollDetails, PayrollRecord, RecordStatus, RecordUpdate,
    ReferenceMonth,
};

/// Orchestrates payroll record creation, recalculation and lifecycle
/// transitions over an injected [`PayrollStore`].
///
/// The manager itself is stateless beyond its collaborators; all record
/// state lives in the store, and all arithmetic is delegated to the pure
/// calculation pipeline.
#[derive(Debug)]
pub struct LifecycleManager<S: PayrollStore> {
    store: S,
    holidays: HolidayTable,
}

impl<S: PayrollStore> LifecycleManager<S> {
    /// Creates a manager over the given store and holiday table.
    pub fn new(store: S, holidays: HolidayTable) -> Self {
        LifecycleManager { store, holidays }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a payroll record for a contractor and reference month.
    ///
    /// The record is computed from the profile, the multiplier
    /// configuration and the supplied inputs, persisted in the `Open`
    /// status together with its line items.
    ///
    /// # Errors
    ///
    /// [`EngineError::DuplicateRecord`] when a record already exists for
    /// the pair; [`EngineError::Validation`] for out-of-range profile or
    /// input values.
    pub fn create(
        &self,
        profile: &ContractorProfile,
        config: &MultiplierConfig,
        month: ReferenceMonth,
        inputs: MonthlyInputs,
    ) -> EngineResult<PayrollDetails> {
        // Advisory check; the store's insert is the atomic backstop.
        if self.store.exists_for_month(profile.id, month) {
            return Err(EngineError::DuplicateRecord {
                contractor_id: profile.id,
                month,
            });
        }

        let computation = compute(profile, config, month, &inputs, None, &self.holidays)?;

        let mut record = PayrollRecord {
            id: Uuid::new_v4(),
            contractor_id: profile.id,
            organization_id: profile.organization_id,
            reference_month: month,
            status: RecordStatus::Open,
            inputs,
            base_value: Decimal::ZERO,
            hourly_rate: Decimal::ZERO,
            advance_value: Decimal::ZERO,
            advance_percentage: Decimal::ZERO,
            remaining_value: Decimal::ZERO,
            overtime_amount: Decimal::ZERO,
            holiday_amount: Decimal::ZERO,
            night_amount: Decimal::ZERO,
            dsr_amount: Decimal::ZERO,
            total_earnings: Decimal::ZERO,
            late_discount: Decimal::ZERO,
            absence_discount: Decimal::ZERO,
            commute_reimbursement: Decimal::ZERO,
            total_discounts: Decimal::ZERO,
            gross_value: Decimal::ZERO,
            net_value: Decimal::ZERO,
            closed_at: None,
            paid_at: None,
        };
        computation.write_to(&mut record);
        let items = line_items(&record);

        info!(
            record_id = %record.id,
            contractor_id = %profile.id,
            month = %month,
            net = %record.net_value,
            "created payroll record"
        );

        let details = PayrollDetails {
            record: record.clone(),
            line_items: items.clone(),
        };
        self.store.insert(record, items)?;
        Ok(details)
    }

    /// Fetches a record with its itemized breakdown.
    pub fn get_details(&self, id: Uuid) -> EngineResult<PayrollDetails> {
        self.store.get(id)
    }

    /// Recalculates an open record, applying a typed partial update.
    ///
    /// The update may change input fields, override the advance, or
    /// request a profile re-sync; the full computation pipeline then
    /// reruns and the line items are regenerated, all within the store's
    /// exclusive lock.
    ///
    /// When `update.sync_profile` is false the record's current advance
    /// is preserved; when true the advance is re-derived from the
    /// configured percentage (unless `update.advance_value` overrides
    /// it explicitly).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTransition`] unless the record is `Open`.
    pub fn recalculate(
        &self,
        id: Uuid,
        profile: &ContractorProfile,
        config: &MultiplierConfig,
        update: &RecordUpdate,
    ) -> EngineResult<PayrollDetails> {
        let details = self.store.with_record(id, |record, items| {
            if record.status != RecordStatus::Open {
                return Err(EngineError::InvalidTransition {
                    operation: "recalculate",
                    status: record.status,
                });
            }

            let inputs = update.merged_into(&record.inputs);
            let advance_override = match (update.advance_value, update.sync_profile) {
                (Some(advance), _) => Some(advance),
                (None, true) => None,
                (None, false) => Some(record.advance_value),
            };

            let computation = compute(
                profile,
                config,
                record.reference_month,
                &inputs,
                advance_override,
                &self.holidays,
            )?;

            record.inputs = inputs;
            computation.write_to(record);
            *items = line_items(record);
            Ok(())
        })?;

        debug!(record_id = %id, net = %details.record.net_value, "recalculated payroll record");
        Ok(details)
    }

    /// Closes an open record, stamping `closed_at`.
    pub fn close(&self, id: Uuid) -> EngineResult<PayrollDetails> {
        let details = self.store.with_record(id, |record, _| {
            if record.status != RecordStatus::Open {
                return Err(EngineError::InvalidTransition {
                    operation: "close",
                    status: record.status,
                });
            }
            record.status = RecordStatus::Closed;
            record.closed_at = Some(Utc::now());
            Ok(())
        })?;
        info!(record_id = %id, "closed payroll record");
        Ok(details)
    }

    /// Marks a closed record as paid, stamping `paid_at`. Paid is
    /// terminal: no operation transitions a record out of it.
    pub fn mark_paid(&self, id: Uuid) -> EngineResult<PayrollDetails> {
        let details = self.store.with_record(id, |record, _| {
            if record.status != RecordStatus::Closed {
                return Err(EngineError::InvalidTransition {
                    operation: "mark paid",
                    status: record.status,
                });
            }
            record.status = RecordStatus::Paid;
            record.paid_at = Some(Utc::now());
            Ok(())
        })?;
        info!(record_id = %id, "marked payroll record paid");
        Ok(details)
    }

    /// Reopens a closed record, clearing `closed_at`.
    pub fn reopen(&self, id: Uuid) -> EngineResult<PayrollDetails> {
        let details = self.store.with_record(id, |record, _| {
            if record.status != RecordStatus::Closed {
                return Err(EngineError::InvalidTransition {
                    operation: "reopen",
                    status: record.status,
                });
            }
            record.status = RecordStatus::Open;
            record.closed_at = None;
            Ok(())
        })?;
        info!(record_id = %id, "reopened payroll record");
        Ok(details)
    }

    /// Reassigns an open record to a different contractor.
    ///
    /// The new contractor must belong to the same organization as the
    /// record; the `(new contractor, month)` uniqueness constraint is
    /// re-validated on commit; base salary and advance are re-synced
    /// from the new profile before recomputation.
    pub fn change_contractor(
        &self,
        id: Uuid,
        new_profile: &ContractorProfile,
        config: &MultiplierConfig,
    ) -> EngineResult<PayrollDetails> {
        let details = self.store.with_record(id, |record, items| {
            if record.status != RecordStatus::Open {
                return Err(EngineError::InvalidTransition {
                    operation: "reassign",
                    status: record.status,
                });
            }
            if new_profile.organization_id != record.organization_id {
                return Err(EngineError::validation(
                    "contractor_id",
                    "new contractor belongs to a different organization",
                ));
            }

            record.contractor_id = new_profile.id;
            let computation = compute(
                new_profile,
                config,
                record.reference_month,
                &record.inputs,
                None,
                &self.holidays,
            )?;
            computation.write_to(record);
            *items = line_items(record);
            Ok(())
        })?;

        info!(
            record_id = %id,
            contractor_id = %new_profile.id,
            "reassigned payroll record"
        );
        Ok(details)
    }

    /// Recalculates every open record of a contractor with a forced
    /// profile re-sync.
    ///
    /// Invoked by the contractor-profile update operation whenever a
    /// profile changes, so still-open months track the current salary,
    /// advance and subsidy settings. Closed and paid records are never
    /// touched; a record that closes concurrently is skipped.
    pub fn recalculate_open_records(
        &self,
        profile: &ContractorProfile,
        config: &MultiplierConfig,
    ) -> EngineResult<Vec<PayrollDetails>> {
        let sync = RecordUpdate::profile_sync();
        let mut refreshed = Vec::new();
        for id in self.store.open_record_ids_for(profile.id) {
            match self.recalculate(id, profile, config, &sync) {
                Ok(details) => refreshed.push(details),
                // The record left the open status between listing and
                // locking; it must not be altered.
                Err(EngineError::InvalidTransition { .. }) => continue,
                Err(err) => return Err(err),
            }
        }
        info!(
            contractor_id = %profile.id,
            refreshed = refreshed.len(),
            "recalculated open records after profile change"
        );
        Ok(refreshed)
    }
}
