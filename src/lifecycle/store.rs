//! Persistence seam for payroll records.
//!
//! The engine does not own persistence; it talks to a [`PayrollStore`]
//! collaborator. The store is responsible for the atomicity guarantees
//! the lifecycle requires: duplicate-rejecting inserts, exclusive access
//! during read-modify-write cycles, and all-or-nothing commits of a
//! record together with its regenerated line items.
//!
//! [`InMemoryStore`] is the bundled implementation, suitable for tests
//! and for embedding the engine without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollDetails, PayrollLineItem, PayrollRecord, RecordStatus, ReferenceMonth};

/// Storage contract for payroll records and their line items.
///
/// Implementations must treat `(contractor, reference month)` as unique
/// and must hold an exclusive lock on the target record for the whole
/// closure passed to [`PayrollStore::with_record`].
pub trait PayrollStore {
    /// Inserts a new record with its line items.
    ///
    /// Fails with [`EngineError::DuplicateRecord`] when a record already
    /// exists for the same contractor and reference month. The check and
    /// the insert are a single atomic step: two concurrent inserts for
    /// the same pair cannot both succeed.
    fn insert(&self, record: PayrollRecord, items: Vec<PayrollLineItem>) -> EngineResult<()>;

    /// Fetches a record with its line items.
    fn get(&self, id: Uuid) -> EngineResult<PayrollDetails>;

    /// Runs `op` against the record under an exclusive lock and commits
    /// the modified record and items only when `op` returns `Ok`.
    ///
    /// On error nothing is written: a failure mid-computation leaves the
    /// stored record and its items exactly as they were. When `op`
    /// changes the record's contractor or month, the commit re-validates
    /// the uniqueness constraint and fails with
    /// [`EngineError::DuplicateRecord`] on a clash.
    fn with_record<F>(&self, id: Uuid, op: F) -> EngineResult<PayrollDetails>
    where
        F: FnOnce(&mut PayrollRecord, &mut Vec<PayrollLineItem>) -> EngineResult<()>;

    /// Returns true if a record exists for the contractor and month.
    /// Advisory only; [`PayrollStore::insert`] is the backstop.
    fn exists_for_month(&self, contractor_id: Uuid, month: ReferenceMonth) -> bool;

    /// Lists the ids of the contractor's records currently in the
    /// `Open` status.
    fn open_record_ids_for(&self, contractor_id: Uuid) -> Vec<Uuid>;
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<Uuid, (PayrollRecord, Vec<PayrollLineItem>)>,
    by_month: HashMap<(Uuid, ReferenceMonth), Uuid>,
}

/// A thread-safe in-memory [`PayrollStore`].
///
/// A single mutex guards all records; it is held for the entire
/// [`PayrollStore::with_record`] closure, which serializes concurrent
/// recalculations of the same record and makes record-plus-items commits
/// indivisible.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// The number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("payroll store mutex poisoned")
    }
}

impl PayrollStore for InMemoryStore {
    fn insert(&self, record: PayrollRecord, items: Vec<PayrollLineItem>) -> EngineResult<()> {
        let mut inner = self.lock();
        let key = (record.contractor_id, record.reference_month);
        if inner.by_month.contains_key(&key) {
            return Err(EngineError::DuplicateRecord {
                contractor_id: record.contractor_id,
                month: record.reference_month,
            });
        }
        inner.by_month.insert(key, record.id);
        inner.records.insert(record.id, (record, items));
        Ok(())
    }

    fn get(&self, id: Uuid) -> EngineResult<PayrollDetails> {
        let inner = self.lock();
        let (record, items) = inner
            .records
            .get(&id)
            .ok_or(EngineError::RecordNotFound { id })?;
        Ok(PayrollDetails {
            record: record.clone(),
            line_items: items.clone(),
        })
    }

    fn with_record<F>(&self, id: Uuid, op: F) -> EngineResult<PayrollDetails>
    where
        F: FnOnce(&mut PayrollRecord, &mut Vec<PayrollLineItem>) -> EngineResult<()>,
    {
        let mut inner = self.lock();
        let (stored_record, stored_items) = inner
            .records
            .get(&id)
            .ok_or(EngineError::RecordNotFound { id })?;
        let old_key = (stored_record.contractor_id, stored_record.reference_month);

        // Work on a copy; the stored state is only replaced on success.
        let mut record = stored_record.clone();
        let mut items = stored_items.clone();
        op(&mut record, &mut items)?;

        let new_key = (record.contractor_id, record.reference_month);
        if new_key != old_key {
            if inner.by_month.contains_key(&new_key) {
                return Err(EngineError::DuplicateRecord {
                    contractor_id: record.contractor_id,
                    month: record.reference_month,
                });
            }
            inner.by_month.remove(&old_key);
            inner.by_month.insert(new_key, id);
        }

        let details = PayrollDetails {
            record: record.clone(),
            line_items: items.clone(),
        };
        inner.records.insert(id, (record, items));
        Ok(details)
    }

    fn exists_for_month(&self, contractor_id: Uuid, month: ReferenceMonth) -> bool {
        self.lock().by_month.contains_key(&(contractor_id, month))
    }

    fn open_record_ids_for(&self, contractor_id: Uuid) -> Vec<Uuid> {
        self.lock()
            .records
            .values()
            .filter(|(record, _)| {
                record.contractor_id == contractor_id && record.status == RecordStatus::Open
            })
            .map(|(record, _)| record.id)
            .collect()
    }
}
