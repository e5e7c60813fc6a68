//! Record lifecycle orchestration: select/load, create, update, delete-one
//! and the guarded delete-all, run against an opaque record store.
//!
//! Operations are strictly sequential. Each one drives its store calls to
//! completion before the controller accepts the next, so a reload always
//! reflects the mutation that triggered it.

use crate::core::aggregate::total_duration;
use crate::core::duration::WorkDuration;
use crate::core::guard;
use crate::core::validate::ValidationPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::{OvertimeRecord, RecordDraft};

/// Persistence seam. The SQLite implementation lives in `db::store`;
/// tests substitute their own.
pub trait RecordStore {
    /// Records for one technician, most recent start first.
    fn list_by_technician(&mut self, technician: &str) -> AppResult<Vec<OvertimeRecord>>;

    /// All records in store order, for export.
    fn list_all(&mut self) -> AppResult<Vec<OvertimeRecord>>;

    fn create(&mut self, draft: &RecordDraft) -> AppResult<i64>;

    fn update_by_id(&mut self, id: i64, draft: &RecordDraft) -> AppResult<()>;

    fn delete_by_id(&mut self, id: i64) -> AppResult<()>;

    fn delete_all(&mut self) -> AppResult<()>;
}

pub struct Controller<'a, S: RecordStore> {
    store: &'a mut S,
    policy: ValidationPolicy,
    reset_code: String,

    selected: Option<String>,
    editing_id: Option<i64>,
    pending: RecordDraft,
    records: Vec<OvertimeRecord>,
    total: WorkDuration,
}

impl<'a, S: RecordStore> Controller<'a, S> {
    pub fn new(store: &'a mut S, policy: ValidationPolicy, reset_code: String) -> Self {
        Self {
            store,
            policy,
            reset_code,
            selected: None,
            editing_id: None,
            pending: RecordDraft::default(),
            records: Vec::new(),
            total: WorkDuration::ZERO,
        }
    }

    pub fn selected_technician(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn pending(&self) -> &RecordDraft {
        &self.pending
    }

    pub fn records(&self) -> &[OvertimeRecord] {
        &self.records
    }

    pub fn total(&self) -> WorkDuration {
        self.total
    }

    /// Selects a technician and loads their records. A store failure is
    /// surfaced as `LoadFailed` but leaves the controller in a stable
    /// state: selection kept, empty record set, zero total.
    pub fn select_technician(&mut self, technician: &str) -> AppResult<()> {
        self.selected = Some(technician.to_string());
        self.reload()
    }

    fn reload(&mut self) -> AppResult<()> {
        let Some(name) = self.selected.clone() else {
            self.apply_records(Vec::new());
            return Ok(());
        };
        match self.store.list_by_technician(&name) {
            Ok(records) => {
                self.apply_records(records);
                Ok(())
            }
            Err(e) => {
                self.apply_records(Vec::new());
                Err(AppError::LoadFailed(e.to_string()))
            }
        }
    }

    /// Replaces the in-memory record set and re-runs the aggregation.
    fn apply_records(&mut self, records: Vec<OvertimeRecord>) {
        self.total = total_duration(&records);
        self.records = records;
    }

    /// Enters edit mode for an already-loaded record, seeding the pending
    /// fields from it.
    pub fn begin_edit(&mut self, id: i64) -> AppResult<()> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == id)
            .ok_or(AppError::RecordNotFound(id))?;
        self.pending = record.to_draft();
        self.editing_id = Some(id);
        Ok(())
    }

    /// Overwrites the pending fields. Editing mode keeps the technician of
    /// the record under edit; it is never changed after creation.
    pub fn set_pending(&mut self, mut draft: RecordDraft) {
        if self.editing_id.is_some() {
            draft.technician = self.pending.technician.clone();
        }
        self.pending = draft;
    }

    /// Validates and persists the pending fields: update when editing,
    /// create otherwise. On a store failure the pending fields survive so
    /// the caller can retry without losing input.
    pub fn submit(&mut self) -> AppResult<i64> {
        self.policy.validate(&self.pending)?;

        let result = match self.editing_id {
            Some(id) => self.store.update_by_id(id, &self.pending).map(|_| id),
            None => self.store.create(&self.pending),
        };

        let id = result.map_err(|e| AppError::SaveFailed(e.to_string()))?;

        self.editing_id = None;
        self.pending = RecordDraft::default();
        self.reload()?;
        Ok(id)
    }

    /// Deletes one record and reloads. On failure the record stays and the
    /// in-memory set is untouched.
    pub fn delete_one(&mut self, id: i64) -> AppResult<()> {
        self.store
            .delete_by_id(id)
            .map_err(|e| AppError::DeleteFailed(e.to_string()))?;
        self.reload()
    }

    /// Guarded delete-all. A wrong token never reaches the store.
    pub fn delete_all(&mut self, token: &str) -> AppResult<()> {
        guard::authorize(token, &self.reset_code)?;
        self.store
            .delete_all()
            .map_err(|e| AppError::DeleteFailed(e.to_string()))?;
        self.apply_records(Vec::new());
        Ok(())
    }
}
