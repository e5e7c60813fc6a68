//! SQLite-backed implementation of the controller's record store seam.

use crate::core::controller::RecordStore;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{OvertimeRecord, RecordDraft};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(database: &str) -> AppResult<Self> {
        let pool = DbPool::new(database)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl RecordStore for SqliteStore {
    fn list_by_technician(&mut self, technician: &str) -> AppResult<Vec<OvertimeRecord>> {
        queries::list_by_technician(&self.pool.conn, technician)
    }

    fn list_all(&mut self) -> AppResult<Vec<OvertimeRecord>> {
        queries::list_all(&self.pool.conn)
    }

    fn create(&mut self, draft: &RecordDraft) -> AppResult<i64> {
        queries::insert_record(&self.pool.conn, draft)
    }

    fn update_by_id(&mut self, id: i64, draft: &RecordDraft) -> AppResult<()> {
        queries::update_record(&self.pool.conn, id, draft)
    }

    fn delete_by_id(&mut self, id: i64) -> AppResult<()> {
        queries::delete_record(&self.pool.conn, id)
    }

    fn delete_all(&mut self) -> AppResult<()> {
        queries::delete_all_records(&self.pool.conn)
    }
}
