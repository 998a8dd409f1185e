//! Code Store: append-only log of scanned codes over the `codigos` table.

use crate::db::initialize::init_db;
use crate::db::migrate::drop_codes_table;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::scanned_code::ScannedCode;
use crate::models::stats::CodeStats;
use rusqlite::Connection;

pub struct CodeStore {
    pool: DbPool,
}

impl CodeStore {
    /// Open (or create) the file-backed store and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        let store = Self { pool };
        store.initialize()?;
        Ok(store)
    }

    /// Idempotent schema setup and additive migration.
    pub fn initialize(&self) -> AppResult<()> {
        init_db(&self.pool.conn)
    }

    pub fn insert(&self, data: &str, kind: &str) -> AppResult<ScannedCode> {
        Ok(queries::insert_code(&self.pool.conn, data, kind)?)
    }

    /// All rows, most recent first.
    pub fn query_all(&self) -> AppResult<Vec<ScannedCode>> {
        Ok(queries::load_codes(&self.pool.conn)?)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<ScannedCode>> {
        Ok(queries::load_code_by_id(&self.pool.conn, id)?)
    }

    pub fn exists_by_data(&self, data: &str) -> AppResult<bool> {
        Ok(queries::code_exists(&self.pool.conn, data)?)
    }

    /// Removes at most one row; an unknown id is not an error.
    pub fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(queries::delete_code(&self.pool.conn, id)? > 0)
    }

    pub fn delete_all(&self) -> AppResult<usize> {
        Ok(queries::clear_codes(&self.pool.conn)?)
    }

    pub fn compute_statistics(&self) -> AppResult<CodeStats> {
        Ok(queries::code_stats(&self.pool.conn)?)
    }

    pub fn drop_table(&self) -> AppResult<()> {
        drop_codes_table(&self.pool.conn)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}
