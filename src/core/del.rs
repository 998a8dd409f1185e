use crate::db::log::audit;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one code by id. Returns whether a row existed.
    pub fn delete_one(store: &CodeStore, id: &str) -> AppResult<bool> {
        let removed = store.delete_by_id(id)?;
        if removed {
            log_quietly(store, "del", id, "Deleted scanned code");
        }
        Ok(removed)
    }

    /// Delete every code. Returns the number of removed rows.
    pub fn clear(store: &CodeStore) -> AppResult<usize> {
        let removed = store.delete_all()?;
        log_quietly(
            store,
            "clear",
            "",
            &format!("Deleted all scanned codes ({removed} rows)"),
        );
        Ok(removed)
    }
}

fn log_quietly(store: &CodeStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(store.conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
