use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Result};

const TIMESTAMP_MIGRATION: &str = "20250310_0002_add_codigos_timestamp";

/// Ensure that the internal `log` table exists.
pub(crate) fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Column names of `codigos`, in declaration order.
pub fn codes_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('codigos')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

fn codes_has_timestamp_column(conn: &Connection) -> Result<bool> {
    Ok(codes_columns(conn)?.iter().any(|c| c == "timestamp"))
}

/// Create `codigos` with the current layout if it is missing. Every column
/// has a safe default; `id` is generated by SQLite.
fn create_codes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS codigos (
            id        TEXT PRIMARY KEY NOT NULL DEFAULT (lower(hex(randomblob(16)))),
            data      TEXT NOT NULL DEFAULT '',
            type      TEXT NOT NULL DEFAULT 'qr',
            timestamp INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER) * 1000)
        );
        "#,
    )?;
    Ok(())
}

/// Add the `timestamp` column to a table created by an older schema.
///
/// `ALTER TABLE ... ADD COLUMN` only accepts constant defaults, so the column
/// is added with 0 and existing rows are stamped with the migration time in
/// the same transaction.
fn migrate_add_timestamp_to_codes(conn: &Connection) -> AppResult<()> {
    if codes_has_timestamp_column(conn)? {
        return Ok(());
    }

    warning("Adding 'timestamp' column to codigos table...");

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "ALTER TABLE codigos ADD COLUMN timestamp INTEGER NOT NULL DEFAULT 0",
        [],
    )
    .map_err(|e| AppError::Migration(format!("Failed to add 'timestamp' column: {e}")))?;

    let stamped = tx.execute(
        "UPDATE codigos SET timestamp = CAST(strftime('%s', 'now') AS INTEGER) * 1000
         WHERE timestamp = 0",
        [],
    )?;
    tx.commit()?;

    if let Err(e) = audit(
        conn,
        "migration_applied",
        TIMESTAMP_MIGRATION,
        &format!("Added timestamp to codigos ({stamped} existing rows stamped)"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!(
        "Migration applied: {} → {} existing rows stamped",
        TIMESTAMP_MIGRATION, stamped
    ));

    Ok(())
}

/// Public entry point: bring the schema up to date. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    create_codes_table(conn)?;
    migrate_add_timestamp_to_codes(conn)?;
    Ok(())
}

/// Drop the codes table. The next `run_pending_migrations` recreates it.
pub fn drop_codes_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("DROP TABLE IF EXISTS codigos;")?;
    Ok(())
}
