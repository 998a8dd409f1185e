use crate::models::scanned_code::ScannedCode;
use crate::models::stats::CodeStats;
use crate::utils::time::now_millis;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<ScannedCode> {
    Ok(ScannedCode {
        id: row.get("id")?,
        data: row.get("data")?,
        kind: row.get("type")?,
        timestamp: row.get("timestamp")?,
    })
}

/// Insert a new code. `id` comes from the column default, `timestamp` from
/// the wall clock; the stored row is returned.
pub fn insert_code(conn: &Connection, data: &str, kind: &str) -> Result<ScannedCode> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO codigos (data, type, timestamp) VALUES (?1, ?2, ?3)
         RETURNING id, data, type, timestamp",
    )?;
    stmt.query_row(params![data, kind, now_millis()], map_row)
}

pub fn load_codes(conn: &Connection) -> Result<Vec<ScannedCode>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, data, type, timestamp FROM codigos
         ORDER BY timestamp DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_code_by_id(conn: &Connection, id: &str) -> Result<Option<ScannedCode>> {
    conn.query_row(
        "SELECT id, data, type, timestamp FROM codigos WHERE id = ?1",
        [id],
        map_row,
    )
    .optional()
}

pub fn code_exists(conn: &Connection, data: &str) -> Result<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM codigos WHERE data = ?1 LIMIT 1")?;
    stmt.exists([data])
}

/// Returns the number of removed rows (0 or 1).
pub fn delete_code(conn: &Connection, id: &str) -> Result<usize> {
    conn.execute("DELETE FROM codigos WHERE id = ?1", [id])
}

pub fn clear_codes(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM codigos", [])
}

pub fn code_stats(conn: &Connection) -> Result<CodeStats> {
    let (total, last): (i64, Option<i64>) = conn.query_row(
        "SELECT COUNT(*), MAX(timestamp) FROM codigos",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let mut stmt = conn.prepare_cached(
        "SELECT type, COUNT(*) FROM codigos GROUP BY type ORDER BY type ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut stats = CodeStats {
        total,
        last_scan_timestamp: last,
        ..Default::default()
    };
    for r in rows {
        let (kind, count) = r?;
        stats.by_type.insert(kind, count);
    }
    Ok(stats)
}
