use crate::db::store::CodeStore;
use crate::errors::{AppError, AppResult};
use crate::models::scanned_code::ScannedCode;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_millis;
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Flat record written to CSV/JSON files.
#[derive(Debug, Serialize)]
pub struct CodeExport {
    pub id: String,
    pub data: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: i64,
    pub scanned_at: String,
}

impl From<ScannedCode> for CodeExport {
    fn from(c: ScannedCode) -> Self {
        Self {
            scanned_at: format_millis(c.timestamp),
            id: c.id,
            data: c.data,
            kind: c.kind,
            timestamp: c.timestamp,
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        store: &CodeStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<CodeExport> = store
            .query_all()?
            .into_iter()
            .map(CodeExport::from)
            .collect();

        if rows.is_empty() {
            warning("No scanned codes to export.");
        }

        match format {
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
        }

        Ok(rows.len())
    }
}

/// Refuse to overwrite an existing file unless `force` is set or the user
/// confirms.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten".to_string(),
        ))
    }
}

fn export_json(rows: &[CodeExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    success(format!("JSON export completed: {}", path.display()));
    Ok(())
}

fn export_csv(rows: &[CodeExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }
    wtr.flush()?;

    success(format!("CSV export completed: {}", path.display()));
    Ok(())
}
