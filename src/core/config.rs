use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Editor resolution: `--editor`, then $EDITOR / $VISUAL, then a
    /// platform default.
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{requested}'"));
                return Ok(());
            }
            _ if requested == fallback => {
                return Err(AppError::Config(format!(
                    "failed to run editor '{requested}'"
                )));
            }
            _ => warning(format!(
                "Editor '{requested}' not available, falling back to '{fallback}'"
            )),
        }

        let status = Command::new(&fallback)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if status.success() {
            success(format!("Configuration file edited using '{fallback}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "editor '{fallback}' exited with {status}"
            )))
        }
    }
}
