use crate::db::log::audit;
use crate::db::store::CodeStore;
use crate::errors::{AppError, AppResult};
use crate::models::scanned_code::ScannedCode;
use crate::remote::RemoteClient;
use crate::ui::messages::{info, warning};

/// Anything stored codes can be pushed to, one at a time.
pub trait SyncTarget {
    fn push(&self, code: &ScannedCode) -> AppResult<()>;
}

impl SyncTarget for RemoteClient {
    fn push(&self, code: &ScannedCode) -> AppResult<()> {
        self.create(code)
    }
}

pub enum SyncMode<'a> {
    /// No network calls; the run is simulated.
    Local,
    Remote(&'a dyn SyncTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub sent: usize,
    pub simulated: bool,
}

pub struct SyncLogic;

impl SyncLogic {
    /// Push every stored code, newest first, awaiting each request before the
    /// next. The first failure aborts the run.
    pub fn sync_all(store: &CodeStore, mode: SyncMode<'_>) -> AppResult<SyncReport> {
        let codes = store.query_all()?;

        let report = match mode {
            SyncMode::Local => {
                info(format!(
                    "Local mode: {} codes would be sent (no network calls)",
                    codes.len()
                ));
                SyncReport {
                    sent: codes.len(),
                    simulated: true,
                }
            }
            SyncMode::Remote(target) => {
                for (i, code) in codes.iter().enumerate() {
                    target.push(code).map_err(|e| match e {
                        AppError::Network(reason) => AppError::Network(format!(
                            "sync stopped at code {} of {} ({}): {}",
                            i + 1,
                            codes.len(),
                            code.id,
                            reason
                        )),
                        other => other,
                    })?;
                }
                SyncReport {
                    sent: codes.len(),
                    simulated: false,
                }
            }
        };

        let message = if report.simulated {
            format!("Simulated sync of {} codes", report.sent)
        } else {
            format!("Synced {} codes", report.sent)
        };
        if let Err(e) = audit(store.conn(), "sync", "", &message) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(report)
    }
}
