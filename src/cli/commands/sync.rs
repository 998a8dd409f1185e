use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notifier;
use crate::core::sync::{SyncLogic, SyncMode};
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::remote::RemoteClient;
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { local } = cmd {
        let store = CodeStore::open(&cfg.database)?;
        let presenter = notifier::select(cfg.notifier);

        let result = if *local || cfg.local_mode {
            header("scanqr sync (local mode)");
            SyncLogic::sync_all(&store, SyncMode::Local)
        } else {
            header(format!("scanqr sync → {}", cfg.api_base_url));
            let client = RemoteClient::new(&cfg.api_base_url, cfg.request_timeout_secs)?;
            SyncLogic::sync_all(&store, SyncMode::Remote(&client))
        };

        match result {
            Ok(report) if report.simulated => {
                success(format!("Sync simulated: {} codes", report.sent));
                let _ = presenter.notify("Sync", "Simulated sync (local mode), nothing was sent");
            }
            Ok(report) => {
                success(format!("Sync completed: {} codes sent", report.sent));
            }
            Err(e) => {
                let _ = presenter.notify("Sync failed", &e.to_string());
                return Err(e);
            }
        }
    }

    Ok(())
}
