use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let prompt = format!("Delete code {}? This action is irreversible.", id);
        if !ask_confirmation(&prompt, *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = CodeStore::open(&cfg.database)?;
        if DeleteLogic::delete_one(&store, id)? {
            success(format!("Code {} has been deleted.", id));
        } else {
            info(format!("No code with id {}.", id));
        }
    }

    Ok(())
}
