use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !ask_confirmation("Delete ALL stored codes? This action is irreversible.", *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = CodeStore::open(&cfg.database)?;
        let removed = DeleteLogic::clear(&store)?;
        success(format!("{} codes have been deleted.", removed));
    }

    Ok(())
}
