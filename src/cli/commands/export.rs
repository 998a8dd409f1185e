use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::store::CodeStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = CodeStore::open(&cfg.database)?;
        ExportLogic::export(&store, *format, file, *force)?;
    }
    Ok(())
}
