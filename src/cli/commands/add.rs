use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::models::symbology::Symbology;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { data, kind } = cmd {
        let store = CodeStore::open(&cfg.database)?;
        let code = AddLogic::apply(&store, data, &Symbology::parse(kind))?;
        success(format!(
            "Stored {} [{}] as {}",
            code.data, code.kind, code.id
        ));
    }

    Ok(())
}
