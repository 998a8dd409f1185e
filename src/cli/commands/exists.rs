use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::CodeStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Exists { data } = cmd {
        let store = CodeStore::open(&cfg.database)?;
        if store.exists_by_data(data)? {
            println!("yes");
        } else {
            println!("no");
        }
    }

    Ok(())
}
