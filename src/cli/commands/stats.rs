use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats::print_stats;
use crate::db::store::CodeStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let store = CodeStore::open(&cfg.database)?;
        let stats = store.compute_statistics()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            print_stats(&stats);
        }
    }

    Ok(())
}
