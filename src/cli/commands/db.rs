use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::stats;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
        drop,
        yes,
    } = cmd
    {
        // Opening the store already runs pending migrations.
        let store = CodeStore::open(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            store.initialize()?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if *show_info {
            stats::print_db_info(&store, &cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn().execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        if *drop {
            if !ask_confirmation(
                "Drop the codes table? Every stored code will be lost.",
                *yes,
            ) {
                info("Operation cancelled.");
                return Ok(());
            }
            store.drop_table()?;
            audit(store.conn(), "drop", "codigos", "Dropped codes table")?;
            println!("{}✔ Codes table dropped.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
