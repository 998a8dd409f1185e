use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut cfg = cfg.clone();
    let db_path = cfg.init_all(cli.db.as_deref(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing scanqr…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_str);

    let store = CodeStore::open(&db_str)?;

    println!("✅ Database initialized at {}", &db_str);

    if let Err(e) = log::audit(
        store.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_str),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 scanqr initialization completed!");
    Ok(())
}
