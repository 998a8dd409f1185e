//! scanqr library root.
//! Exposes the CLI parser, the high-level run() function, and the scan
//! gate / code store modules used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli, cfg),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Scan { .. } => c::scan::handle(&cli.command, cfg),
        Commands::Add { .. } => c::add::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Exists { .. } => c::exists::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::Clear { .. } => c::clear::handle(&cli.command, cfg),
        Commands::Stats { .. } => c::stats::handle(&cli.command, cfg),
        Commands::Sync { .. } => c::sync::handle(&cli.command, cfg),
        Commands::Remote { .. } => c::remote::handle(&cli.command, cfg),
        Commands::Notify { .. } => c::notify::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; --db overrides the configured database.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
