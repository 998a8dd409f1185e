use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notifier;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify { message, title } = cmd {
        let presenter = notifier::select(cfg.notifier);
        presenter.notify(title, message)?;
    }

    Ok(())
}
