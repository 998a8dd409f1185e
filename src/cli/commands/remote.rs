use crate::cli::parser::{Commands, RemoteAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::remote::RemoteClient;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;
use crate::utils::time::format_millis;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remote { action } = cmd {
        let client = RemoteClient::new(&cfg.api_base_url, cfg.request_timeout_secs)?;

        match action {
            RemoteAction::List => {
                let codes = client.list()?;
                if codes.is_empty() {
                    println!("No codes on {}.", client.base_url());
                    return Ok(());
                }

                let mut table = Table::new(["ID", "TYPE", "DATA", "TIMESTAMP"]);
                for c in &codes {
                    table.add_row(vec![
                        c.id.clone().unwrap_or_else(|| "--".into()),
                        c.kind.clone(),
                        c.data.clone(),
                        c.timestamp.map(format_millis).unwrap_or_else(|| "--".into()),
                    ]);
                }
                print!("{}", table.render());
            }
            RemoteAction::Get { id } => match client.get(id)? {
                Some(code) => println!("{}", serde_json::to_string_pretty(&code)?),
                None => info(format!("No remote code with id {}.", id)),
            },
            RemoteAction::Delete { id } => {
                if client.delete(id)? {
                    success(format!("Remote code {} deleted.", id));
                } else {
                    info(format!("No remote code with id {}.", id));
                }
            }
        }
    }

    Ok(())
}
