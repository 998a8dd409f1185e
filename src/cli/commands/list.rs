use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::models::scanned_code::ScannedCode;
use crate::utils::colors::colorize_payload;
use crate::utils::table::{Table, truncate};

const PAYLOAD_MAX: usize = 60;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = CodeStore::open(&cfg.database)?;
        let codes = store.query_all()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&codes)?);
            return Ok(());
        }

        if codes.is_empty() {
            println!("No scanned codes.");
            return Ok(());
        }

        print!("{}", render(&codes));
        println!("\n{} codes", codes.len());
    }
    Ok(())
}

fn render(codes: &[ScannedCode]) -> String {
    let mut table = Table::new(["SCANNED AT", "TYPE", "DATA", "ID"]);
    for c in codes {
        table.add_row(vec![
            c.scanned_at_str(),
            c.kind.clone(),
            colorize_payload(&truncate(&c.data, PAYLOAD_MAX)),
            c.id.clone(),
        ]);
    }
    table.render()
}
