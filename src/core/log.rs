use crate::db::log::load_log;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::utils::table::{strip_ansi, truncate};
use ansi_term::Colour;

/// ANSI colour for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "scan" | "add" => Colour::Green,
        "del" | "clear" | "drop" => Colour::Red,
        "sync" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const OP_MAX: usize = 48;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &CodeStore) -> AppResult<()> {
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let target = if e.target.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", e.target)
                };
                (e.id.to_string(), date, e.operation, target, e.message)
            })
            .map(|(id, date, op, target, message)| {
                let colored = format!("{}{}", color_for_operation(&op).paint(op.as_str()), target);
                (id, date, colored, message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| strip_ansi(&r.2).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            let visible = strip_ansi(&op_target);
            let shown = if visible.chars().count() > OP_MAX {
                truncate(&visible, OP_MAX)
            } else {
                op_target.clone()
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                shown,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
