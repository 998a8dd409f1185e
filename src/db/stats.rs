use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::models::stats::CodeStats;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_millis;
use std::fs;

pub fn print_stats(stats: &CodeStats) {
    println!(
        "{}• Total codes:{} {}{}{}",
        CYAN, RESET, GREEN, stats.total, RESET
    );

    let last = stats
        .last_scan_timestamp
        .map(format_millis)
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last scan:{} {}", CYAN, RESET, last);

    if stats.by_type.is_empty() {
        return;
    }

    println!("{}• By type:{}", CYAN, RESET);
    let width = stats.by_type.keys().map(|k| k.len()).max().unwrap_or(0);
    for (kind, count) in &stats.by_type {
        println!("    {:<width$}  {}", kind, count, width = width);
    }
}

pub fn print_db_info(store: &CodeStore, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    print_stats(&store.compute_statistics()?);

    println!();
    Ok(())
}
