use crate::errors::AppResult;
use crate::store::events::EventStore;
use crate::store::kv::LocalStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_store_info(store: &LocalStore, store_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(store_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, store_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL EVENTS
    //
    let events = EventStore::open(store)?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        events.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = events.events().iter().map(|e| e.timestamp).min();
    let last = events.events().iter().map(|e| e.timestamp).max();

    let fmt_first = first
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE EVENTS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l.date_naive() - f.date_naive()).num_days().max(0) + 1;
        let avg = events.len() as f64 / days as f64;
        println!("{}• Average events/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
