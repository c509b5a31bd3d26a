use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::PottyEvent;
use crate::models::event_type::EventType;
use crate::store::events::EventStore;
use crate::store::kv::LocalStore;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET, colorize_outcome};
use crate::utils::date;
use crate::utils::time::resolve_now;
use chrono::NaiveDate;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        kind,
        accidents,
    } = &cli.command
    {
        let range = match period {
            Some(p) => Some(date::parse_period(p).map_err(AppError::InvalidPeriod)?),
            None => None,
        };

        let kind_filter = match kind {
            Some(k) => Some(EventType::from_code(k).ok_or_else(|| {
                AppError::InvalidKind(format!("'{}'. Use 'pee' or 'poop'.", k))
            })?),
            None => None,
        };

        let now = resolve_now(cli.now.as_ref())?;
        let today = now.date_naive();

        let store = LocalStore::open(&cfg.store)?;
        let event_store = EventStore::open(&store)?;

        let mut events: Vec<&PottyEvent> = event_store
            .events()
            .iter()
            .filter(|e| {
                range.is_none_or(|(start, end)| {
                    let d = e.day();
                    d >= start && d <= end
                })
            })
            .filter(|e| kind_filter.is_none_or(|k| e.kind == k))
            .filter(|e| !*accidents || e.is_accident)
            .collect();

        if events.is_empty() {
            info("No potty events logged yet. Use the 'add' command to get started!");
            return Ok(());
        }

        // newest first, grouped by day
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut current_day: Option<NaiveDate> = None;
        for ev in events {
            let day = ev.day();
            if current_day != Some(day) {
                println!("\n📅 {}", date::day_label(day, today));
                current_day = Some(day);
            }
            print_event(ev);
        }
        println!();
    }
    Ok(())
}

fn print_event(ev: &PottyEvent) {
    let notes = if ev.notes.is_empty() {
        String::new()
    } else {
        format!("  {GREY}{}{RESET}", ev.notes)
    };

    println!(
        "  #{:<4} {}  {:<4} {}  {}{}",
        ev.id,
        ev.time_str(),
        ev.kind.as_str(),
        colorize_outcome(ev.is_accident),
        ev.location,
        notes
    );
}
