use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::analytics;
use crate::errors::AppResult;
use crate::models::report::ProgressReport;
use crate::store::events::EventStore;
use crate::store::kv::LocalStore;
use crate::store::subscription;
use crate::ui::messages::{info, locked};
use crate::utils::colors::{RESET, color_for_rate, color_for_trend};
use crate::utils::table::{Column, Table};
use crate::utils::time::resolve_now;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = LocalStore::open(&cfg.store)?;
    let event_store = EventStore::open(&store)?;
    let sub = subscription::load(&store)?;

    let now = resolve_now(cli.now.as_ref())?;
    let report = analytics::build_report(event_store.events(), now);

    println!("\n🐶 Progress");
    print_key_metrics(&report, sub.is_active());

    if report.total_events == 0 {
        info("No data to analyze yet. Start logging potty events to see progress insights!");
        return Ok(());
    }

    // detail panels are Pro-only; the numbers above stay free
    if !sub.is_active() {
        println!();
        locked(
            "Detailed Analytics",
            "Comprehensive insights with daily rates, trends, and problem area identification.",
        );
        return Ok(());
    }

    print_daily_table(&report);
    print_breakdown(&report);
    print_locations(&report);
    println!();

    Ok(())
}

fn print_key_metrics(report: &ProgressReport, show_trend: bool) {
    let rate_color = color_for_rate(report.overall_success_rate);
    println!(
        "• Success rate: {}{}%{}",
        rate_color, report.overall_success_rate, RESET
    );

    if show_trend && report.trend != 0 {
        let arrow = if report.trend > 0 { "↑" } else { "↓" };
        println!(
            "  {}{} {}%{} vs previous 3 days",
            color_for_trend(report.trend),
            arrow,
            report.trend.abs(),
            RESET
        );
    }

    println!(
        "• Streak: {} accident-free day{}",
        report.current_streak,
        if report.current_streak == 1 { "" } else { "s" }
    );
    println!(
        "• Events: {} total, {} successes, {} accidents",
        report.total_events, report.successes, report.accidents
    );
}

fn print_daily_table(report: &ProgressReport) {
    println!("\n7-day success rate:");

    let mut table = Table::new(vec![
        Column {
            header: "Day".to_string(),
            width: 10,
        },
        Column {
            header: "Rate".to_string(),
            width: 5,
        },
        Column {
            header: "OK".to_string(),
            width: 4,
        },
        Column {
            header: "Accidents".to_string(),
            width: 9,
        },
        Column {
            header: "Total".to_string(),
            width: 5,
        },
    ]);

    for day in &report.daily {
        table.add_row(vec![
            day.date.format("%a %d").to_string(),
            format!("{}%", day.success_rate),
            day.successes.to_string(),
            day.accidents.to_string(),
            day.total.to_string(),
        ]);
    }

    print!("{}", table.render());
}

fn print_breakdown(report: &ProgressReport) {
    println!(
        "\nBreakdown: 💧 pee {} | 💩 poop {}",
        report.breakdown.pee, report.breakdown.poop
    );
}

fn print_locations(report: &ProgressReport) {
    if report.locations.is_empty() {
        return;
    }

    println!("\nLocation success rates:");
    for loc in report.locations.iter().take(5) {
        println!(
            "  {:<16} {:>3} event{}  {}{}%{}",
            loc.location,
            loc.total,
            if loc.total == 1 { " " } else { "s" },
            color_for_rate(loc.success_rate),
            loc.success_rate,
            RESET
        );
    }
}
