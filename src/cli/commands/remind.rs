use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reminder::{self, AddTimeOutcome, MAX_REMINDER_TIMES};
use crate::errors::{AppError, AppResult};
use crate::models::settings::ReminderSettings;
use crate::store::kv::LocalStore;
use crate::store::{settings, subscription};
use crate::ui::messages::{info, locked, success, warning};
use crate::utils::time::{format_minutes_until, resolve_now};
use chrono::{DateTime, Local};
use std::sync::atomic::AtomicBool;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Remind {
        add,
        remove,
        interval,
        post_meal,
        post_nap,
        watch,
    } = &cli.command
    {
        let store = LocalStore::open(&cfg.store)?;
        let sub = subscription::load(&store)?;

        // the whole reminders panel is a Pro feature
        if !sub.is_active() {
            locked(
                "Custom Reminders",
                "Personalized reminder schedules and special triggers for optimal training results.",
            );
            return Ok(());
        }

        let mut cfg_settings = settings::load(&store)?;
        let now = resolve_now(cli.now.as_ref())?;

        if let Some(t) = add {
            match reminder::add_time(&mut cfg_settings, t) {
                AddTimeOutcome::Added => {
                    settings::save(&store, &cfg_settings)?;
                    success(format!("Added reminder time {}", t));
                }
                AddTimeOutcome::Duplicate => warning(format!("{} is already configured", t)),
                AddTimeOutcome::ListFull => warning(format!(
                    "At most {} reminder times are supported",
                    MAX_REMINDER_TIMES
                )),
                AddTimeOutcome::Invalid => return Err(AppError::InvalidTime(t.clone())),
            }
        }

        if let Some(t) = remove {
            if reminder::remove_time(&mut cfg_settings, t) {
                settings::save(&store, &cfg_settings)?;
                success(format!("Removed reminder time {}", t));
            } else {
                warning(format!("No reminder configured at {}", t));
            }
        }

        if let Some(minutes) = interval {
            if *minutes == 0 {
                warning("The reminder interval must be positive.");
            } else {
                cfg_settings.regular_interval = *minutes;
                settings::save(&store, &cfg_settings)?;
                success(format!("Regular interval set to {} minutes", minutes));
            }
        }

        if let Some(v) = post_meal {
            cfg_settings.post_meal_reminder = parse_toggle(v)?;
            settings::save(&store, &cfg_settings)?;
            success(format!(
                "After-meal reminder {}",
                if cfg_settings.post_meal_reminder { "on" } else { "off" }
            ));
        }

        if let Some(v) = post_nap {
            cfg_settings.post_nap_reminder = parse_toggle(v)?;
            settings::save(&store, &cfg_settings)?;
            success(format!(
                "After-nap reminder {}",
                if cfg_settings.post_nap_reminder { "on" } else { "off" }
            ));
        }

        print_settings(&cfg_settings, now);

        if *watch {
            info("Watching reminders, re-checking once per minute. Ctrl+C to stop.");
            let cancel = AtomicBool::new(false);
            reminder::watch(&cfg_settings.reminder_times, &cancel, None, |tick_now, next| {
                print_next(next, tick_now);
            });
        }
    }
    Ok(())
}

fn parse_toggle(v: &str) -> AppResult<bool> {
    match v.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(AppError::Other(format!(
            "Invalid toggle '{}': use on or off",
            other
        ))),
    }
}

fn print_settings(settings: &ReminderSettings, now: DateTime<Local>) {
    println!("\n🔔 Reminders");
    print_next(
        reminder::next_reminder(&settings.reminder_times, now),
        now,
    );
    println!(
        "• Regular interval: every {}h {}m",
        settings.regular_interval / 60,
        settings.regular_interval % 60
    );
    println!(
        "• After meals: {}   After naps: {}",
        if settings.post_meal_reminder { "on" } else { "off" },
        if settings.post_nap_reminder { "on" } else { "off" }
    );

    if settings.reminder_times.is_empty() {
        println!("• No scheduled reminders");
    } else {
        println!(
            "• Scheduled times ({}/{}): {}",
            settings.reminder_times.len(),
            MAX_REMINDER_TIMES,
            settings.reminder_times.join(", ")
        );
    }
    println!();
}

fn print_next(next: Option<DateTime<Local>>, now: DateTime<Local>) {
    match next {
        Some(at) => {
            let mins = (at - now).num_minutes();
            println!(
                "• Next reminder: {} (in {})",
                at.format("%H:%M"),
                format_minutes_until(mins)
            );
        }
        None => println!("• Next reminder: none scheduled"),
    }
}
