//! Reminder scheduling: next-fire computation over the daily time list,
//! plus the list-editing rules (unique entries, ascending order, max 10).

use crate::models::settings::ReminderSettings;
use crate::utils::time::parse_time;
use chrono::{DateTime, Days, Local};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const MAX_REMINDER_TIMES: usize = 10;

/// Once per minute is sufficient; no sub-minute precision is required.
pub const WATCH_POLL: Duration = Duration::from_secs(60);

/// Outcome of a time-list insertion. Rejections are no-op signals, not
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTimeOutcome {
    Added,
    Duplicate,
    ListFull,
    Invalid,
}

pub fn add_time(settings: &mut ReminderSettings, time: &str) -> AddTimeOutcome {
    if parse_time(time).is_none() {
        return AddTimeOutcome::Invalid;
    }
    if settings.reminder_times.iter().any(|t| t == time) {
        return AddTimeOutcome::Duplicate;
    }
    if settings.reminder_times.len() >= MAX_REMINDER_TIMES {
        return AddTimeOutcome::ListFull;
    }

    settings.reminder_times.push(time.to_string());
    settings.reminder_times.sort();
    AddTimeOutcome::Added
}

/// Exact-match removal by value. Returns false when nothing matched.
pub fn remove_time(settings: &mut ReminderSettings, time: &str) -> bool {
    let before = settings.reminder_times.len();
    settings.reminder_times.retain(|t| t != time);
    settings.reminder_times.len() != before
}

/// Next firing instant: the earliest configured time strictly after "now"
/// today, else the earliest configured time tomorrow, else None for an
/// empty list.
pub fn next_reminder(times: &[String], now: DateTime<Local>) -> Option<DateTime<Local>> {
    let today = now.date_naive();

    let mut todays: Vec<DateTime<Local>> = times
        .iter()
        .filter_map(|t| parse_time(t))
        .filter_map(|t| today.and_time(t).and_local_timezone(Local).single())
        .filter(|d| *d > now)
        .collect();
    todays.sort();

    if let Some(first) = todays.first() {
        return Some(*first);
    }

    // the list is kept ascending, so the first entry is tomorrow's earliest
    let first = parse_time(times.first()?)?;
    today
        .checked_add_days(Days::new(1))?
        .and_time(first)
        .and_local_timezone(Local)
        .single()
}

/// Poll loop behind `remind --watch`: re-evaluates once per WATCH_POLL and
/// honors the cancel flag so the owner can tear the timer down without
/// acting on stale state. `max_ticks` bounds the loop for tests.
pub fn watch<F>(times: &[String], cancel: &AtomicBool, max_ticks: Option<u32>, mut on_tick: F)
where
    F: FnMut(DateTime<Local>, Option<DateTime<Local>>),
{
    let mut ticks = 0u32;

    loop {
        if cancel.load(Ordering::Relaxed) {
            return;
        }

        let now = Local::now();
        on_tick(now, next_reminder(times, now));

        ticks += 1;
        if let Some(max) = max_ticks
            && ticks >= max
        {
            return;
        }

        // sleep in short slices so cancellation stays responsive
        let mut slept = Duration::ZERO;
        let slice = Duration::from_millis(250);
        while slept < WATCH_POLL {
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            std::thread::sleep(slice);
            slept += slice;
        }
    }
}
