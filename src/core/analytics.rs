//! Progress analytics: pure functions over one event snapshot and an
//! injected "now". Recomputed on demand on every call, no caching.
//!
//! Day handling is intentionally mixed: the streak walks calendar days
//! while the trend buckets by elapsed time. That is the observed behavior
//! of the tracker this engine reproduces.

use crate::models::event::PottyEvent;
use crate::models::report::{DailyRate, LocationStat, ProgressReport, TypeBreakdown};
use chrono::{DateTime, Days, Local, NaiveDate};

const DAILY_WINDOW: u64 = 7;
const STREAK_LOOKBACK: u64 = 30;

pub fn build_report(events: &[PottyEvent], now: DateTime<Local>) -> ProgressReport {
    let today = now.date_naive();

    let successes = events.iter().filter(|e| !e.is_accident).count();
    let accidents = events.len() - successes;

    ProgressReport {
        daily: daily_rates(events, today),
        overall_success_rate: percent(successes, events.len()),
        total_events: events.len(),
        successes,
        accidents,
        breakdown: type_breakdown(events),
        locations: location_stats(events),
        current_streak: current_streak(events, today),
        trend: trend(events, now),
    }
}

/// Integer percent by round-half-up of the true ratio; 0 for an empty total.
fn percent(successes: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    ((successes as f64 / total as f64) * 100.0).round() as i32
}

/// Success rate for each of the trailing 7 calendar days, oldest first,
/// today last. Days with zero events report 0%, not "undefined".
fn daily_rates(events: &[PottyEvent], today: NaiveDate) -> Vec<DailyRate> {
    (0..DAILY_WINDOW)
        .rev()
        .filter_map(|i| today.checked_sub_days(Days::new(i)))
        .map(|date| {
            let day_events: Vec<&PottyEvent> =
                events.iter().filter(|e| e.day() == date).collect();
            let total = day_events.len();
            let accidents = day_events.iter().filter(|e| e.is_accident).count();
            let successes = total - accidents;
            DailyRate {
                date,
                success_rate: percent(successes, total),
                successes,
                accidents,
                total,
            }
        })
        .collect()
}

fn type_breakdown(events: &[PottyEvent]) -> TypeBreakdown {
    let pee = events.iter().filter(|e| e.kind.is_pee()).count();
    TypeBreakdown {
        pee,
        poop: events.len() - pee,
    }
}

/// Group by location label (blank → "Unknown"), sorted descending by total
/// event count; ties keep first-encounter order.
fn location_stats(events: &[PottyEvent]) -> Vec<LocationStat> {
    let mut stats: Vec<(String, usize, usize)> = Vec::new();

    for event in events {
        let label = event.location_label();
        match stats.iter_mut().find(|(l, _, _)| l.as_str() == label) {
            Some((_, total, accidents)) => {
                *total += 1;
                if event.is_accident {
                    *accidents += 1;
                }
            }
            None => stats.push((
                label.to_string(),
                1,
                if event.is_accident { 1 } else { 0 },
            )),
        }
    }

    // stable sort keeps encounter order between equal totals
    stats.sort_by(|a, b| b.1.cmp(&a.1));

    stats
        .into_iter()
        .map(|(location, total, accidents)| LocationStat {
            location,
            success_rate: percent(total - accidents, total),
            total,
            accidents,
        })
        .collect()
}

/// Consecutive accident-free calendar days, walking back from today over a
/// 30-day lookback. A day with an accident stops the walk; a day with only
/// successes counts; an empty day is skipped.
fn current_streak(events: &[PottyEvent], today: NaiveDate) -> u32 {
    let mut streak = 0;

    for i in 0..STREAK_LOOKBACK {
        let Some(date) = today.checked_sub_days(Days::new(i)) else {
            break;
        };

        let mut seen_any = false;
        let mut has_accident = false;
        for event in events.iter().filter(|e| e.day() == date) {
            seen_any = true;
            if event.is_accident {
                has_accident = true;
                break;
            }
        }

        if has_accident {
            break;
        } else if seen_any {
            streak += 1;
        }
    }

    streak
}

/// Recent 3-day success rate minus the previous 3-day rate, each rounded
/// independently; an empty bucket counts as 0%. Ages are elapsed-time
/// buckets (floor of elapsed seconds / 86400), not calendar days.
fn trend(events: &[PottyEvent], now: DateTime<Local>) -> i32 {
    let recent = bucket_rate(events, now, 0, 3);
    let previous = bucket_rate(events, now, 3, 6);
    recent - previous
}

fn bucket_rate(events: &[PottyEvent], now: DateTime<Local>, from: i64, to: i64) -> i32 {
    let in_bucket: Vec<&PottyEvent> = events
        .iter()
        .filter(|e| {
            let age_days = (now - e.timestamp).num_seconds().div_euclid(86_400);
            age_days >= from && age_days < to
        })
        .collect();

    let successes = in_bucket.iter().filter(|e| !e.is_accident).count();
    percent(successes, in_bucket.len())
}
