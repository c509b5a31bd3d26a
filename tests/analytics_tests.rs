//! Analytics-engine properties against a fixed "now".

use chrono::{DateTime, Days, Duration, Local};
use pawlogger::core::analytics::build_report;
use pawlogger::models::event::PottyEvent;
use pawlogger::models::event_type::EventType;

fn event(id: i64, timestamp: DateTime<Local>, accident: bool) -> PottyEvent {
    PottyEvent {
        id,
        kind: EventType::Pee,
        timestamp,
        location: "Outside".to_string(),
        is_accident: accident,
        notes: String::new(),
    }
}

fn event_at(id: i64, timestamp: DateTime<Local>, location: &str, accident: bool) -> PottyEvent {
    PottyEvent {
        location: location.to_string(),
        ..event(id, timestamp, accident)
    }
}

fn days_ago(now: DateTime<Local>, n: u64) -> DateTime<Local> {
    now.checked_sub_days(Days::new(n)).expect("valid date")
}

#[test]
fn test_streak_counts_clean_days_until_accident() {
    let now = Local::now();

    // day 0 clean, day 1 clean, day 2 has an accident
    let events = vec![
        event(1, now, false),
        event(2, days_ago(now, 1), false),
        event(3, days_ago(now, 2), true),
    ];

    let report = build_report(&events, now);
    assert_eq!(report.current_streak, 2);
}

#[test]
fn test_streak_zero_when_today_has_accident() {
    let now = Local::now();

    let events = vec![
        event(1, now, true),
        event(2, days_ago(now, 1), false),
    ];

    let report = build_report(&events, now);
    assert_eq!(report.current_streak, 0);
}

#[test]
fn test_streak_skips_empty_days() {
    let now = Local::now();

    // a gap on day 1 neither breaks nor increments
    let events = vec![
        event(1, now, false),
        event(2, days_ago(now, 2), false),
        event(3, days_ago(now, 3), false),
    ];

    let report = build_report(&events, now);
    assert_eq!(report.current_streak, 3);
}

#[test]
fn test_streak_lookback_is_capped_at_30_days() {
    let now = Local::now();

    // one clean event per day for 40 days: only 30 can count
    let events: Vec<PottyEvent> = (0..40)
        .map(|i| event(i as i64 + 1, days_ago(now, i), false))
        .collect();

    let report = build_report(&events, now);
    assert_eq!(report.current_streak, 30);
}

#[test]
fn test_daily_rate_rounds_to_integer_percent() {
    let now = Local::now();

    // 3 successes + 1 accident today → 75%
    let events = vec![
        event(1, now, false),
        event(2, now, false),
        event(3, now, false),
        event(4, now, true),
    ];

    let report = build_report(&events, now);
    let today = report.daily.last().expect("7 daily entries");
    assert_eq!(today.success_rate, 75);
    assert_eq!(today.successes, 3);
    assert_eq!(today.accidents, 1);
    assert_eq!(today.total, 4);
}

#[test]
fn test_daily_window_has_seven_days_and_empty_days_report_zero() {
    let now = Local::now();
    let events = vec![event(1, now, false)];

    let report = build_report(&events, now);
    assert_eq!(report.daily.len(), 7);

    // oldest first, today last
    assert_eq!(report.daily.last().map(|d| d.date), Some(now.date_naive()));
    for day in &report.daily[..6] {
        assert_eq!(day.total, 0);
        assert_eq!(day.success_rate, 0);
    }
}

#[test]
fn test_overall_rate_zero_on_empty_history() {
    let now = Local::now();
    let report = build_report(&[], now);

    assert_eq!(report.overall_success_rate, 0);
    assert_eq!(report.total_events, 0);
    assert_eq!(report.current_streak, 0);
    assert_eq!(report.trend, 0);
}

#[test]
fn test_trend_compares_elapsed_time_buckets() {
    let now = Local::now();

    // recent bucket (age < 3 days): 2/2 successes → 100%
    // previous bucket (3 ≤ age < 6): 1/2 → 50%
    let events = vec![
        event(1, now - Duration::hours(2), false),
        event(2, now - Duration::hours(30), false),
        event(3, days_ago(now, 4), false),
        event(4, days_ago(now, 4) - Duration::hours(1), true),
    ];

    let report = build_report(&events, now);
    assert_eq!(report.trend, 50);
}

#[test]
fn test_trend_zero_when_a_bucket_is_empty() {
    let now = Local::now();

    // only recent events: previous bucket reports 0%
    let events = vec![
        event(1, now - Duration::hours(1), false),
        event(2, now - Duration::hours(2), false),
    ];

    let report = build_report(&events, now);
    assert_eq!(report.trend, 100);
}

#[test]
fn test_type_breakdown_counts_kinds() {
    let now = Local::now();

    let mut events = vec![
        event(1, now, false),
        event(2, now, false),
    ];
    events.push(PottyEvent {
        kind: EventType::Poop,
        ..event(3, now, false)
    });

    let report = build_report(&events, now);
    assert_eq!(report.breakdown.pee, 2);
    assert_eq!(report.breakdown.poop, 1);
}

#[test]
fn test_location_stats_sorted_by_total_with_blank_as_unknown() {
    let now = Local::now();

    let events = vec![
        event_at(1, now, "Outside", false),
        event_at(2, now, "Outside", false),
        event_at(3, now, "Outside", true),
        event_at(4, now, "Kitchen", true),
        event_at(5, now, "", false),
    ];

    let report = build_report(&events, now);
    assert_eq!(report.locations.len(), 3);

    assert_eq!(report.locations[0].location, "Outside");
    assert_eq!(report.locations[0].total, 3);
    assert_eq!(report.locations[0].success_rate, 67); // 2/3 rounded

    // tie between Kitchen and Unknown keeps encounter order
    assert_eq!(report.locations[1].location, "Kitchen");
    assert_eq!(report.locations[1].success_rate, 0);
    assert_eq!(report.locations[2].location, "Unknown");
    assert_eq!(report.locations[2].success_rate, 100);
}
