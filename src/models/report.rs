use chrono::NaiveDate;

/// One day of the trailing 7-day window.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRate {
    pub date: NaiveDate,
    pub success_rate: i32, // integer percent; 0 for empty days
    pub successes: usize,
    pub accidents: usize,
    pub total: usize,
}

/// Per-location grouping, sorted descending by total event count.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStat {
    pub location: String,
    pub success_rate: i32,
    pub total: usize,
    pub accidents: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TypeBreakdown {
    pub pee: usize,
    pub poop: usize,
}

/// Full analytics output for one event snapshot at one instant.
#[derive(Debug, Clone)]
pub struct ProgressReport {
    pub daily: Vec<DailyRate>, // 7 entries, oldest first, today last
    pub overall_success_rate: i32,
    pub total_events: usize,
    pub successes: usize,
    pub accidents: usize,
    pub breakdown: TypeBreakdown,
    pub locations: Vec<LocationStat>,
    pub current_streak: u32,
    pub trend: i32, // recent 3-day rate minus previous 3-day rate
}
