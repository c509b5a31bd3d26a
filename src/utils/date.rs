use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression to an inclusive date range.
///
/// Accepted forms:
/// - `YYYY-MM-DD` → that single day
/// - `YYYY-MM`    → the whole month
/// - `YYYY`       → the whole year
/// - `start:end`  → range between two period expressions
pub fn parse_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if p.contains(':') {
        let parts: Vec<&str> = p.split(':').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid period: {}", p));
        }
        let (start, _) = parse_simple_period(parts[0])?;
        let (_, end) = parse_simple_period(parts[1])?;
        if end < start {
            return Err(format!("Invalid period: {} ends before it starts", p));
        }
        return Ok((start, end));
    }

    parse_simple_period(p)
}

fn parse_simple_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| invalid(p))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| invalid(p))?;
        return Ok((first, last));
    }

    Err(invalid(p))
}

fn invalid(p: &str) -> String {
    format!("Invalid period: {}", p)
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // month boundaries are always representable
    first_of_next
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Human day header for event listings: Today, Yesterday, or "Sep 15".
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today".to_string()
    } else if Some(day) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        day.format("%b %-d").to_string()
    }
}
