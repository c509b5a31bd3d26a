/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Success-rate color:
/// ≥80% → green, ≥60% → yellow, below → red.
pub fn color_for_rate(rate: i32) -> &'static str {
    if rate >= 80 {
        GREEN
    } else if rate >= 60 {
        YELLOW
    } else {
        RED
    }
}

/// Trend color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_trend(value: i32) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Colored rendering of an accident flag for event listings.
pub fn colorize_outcome(is_accident: bool) -> String {
    if is_accident {
        format!("{RED}accident{RESET}")
    } else {
        format!("{GREEN}success{RESET}")
    }
}
