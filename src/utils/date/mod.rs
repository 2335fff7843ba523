// Date utility functions

use chrono::{DateTime, Local, Timelike};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Local hour component of a timestamp, truncated (10:45 -> 10).
pub fn hour_of(date: DateTime<Local>) -> u32 {
    date.hour()
}

/// Local time of day expressed as fractional hours (10:45 -> 10.75).
pub fn fractional_hour(date: DateTime<Local>) -> f32 {
    date.hour() as f32 + date.minute() as f32 / 60.0 + date.second() as f32 / 3600.0
}

/// Elapsed time between two instants in fractional hours. Negative when `to`
/// precedes `from`.
pub fn hours_between(from: DateTime<Local>, to: DateTime<Local>) -> f32 {
    (to - from).num_seconds() as f32 / 3600.0
}
