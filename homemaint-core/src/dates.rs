//! Date math for service records: `YYYY/MM/DD` parsing and calendar-month
//! due-date offsets.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

const SERVICE_DATE_FMT: &str = "%Y/%m/%d";

/// Parse a service date like "2024/05/01". Anything else (wrong
/// separators, letters, impossible days) is an error.
pub fn parse_service_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, SERVICE_DATE_FMT)
        .map_err(|e| anyhow::anyhow!("invalid service date '{text}': {e}"))
}

pub fn format_service_date(date: NaiveDate) -> String {
    date.format(SERVICE_DATE_FMT).to_string()
}

/// Add `months` calendar months to `done`, keeping the day-of-month.
/// Standard month arithmetic: zero-based month index plus the interval,
/// mod 12, quotient carried into the year. When the target month is too
/// short for the source day (Jan 31 + 1 month), the day clamps to the last
/// day of the target month.
pub fn due_after_months(done: NaiveDate, months: u32) -> NaiveDate {
    let index = done.month0() + months;
    let year = done.year() + (index / 12) as i32;
    let month = index % 12 + 1;

    let mut day = done.day();
    loop {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(due) => return due,
            // day > 28 and the month is short; every month has a 28th.
            None => day -= 1,
        }
    }
}
