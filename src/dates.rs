// Day ranges for the weekly search.
//
// Dates are rendered without zero padding (`2024-3-9`), which is the form
// the search query has always been sent with. Changing to padded dates is a
// compatibility risk with the upstream query parser, so keep it as is.

use chrono::{Days, NaiveDate};

/// Number of days searched per run, ending at the reference date.
pub const DAYS_PER_RUN: u64 = 7;

/// Half-open range `[day, next)` selecting posts created on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub day: NaiveDate,
    pub next: NaiveDate,
}

impl DayRange {
    /// Range covering `day`. `None` only at the upper end of chrono's calendar.
    pub fn starting(day: NaiveDate) -> Option<Self> {
        day.succ_opt().map(|next| DayRange { day, next })
    }

    pub fn day_str(&self) -> String {
        format_day(self.day)
    }

    pub fn next_day_str(&self) -> String {
        format_day(self.next)
    }
}

/// `YYYY-M-D` with un-padded month and day.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%-m-%-d").to_string()
}

/// The `DAYS_PER_RUN` consecutive days ending at `reference`, ascending.
///
/// Uses the calendar date as given; callers decide which timezone "today"
/// belongs to (the binary uses the host's local date).
pub fn week_ending(reference: NaiveDate) -> Vec<DayRange> {
    (0..DAYS_PER_RUN)
        .rev()
        .filter_map(|back| reference.checked_sub_days(Days::new(back)))
        .filter_map(DayRange::starting)
        .collect()
}

/// Parse a `YYYY-MM-DD` reference date from the command line.
pub fn parse_reference_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}
