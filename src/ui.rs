// UI layer: walks the seven days in order and prints one table per day.
// Everything is sequential; a day's table is written before the next
// request goes out.

use crate::api::QiitaClient;
use crate::dates::{week_ending, DayRange};
use crate::format::format_rows;
use crate::table::Table;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;

pub const HEADER: [&str; 3] = ["LIKES", "TITLE", "URL"];

/// Print the week ending at `reference`: a `YYYY-M-D` line and a table for
/// each day, oldest first.
///
/// A transport failure stops the run; whatever was already written stays.
pub fn run_week<W: Write>(client: &QiitaClient, reference: NaiveDate, out: &mut W) -> Result<()> {
    for range in week_ending(reference) {
        run_day(client, &range, out)?;
    }
    Ok(())
}

/// Fetch, format and render a single day.
pub fn run_day<W: Write>(client: &QiitaClient, range: &DayRange, out: &mut W) -> Result<()> {
    let day = range.day_str();
    writeln!(out, "{}", day)?;
    out.flush()?;

    // stderr spinner; indicatif hides it when stderr is not a terminal
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Searching {}...", day));
    let fetched = client.fetch_records(range);
    spinner.finish_and_clear();

    let records = fetched.with_context(|| format!("Fetching articles for {} failed", day))?;

    let mut table = Table::new(HEADER).auto_merge(true).row_lines(true);
    table.extend_rows(format_rows(&records).into_iter().map(|row| row.into_cells()));
    table.render(out)?;
    out.flush()?;
    Ok(())
}
