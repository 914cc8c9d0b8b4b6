use chrono::{Datelike, Days, NaiveDate};

use crate::archive::models::{ArchiveEntry, FilterOption};

pub const DEFAULT_WINDOW_DAYS: u32 = 30;
pub const PLACEHOLDER_PAGE_COUNT: u32 = 8;
pub const YEAR_OPTION_COUNT: u32 = 5;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Builds the archive for the `window_days` days ending at `reference`,
/// most recent first.
pub fn generate(reference: NaiveDate, window_days: u32) -> Vec<ArchiveEntry> {
    generate_with_page_count(reference, window_days, PLACEHOLDER_PAGE_COUNT)
}

pub fn generate_with_page_count(
    reference: NaiveDate,
    window_days: u32,
    page_count: u32,
) -> Vec<ArchiveEntry> {
    (0..window_days)
        .map_while(|offset| reference.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| ArchiveEntry::new(date, page_count))
        .collect()
}

/// Month selector options, `01`/January through `12`/December.
pub fn month_options() -> Vec<FilterOption> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| FilterOption {
            value: format!("{:02}", i + 1),
            label: name.to_string(),
        })
        .collect()
}

/// Year selector options counting back from the reference year.
pub fn year_options(reference: NaiveDate, count: u32) -> Vec<FilterOption> {
    (0..count as i32)
        .map(|back| reference.year() - back)
        .map(|year| FilterOption {
            value: format!("{:02}", year.rem_euclid(100)),
            label: year.to_string(),
        })
        .collect()
}
