// Date grid construction for day/week/month/year views
// Month grids are a fixed 6x7, Monday-first, padded with trailing days of
// the previous month and leading days of the next.
//
// Week layout here is Monday-based (chrono's num_days_from_monday); the
// Sunday-based index in utils::weekday is a separate convention and the two
// must never be unified.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Cell count of a month grid: always 6 rows of 7 columns.
pub const MONTH_GRID_CELLS: usize = 42;

/// One date slot in a rendered calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the currently displayed month.
    pub in_current_month: bool,
}

/// The Monday on or before `date`.
///
/// A Sunday rolls back six days; every other day rolls back to the Monday
/// of its own week.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Build the 42-cell month grid containing `anchor`'s month.
///
/// Cells are strictly ascending consecutive dates starting at the Monday on
/// or before the first of the month. `in_current_month` is true only for
/// dates inside the anchor's month, so the true cells form one contiguous
/// run whose length is the month's day count.
pub fn build_month_grid(anchor: NaiveDate) -> Vec<DateCell> {
    let first_of_month = anchor.with_day(1).expect("day 1 exists in every month");
    let grid_start = week_start(first_of_month);
    let year = anchor.year();
    let month = anchor.month();

    (0..MONTH_GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            DateCell {
                date,
                in_current_month: date.year() == year && date.month() == month,
            }
        })
        .collect()
}

/// Seven consecutive dates starting at the Monday of the anchor's week.
pub fn build_week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let monday = week_start(anchor);
    (0..7).map(|offset| monday + Duration::days(offset)).collect()
}

/// Twelve month grids for the anchor's year, January through December.
pub fn build_year_months(anchor: NaiveDate) -> Vec<Vec<DateCell>> {
    (1..=12)
        .map(|month| {
            let first = NaiveDate::from_ymd_opt(anchor.year(), month, 1)
                .expect("first of month is always valid");
            build_month_grid(first)
        })
        .collect()
}
