// Weekly recurrence matching
// A schedule applies to a concrete date iff their Sunday-based weekday
// indices agree. No other field participates: there is no term range and
// the `week` label is ignored.

use chrono::{Datelike, NaiveDate};

use crate::models::schedule::ScheduleRecord;
use crate::utils::weekday::day_name_to_index;

/// A schedule placed on the concrete date it matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occurrence<'a> {
    pub date: NaiveDate,
    pub schedule: &'a ScheduleRecord,
}

/// Whether `schedule` occurs on `date`.
pub fn matches(schedule: &ScheduleRecord, date: NaiveDate) -> bool {
    day_name_to_index(&schedule.day) == date.weekday().num_days_from_sunday()
}

/// All schedules occurring on `date`, input order preserved.
pub fn schedules_for_date<'a>(
    schedules: &'a [ScheduleRecord],
    date: NaiveDate,
) -> Vec<&'a ScheduleRecord> {
    schedules.iter().filter(|s| matches(s, date)).collect()
}

/// Set form of range matching: every schedule occurring on at least one of
/// `dates`, one entry per schedule, input order preserved. Month and year
/// views use this for counting.
pub fn schedules_in_range<'a>(
    schedules: &'a [ScheduleRecord],
    dates: &[NaiveDate],
) -> Vec<&'a ScheduleRecord> {
    schedules
        .iter()
        .filter(|s| dates.iter().any(|date| matches(s, *date)))
        .collect()
}

/// Placement form of range matching: one `Occurrence` per (schedule,
/// matching date) pair, ordered by date first and input order second. Day
/// and week views use this to place blocks.
pub fn occurrences_in_range<'a>(
    schedules: &'a [ScheduleRecord],
    dates: &[NaiveDate],
) -> Vec<Occurrence<'a>> {
    dates
        .iter()
        .flat_map(|&date| {
            schedules
                .iter()
                .filter(move |s| matches(s, date))
                .map(move |schedule| Occurrence { date, schedule })
        })
        .collect()
}
