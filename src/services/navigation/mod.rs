// View navigation
// Steps the (mode, anchor) pair through previous/next/today/view-switch
// actions. View switches snap the anchor to the canonical start of the new
// granularity relative to today.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::view_state::{ViewMode, ViewState};
use crate::services::grid::week_start;

/// Direction of a previous/next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl ViewState {
    /// Move the anchor one unit of the current granularity.
    ///
    /// Day steps one day, week seven days, month one calendar month with the
    /// day-of-month clamped to the 1st (avoiding month-length overflow),
    /// year one year (Feb 29 clamps to Feb 28).
    pub fn step(&mut self, direction: Direction) {
        let sign: i64 = match direction {
            Direction::Previous => -1,
            Direction::Next => 1,
        };

        self.anchor = match self.mode {
            ViewMode::Day => self.anchor + Duration::days(sign),
            ViewMode::Week => self.anchor + Duration::days(7 * sign),
            ViewMode::Month => shift_month_to_first(self.anchor, sign as i32),
            ViewMode::Year => shift_year_clamping_day(self.anchor, sign as i32),
        };

        log::debug!("Stepped {:?} to anchor {}", self.mode, self.anchor);
    }

    /// Set the anchor to the current date; mode unchanged.
    pub fn go_to_today(&mut self) {
        self.go_to_today_on(Local::now().date_naive());
    }

    /// Pure core of [`go_to_today`](Self::go_to_today).
    pub fn go_to_today_on(&mut self, today: NaiveDate) {
        self.anchor = today;
    }

    /// Switch mode and snap the anchor to the canonical start of the new
    /// granularity relative to the current date.
    pub fn switch_view(&mut self, mode: ViewMode) {
        self.switch_view_on(mode, Local::now().date_naive());
    }

    /// Pure core of [`switch_view`](Self::switch_view).
    pub fn switch_view_on(&mut self, mode: ViewMode, today: NaiveDate) {
        self.mode = mode;
        self.anchor = snap_anchor(mode, today);
    }
}

/// Canonical anchor for a granularity: the date itself for day view, the
/// Monday of its week, the first of its month, or January 1 of its year.
pub fn snap_anchor(mode: ViewMode, today: NaiveDate) -> NaiveDate {
    match mode {
        ViewMode::Day => today,
        ViewMode::Week => week_start(today),
        ViewMode::Month => today.with_day(1).expect("day 1 exists in every month"),
        ViewMode::Year => {
            NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("January 1 exists in every year")
        }
    }
}

fn shift_month_to_first(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let year = total_months.div_euclid(12);
    let month = (total_months.rem_euclid(12) + 1) as u32;
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

fn shift_year_clamping_day(current: NaiveDate, delta_years: i32) -> NaiveDate {
    let year = current.year() + delta_years;
    let day = current.day().min(last_day_of_month(year, current.month()));
    NaiveDate::from_ymd_opt(year, current.month(), day).expect("valid calendar date")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}
