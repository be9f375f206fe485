// View state model
// The (mode, anchor date) pair a calendar view is centered on

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar view granularities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Day,
    Week,
    Month,
    Year,
}

/// Explicit view state, passed into and returned from navigation.
///
/// There is no hidden module-level singleton; multiple independent calendar
/// instances each carry their own `ViewState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
}

impl ViewState {
    pub fn new(mode: ViewMode, anchor: NaiveDate) -> Self {
        Self { mode, anchor }
    }
}
