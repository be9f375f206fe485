// Vertical block layout for day and week columns
// Converts wall-clock times into offsets in an hour-scaled column.
// Overlap between simultaneous schedules is not resolved here; the engine
// hands the renderer every match for a date and column assignment stays a
// renderer concern.

use chrono::{Local, NaiveTime, Timelike};

use crate::error::EngineError;
use crate::utils::time::time_to_minutes;

/// Vertical placement of one schedule block, in the same unit as the
/// hour height (pixels, points, whatever the renderer uses).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPosition {
    pub top: f32,
    pub height: f32,
}

/// Placement for a block spanning `start_time`..`end_time` in a column where
/// one hour is `hour_height` units tall.
///
/// # Examples
/// ```
/// use timetable_engine::services::layout::block_position;
///
/// let block = block_position("08:00", "09:30", 60.0).unwrap();
/// assert_eq!(block.top, 480.0);
/// assert_eq!(block.height, 90.0);
/// ```
pub fn block_position(
    start_time: &str,
    end_time: &str,
    hour_height: f32,
) -> Result<BlockPosition, EngineError> {
    let start = time_to_minutes(start_time)? as i64;
    let end = time_to_minutes(end_time)? as i64;

    if end <= start {
        return Err(EngineError::InvalidDuration(end - start));
    }

    Ok(BlockPosition {
        top: start as f32 / 60.0 * hour_height,
        height: (end - start) as f32 / 60.0 * hour_height,
    })
}

/// Vertical offset of a wall-clock time in an hour-scaled column.
pub fn time_offset(time: NaiveTime, hour_height: f32) -> f32 {
    let hours_since_midnight = time.hour() as f32 + time.minute() as f32 / 60.0;
    hours_since_midnight * hour_height
}

/// Offset of the live wall-clock time, for the current-time indicator line.
/// Only meaningful when the displayed date is today.
pub fn current_time_offset(hour_height: f32) -> f32 {
    time_offset(Local::now().time(), hour_height)
}
