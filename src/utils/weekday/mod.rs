// Weekday normalization
// Maps free-form day descriptors onto a canonical Sunday-based 0-6 index.
// This index space is distinct from the Monday-based numbering the grid
// builder uses for week layout; the two are never mixed.

use crate::error::EngineError;

/// Full English weekday names, Sunday first to match the canonical index.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Strictly parse a weekday descriptor: a case-insensitive prefix of one of
/// the seven full English names (first match wins, Sunday first), or an
/// integer 0-6. Returns `None` for anything else.
pub fn parse_day(day: &str) -> Option<u32> {
    let trimmed = day.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    for (index, name) in DAY_NAMES.iter().enumerate() {
        if name.to_lowercase().starts_with(&lowered) {
            return Some(index as u32);
        }
    }

    match trimmed.parse::<u32>() {
        Ok(index) if index <= 6 => Some(index),
        _ => None,
    }
}

/// Normalize a day descriptor to a Sunday-based index in 0-6.
///
/// Unrecognized input falls back to Sunday (0). That default is documented
/// product behavior, not an error; record validation uses the strict
/// [`parse_day`] so malformed descriptors are still caught at creation time.
pub fn day_name_to_index(day: &str) -> u32 {
    match parse_day(day) {
        Some(index) => index,
        None => {
            log::warn!("Unrecognized day descriptor {:?}, defaulting to Sunday", day);
            0
        }
    }
}

/// Full English name for a Sunday-based weekday index.
pub fn index_to_day_name(index: u32) -> Result<&'static str, EngineError> {
    DAY_NAMES
        .get(index as usize)
        .copied()
        .ok_or(EngineError::InvalidWeekday(index as i64))
}
