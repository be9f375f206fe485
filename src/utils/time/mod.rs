// Time arithmetic utilities
// Conversions between 24-hour "HH:MM" strings and minutes since midnight

use crate::error::EngineError;

/// Minutes in one day; the exclusive upper bound of the valid domain.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a 24-hour `"HH:MM"` string into minutes since midnight.
///
/// # Examples
/// ```
/// use timetable_engine::utils::time::time_to_minutes;
///
/// assert_eq!(time_to_minutes("08:30").unwrap(), 510);
/// assert!(time_to_minutes("24:00").is_err());
/// ```
pub fn time_to_minutes(time: &str) -> Result<u32, EngineError> {
    let malformed = || EngineError::MalformedTime(time.to_string());

    let (hours_part, minutes_part) = time.split_once(':').ok_or_else(malformed)?;
    let hours: u32 = hours_part.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes_part.parse().map_err(|_| malformed())?;

    if hours > 23 || minutes > 59 {
        return Err(malformed());
    }

    Ok(hours * 60 + minutes)
}

/// Render minutes since midnight as a 24-hour `"HH:MM"` string.
///
/// The valid domain is `0..MINUTES_PER_DAY`; anything outside it is an
/// `InvalidDuration` error rather than a clamp.
pub fn minutes_to_time(minutes: i64) -> Result<String, EngineError> {
    if minutes < 0 || minutes >= MINUTES_PER_DAY as i64 {
        return Err(EngineError::InvalidDuration(minutes));
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes_midnight() {
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    }

    #[test]
    fn test_time_to_minutes_end_of_day() {
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_time_to_minutes_morning() {
        assert_eq!(time_to_minutes("08:00").unwrap(), 480);
    }

    #[test]
    fn test_time_to_minutes_rejects_hour_24() {
        assert_eq!(
            time_to_minutes("24:00"),
            Err(EngineError::MalformedTime("24:00".to_string()))
        );
    }

    #[test]
    fn test_time_to_minutes_rejects_minute_60() {
        assert!(time_to_minutes("12:60").is_err());
    }

    #[test]
    fn test_time_to_minutes_rejects_missing_colon() {
        assert!(time_to_minutes("0800").is_err());
    }

    #[test]
    fn test_time_to_minutes_rejects_trailing_seconds() {
        assert!(time_to_minutes("08:00:00").is_err());
    }

    #[test]
    fn test_time_to_minutes_rejects_negative_hours() {
        assert!(time_to_minutes("-1:30").is_err());
    }

    #[test]
    fn test_time_to_minutes_rejects_empty() {
        assert!(time_to_minutes("").is_err());
    }

    #[test]
    fn test_minutes_to_time_zero() {
        assert_eq!(minutes_to_time(0).unwrap(), "00:00");
    }

    #[test]
    fn test_minutes_to_time_pads_single_digits() {
        assert_eq!(minutes_to_time(65).unwrap(), "01:05");
    }

    #[test]
    fn test_minutes_to_time_last_minute() {
        assert_eq!(minutes_to_time(1439).unwrap(), "23:59");
    }

    #[test]
    fn test_minutes_to_time_rejects_negative() {
        assert_eq!(minutes_to_time(-1), Err(EngineError::InvalidDuration(-1)));
    }

    #[test]
    fn test_minutes_to_time_rejects_full_day() {
        assert!(minutes_to_time(1440).is_err());
    }

    #[test]
    fn test_round_trip() {
        for time in ["00:00", "07:45", "12:30", "23:59"] {
            let minutes = time_to_minutes(time).unwrap();
            assert_eq!(minutes_to_time(minutes as i64).unwrap(), time);
        }
    }
}
