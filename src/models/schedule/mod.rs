// Schedule module
// Weekly-recurring class occurrence model

use serde::{Deserialize, Serialize};

use crate::utils::time::time_to_minutes;
use crate::utils::weekday::{day_name_to_index, parse_day};

/// A class that recurs on one weekday forever.
///
/// The `day` descriptor is stored exactly as given (name, abbreviation, or
/// numeric index) and normalized on read. Times are naive local wall-clock
/// `"HH:MM"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub id: Option<i64>,
    pub course_code: String,
    pub course_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub lecturer: Option<String>,
    /// Free-form label; stored but not consulted by recurrence matching.
    pub week: Option<String>,
}

impl ScheduleRecord {
    /// Create a new schedule with required fields
    ///
    /// # Arguments
    /// * `course_code` - Course code (required, non-empty)
    /// * `course_name` - Course name (required, non-empty)
    /// * `day` - Weekday descriptor (name, abbreviation, or 0-6 index)
    /// * `start_time` / `end_time` - 24-hour `HH:MM`, start before end
    /// * `location` - Room or venue (required, non-empty)
    ///
    /// # Examples
    /// ```
    /// use timetable_engine::models::schedule::ScheduleRecord;
    ///
    /// let schedule =
    ///     ScheduleRecord::new("CS101", "Intro to CS", "Monday", "09:00", "10:30", "Room 4")
    ///         .unwrap();
    /// assert_eq!(schedule.day_index(), 1);
    /// ```
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, String> {
        let schedule = Self {
            id: None,
            course_code: course_code.into(),
            course_name: course_name.into(),
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: location.into(),
            lecturer: None,
            week: None,
        };

        schedule.validate()?;
        Ok(schedule)
    }

    /// Create a builder for constructing schedules with optional fields
    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder::new()
    }

    /// Validate the schedule
    pub fn validate(&self) -> Result<(), String> {
        if self.course_code.trim().is_empty() {
            return Err("Course code cannot be empty".to_string());
        }

        if self.course_name.trim().is_empty() {
            return Err("Course name cannot be empty".to_string());
        }

        if self.location.trim().is_empty() {
            return Err("Location cannot be empty".to_string());
        }

        if parse_day(&self.day).is_none() {
            return Err(format!("Unrecognized day descriptor '{}'", self.day));
        }

        let start = time_to_minutes(&self.start_time).map_err(|e| e.to_string())?;
        let end = time_to_minutes(&self.end_time).map_err(|e| e.to_string())?;

        if end <= start {
            return Err("Schedule end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Canonical Sunday-based weekday index for this schedule's `day`
    /// descriptor. Lenient: unrecognized descriptors normalize to Sunday.
    pub fn day_index(&self) -> u32 {
        day_name_to_index(&self.day)
    }

    /// Duration in minutes, when both times parse and the order is valid.
    pub fn duration_minutes(&self) -> Option<u32> {
        let start = time_to_minutes(&self.start_time).ok()?;
        let end = time_to_minutes(&self.end_time).ok()?;
        end.checked_sub(start).filter(|d| *d > 0)
    }
}

/// Builder for creating schedules with optional fields
pub struct ScheduleBuilder {
    course_code: Option<String>,
    course_name: Option<String>,
    day: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    location: Option<String>,
    lecturer: Option<String>,
    week: Option<String>,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self {
            course_code: None,
            course_name: None,
            day: None,
            start_time: None,
            end_time: None,
            location: None,
            lecturer: None,
            week: None,
        }
    }

    pub fn course_code(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = Some(course_code.into());
        self
    }

    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = Some(course_name.into());
        self
    }

    pub fn day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn lecturer(mut self, lecturer: impl Into<String>) -> Self {
        self.lecturer = Some(lecturer.into());
        self
    }

    pub fn week(mut self, week: impl Into<String>) -> Self {
        self.week = Some(week.into());
        self
    }

    /// Build the schedule
    pub fn build(self) -> Result<ScheduleRecord, String> {
        let schedule = ScheduleRecord {
            id: None,
            course_code: self.course_code.ok_or("Course code is required")?,
            course_name: self.course_name.ok_or("Course name is required")?,
            day: self.day.ok_or("Day is required")?,
            start_time: self.start_time.ok_or("Start time is required")?,
            end_time: self.end_time.ok_or("End time is required")?,
            location: self.location.ok_or("Location is required")?,
            lecturer: self.lecturer,
            week: self.week,
        };

        schedule.validate()?;
        Ok(schedule)
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScheduleRecord {
        ScheduleRecord::new("CS101", "Intro to CS", "Monday", "09:00", "10:30", "Room 4").unwrap()
    }

    #[test]
    fn test_new_schedule_success() {
        let schedule = sample();
        assert_eq!(schedule.course_code, "CS101");
        assert_eq!(schedule.id, None);
        assert_eq!(schedule.day_index(), 1);
        assert!(schedule.lecturer.is_none());
    }

    #[test]
    fn test_new_schedule_empty_course_code() {
        let result = ScheduleRecord::new("", "Intro to CS", "Monday", "09:00", "10:30", "Room 4");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Course code cannot be empty");
    }

    #[test]
    fn test_new_schedule_whitespace_location() {
        let result = ScheduleRecord::new("CS101", "Intro to CS", "Monday", "09:00", "10:30", "  ");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Location cannot be empty");
    }

    #[test]
    fn test_new_schedule_end_before_start() {
        let result = ScheduleRecord::new("CS101", "Intro to CS", "Monday", "10:30", "09:00", "Room 4");
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Schedule end time must be after start time"
        );
    }

    #[test]
    fn test_new_schedule_equal_times() {
        let result = ScheduleRecord::new("CS101", "Intro to CS", "Monday", "09:00", "09:00", "Room 4");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_schedule_malformed_time() {
        let result = ScheduleRecord::new("CS101", "Intro to CS", "Monday", "9am", "10:30", "Room 4");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_day() {
        // Validation is strict even though matching tolerates unknown days
        let result = ScheduleRecord::new("CS101", "Intro to CS", "bogus", "09:00", "10:30", "Room 4");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("day descriptor"));
    }

    #[test]
    fn test_validate_accepts_numeric_day() {
        let schedule = ScheduleRecord::new("CS101", "Intro to CS", "5", "09:00", "10:30", "Room 4");
        assert!(schedule.is_ok());
        assert_eq!(schedule.unwrap().day_index(), 5);
    }

    #[test]
    fn test_builder_basic() {
        let schedule = ScheduleRecord::builder()
            .course_code("MA202")
            .course_name("Linear Algebra")
            .day("Tuesday")
            .start_time("14:00")
            .end_time("16:00")
            .location("Hall B")
            .build()
            .unwrap();

        assert_eq!(schedule.course_name, "Linear Algebra");
        assert_eq!(schedule.day_index(), 2);
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let schedule = ScheduleRecord::builder()
            .course_code("PH301")
            .course_name("Quantum Mechanics")
            .day("fri")
            .start_time("08:00")
            .end_time("09:30")
            .location("Physics Lab")
            .lecturer("Dr. Osei")
            .week("odd")
            .build()
            .unwrap();

        assert_eq!(schedule.lecturer, Some("Dr. Osei".to_string()));
        assert_eq!(schedule.week, Some("odd".to_string()));
    }

    #[test]
    fn test_builder_missing_day() {
        let result = ScheduleRecord::builder()
            .course_code("CS101")
            .course_name("Intro to CS")
            .start_time("09:00")
            .end_time("10:30")
            .location("Room 4")
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Day is required");
    }

    #[test]
    fn test_duration_minutes() {
        let schedule = sample();
        assert_eq!(schedule.duration_minutes(), Some(90));
    }

    #[test]
    fn test_serde_round_trip() {
        let schedule = sample();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: ScheduleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
