// Test fixtures - reusable test data
// Provides consistent schedules and dates across integration tests

use chrono::NaiveDate;
use timetable_engine::models::schedule::ScheduleRecord;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// A Monday
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    /// A Sunday in the same week
    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    /// The Friday of the same week
    pub fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }
}

/// A small weekly timetable: three classes across the week
pub fn sample_timetable() -> Vec<ScheduleRecord> {
    vec![
        ScheduleRecord::new("CS101", "Intro to CS", "Monday", "09:00", "10:30", "Room 4").unwrap(),
        ScheduleRecord::builder()
            .course_code("MA202")
            .course_name("Linear Algebra")
            .day("wed")
            .start_time("14:00")
            .end_time("16:00")
            .location("Hall B")
            .lecturer("Dr. Osei")
            .build()
            .unwrap(),
        ScheduleRecord::new("PH301", "Quantum Mechanics", "Friday", "08:00", "09:30", "Physics Lab")
            .unwrap(),
    ]
}
