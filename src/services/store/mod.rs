// Schedule store boundary
// The engine only needs a list/create/update/delete surface keyed by id;
// persistence mechanics live behind this trait. The engine itself never
// mutates through it: callers mutate, then re-invoke the engine with a
// fresh `list()` snapshot.

use anyhow::{anyhow, Context, Result};

use crate::models::schedule::ScheduleRecord;

pub trait ScheduleStore {
    /// Snapshot of every record.
    fn list(&self) -> Result<Vec<ScheduleRecord>>;

    /// Retrieve a record by id.
    fn get(&self, id: i64) -> Result<Option<ScheduleRecord>>;

    /// Validate and insert a record, assigning its id.
    fn create(&mut self, record: ScheduleRecord) -> Result<ScheduleRecord>;

    /// Partially replace fields of an existing record; the id is immutable.
    fn update(&mut self, id: i64, patch: ScheduleUpdate) -> Result<ScheduleRecord>;

    /// Remove a record; returns whether anything was deleted.
    fn delete(&mut self, id: i64) -> Result<bool>;
}

/// Patch for a partial update; `None` leaves the field untouched. The
/// optional record fields use a nested `Option` so they can be cleared.
#[derive(Debug, Clone, Default)]
pub struct ScheduleUpdate {
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub lecturer: Option<Option<String>>,
    pub week: Option<Option<String>>,
}

/// In-memory reference implementation, used by tests and the demo binary.
pub struct MemoryStore {
    records: Vec<ScheduleRecord>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore for MemoryStore {
    fn list(&self) -> Result<Vec<ScheduleRecord>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: i64) -> Result<Option<ScheduleRecord>> {
        Ok(self.records.iter().find(|r| r.id == Some(id)).cloned())
    }

    fn create(&mut self, mut record: ScheduleRecord) -> Result<ScheduleRecord> {
        record
            .validate()
            .map_err(|e| anyhow!(e))
            .context("Failed to create schedule")?;

        record.id = Some(self.next_id);
        self.next_id += 1;
        self.records.push(record.clone());

        log::debug!("Created schedule {:?}", record.id);
        Ok(record)
    }

    fn update(&mut self, id: i64, patch: ScheduleUpdate) -> Result<ScheduleRecord> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == Some(id))
            .ok_or_else(|| anyhow!("No schedule with id {}", id))?;

        // Patch a copy first so a failed validation leaves the stored
        // record untouched
        let mut updated = self.records[position].clone();
        if let Some(course_code) = patch.course_code {
            updated.course_code = course_code;
        }
        if let Some(course_name) = patch.course_name {
            updated.course_name = course_name;
        }
        if let Some(day) = patch.day {
            updated.day = day;
        }
        if let Some(start_time) = patch.start_time {
            updated.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            updated.end_time = end_time;
        }
        if let Some(location) = patch.location {
            updated.location = location;
        }
        if let Some(lecturer) = patch.lecturer {
            updated.lecturer = lecturer;
        }
        if let Some(week) = patch.week {
            updated.week = week;
        }

        updated
            .validate()
            .map_err(|e| anyhow!(e))
            .context("Failed to update schedule")?;

        self.records[position] = updated.clone();
        Ok(updated)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != Some(id));
        Ok(self.records.len() < before)
    }
}
