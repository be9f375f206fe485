// Service module exports

pub mod grid;
pub mod layout;
pub mod navigation;
pub mod recurrence;
pub mod store;
