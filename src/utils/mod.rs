// Utility module exports

pub mod time;
pub mod weekday;
