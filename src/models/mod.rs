// Module exports for models

pub mod schedule;
pub mod view_state;
