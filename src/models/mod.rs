pub mod common;
pub mod match_data;
pub mod match_events;
