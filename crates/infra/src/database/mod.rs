//! Event repository implementations

pub mod memory_event_repository;

pub use memory_event_repository::*;
