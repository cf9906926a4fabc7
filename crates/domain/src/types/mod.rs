//! Domain types and models

pub mod event;
pub mod status;

pub use event::Event;
pub use status::EventStatus;
