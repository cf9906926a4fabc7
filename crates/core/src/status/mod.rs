//! Last event status domain

pub mod ports;
pub mod rules;
pub mod service;

pub use ports::*;
pub use rules::classify;
pub use service::*;
