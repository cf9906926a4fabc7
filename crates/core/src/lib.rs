//! # EventStatus Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The last-event status classification rule
//! - Port/adapter interfaces (traits)
//! - The `StatusChecker` use case
//!
//! ## Architecture Principles
//! - Only depends on `eventstatus-domain`
//! - No database, HTTP, or platform code
//! - Storage and wall-clock time reached only through traits
//! - Pure, testable business logic

pub mod status;

pub use status::ports::{Clock, LastEventRepository};
pub use status::rules::classify;
pub use status::StatusChecker;
