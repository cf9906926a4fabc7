//! # EventStatus Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Event repository implementations (in-memory, fixture seeded)
//! - The system clock
//! - Configuration loading
//! - Tracing subscriber setup
//! - Wiring of a ready-to-use `StatusChecker`
//!
//! ## Architecture
//! - Implements traits defined in `eventstatus-core`
//! - Depends on `eventstatus-domain` and `eventstatus-core`
//! - Contains all "impure" code (I/O, wall-clock time, global subscribers)

pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod database;
pub mod observability;

// Re-export commonly used items
pub use bootstrap::{build_repository, build_status_checker, status_checker_with_system_clock};
pub use clock::SystemClock;
pub use database::InMemoryLastEventRepository;
pub use observability::init_tracing;
