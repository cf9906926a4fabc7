//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Review window arithmetic
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const NANOS_PER_HOUR: f64 = 3.6e12;

// Configuration defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
