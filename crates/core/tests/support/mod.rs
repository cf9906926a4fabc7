//! Shared test helpers for `eventstatus-core` integration tests.
//!
//! These helpers provide reusable doubles so the status tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod clock;
pub mod logs;
pub mod repositories;
