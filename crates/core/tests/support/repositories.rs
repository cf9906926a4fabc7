//! Test doubles for `LastEventRepository`
//!
//! Provides a call-recording spy and an always-failing repository so that
//! status checker tests can observe how the port is used.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventstatus_core::LastEventRepository;
use eventstatus_domain::{Event, EventStatusError, Result as DomainResult};

/// Spy returning a configurable output and recording every call.
#[derive(Default, Clone)]
pub struct LastEventRepositorySpy {
    output: Arc<Mutex<Option<Event>>>,
    group_ids: Arc<Mutex<Vec<String>>>,
}

impl LastEventRepositorySpy {
    /// Spy that reports no event for every group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spy that returns `event` for every group.
    pub fn returning(event: Event) -> Self {
        let spy = Self::default();
        spy.set_output(Some(event));
        spy
    }

    /// Replace the value returned by subsequent calls.
    pub fn set_output(&self, event: Option<Event>) {
        *self.output.lock().unwrap() = event;
    }

    /// Number of `load_last_event` calls so far.
    pub fn calls_count(&self) -> usize {
        self.group_ids.lock().unwrap().len()
    }

    /// Group id passed to the most recent call.
    pub fn last_group_id(&self) -> Option<String> {
        self.group_ids.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LastEventRepository for LastEventRepositorySpy {
    async fn load_last_event(&self, group_id: &str) -> DomainResult<Option<Event>> {
        self.group_ids.lock().unwrap().push(group_id.to_string());
        Ok(self.output.lock().unwrap().clone())
    }
}

/// Repository whose storage is always unreachable.
#[derive(Default, Clone)]
pub struct FailingLastEventRepository {
    calls: Arc<Mutex<usize>>,
}

impl FailingLastEventRepository {
    /// Error returned by every call.
    pub fn error() -> EventStatusError {
        EventStatusError::Repository("storage unavailable".to_string())
    }

    pub fn calls_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl LastEventRepository for FailingLastEventRepository {
    async fn load_last_event(&self, _group_id: &str) -> DomainResult<Option<Event>> {
        *self.calls.lock().unwrap() += 1;
        Err(Self::error())
    }
}
