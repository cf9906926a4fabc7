//! In-memory implementation of `LastEventRepository`
//!
//! Keeps every recorded event per group and answers with the one that ends
//! last. Can be seeded from a JSON or TOML fixture:
//!
//! ```json
//! {
//!   "groups": {
//!     "group-a": [
//!       { "endDate": "2024-05-01T18:00:00Z", "reviewDurationInHours": 2 }
//!     ]
//!   }
//! }
//! ```
//!
//! In TOML the `endDate` values must be quoted strings.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use eventstatus_core::LastEventRepository as LastEventRepositoryPort;
use eventstatus_domain::{Event, EventStatusError, Result as DomainResult};
use parking_lot::RwLock;
use serde::Deserialize;

/// Fixture file layout
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    groups: HashMap<String, Vec<Event>>,
}

/// Thread-safe in-memory event store
#[derive(Debug, Default)]
pub struct InMemoryLastEventRepository {
    events: RwLock<HashMap<String, Vec<Event>>>,
}

impl InMemoryLastEventRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a repository from a `.json` or `.toml` fixture file.
    ///
    /// # Errors
    /// Returns `EventStatusError::Config` if the file cannot be read or
    /// parsed, and `EventStatusError::InvalidInput` if an event carries an
    /// invalid review duration.
    pub fn from_seed_file(path: &Path) -> DomainResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EventStatusError::Config(format!("Failed to read seed file {}: {e}", path.display()))
        })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let seed: SeedFile = match extension {
            "toml" => toml::from_str(&contents)
                .map_err(|e| EventStatusError::Config(format!("Invalid TOML seed file: {e}")))?,
            "json" => serde_json::from_str(&contents)
                .map_err(|e| EventStatusError::Config(format!("Invalid JSON seed file: {e}")))?,
            _ => {
                return Err(EventStatusError::Config(format!(
                    "Unsupported seed file format: {extension}"
                )))
            }
        };

        let repository = Self::new();
        let mut event_count = 0usize;
        for (group_id, events) in seed.groups {
            for event in events {
                event.validate().map_err(|e| match e {
                    EventStatusError::InvalidInput(msg) => {
                        EventStatusError::InvalidInput(format!("group {group_id}: {msg}"))
                    }
                    other => other,
                })?;
                repository.record(&group_id, event);
                event_count += 1;
            }
        }

        tracing::info!(
            path = %path.display(),
            groups = repository.group_count(),
            events = event_count,
            "Seeded in-memory event repository"
        );
        Ok(repository)
    }

    /// Record an event for `group_id`.
    pub fn record(&self, group_id: &str, event: Event) {
        self.events.write().entry(group_id.to_string()).or_default().push(event);
    }

    /// Number of groups with at least one recorded event
    pub fn group_count(&self) -> usize {
        self.events.read().len()
    }
}

#[async_trait]
impl LastEventRepositoryPort for InMemoryLastEventRepository {
    async fn load_last_event(&self, group_id: &str) -> DomainResult<Option<Event>> {
        let events = self.events.read();

        // `max_by_key` keeps the last of equal keys, so ties go to the latest record
        Ok(events
            .get(group_id)
            .and_then(|group| group.iter().max_by_key(|event| event.end_date))
            .cloned())
    }
}
