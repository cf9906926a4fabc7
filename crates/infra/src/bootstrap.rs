//! Wiring of infrastructure adapters into the core `StatusChecker`

use std::path::Path;
use std::sync::Arc;

use eventstatus_core::{LastEventRepository, StatusChecker};
use eventstatus_domain::{Config, RepositoryConfig, Result};

use crate::clock::SystemClock;
use crate::database::InMemoryLastEventRepository;

/// Status checker reading the system clock.
pub fn status_checker_with_system_clock(repository: Arc<dyn LastEventRepository>) -> StatusChecker {
    StatusChecker::new(repository, Arc::new(SystemClock))
}

/// Build the configured event repository, seeding it when a fixture is set.
///
/// # Errors
/// Propagates seed file errors from
/// [`InMemoryLastEventRepository::from_seed_file`].
pub fn build_repository(config: &RepositoryConfig) -> Result<InMemoryLastEventRepository> {
    match config.seed_path.as_deref() {
        Some(path) => InMemoryLastEventRepository::from_seed_file(Path::new(path)),
        None => {
            tracing::debug!("No seed path configured, starting with an empty repository");
            Ok(InMemoryLastEventRepository::new())
        }
    }
}

/// Build a ready-to-use `StatusChecker` from application config.
///
/// # Errors
/// Propagates repository construction errors.
pub fn build_status_checker(config: &Config) -> Result<StatusChecker> {
    let repository = build_repository(&config.repository)?;
    Ok(status_checker_with_system_clock(Arc::new(repository)))
}
