//! Runs `rspec` suites on the calling thread.

use std::fmt::Debug;
use std::sync::Arc;

use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};

/// Runs `suite` without rspec's parallel executor; the fixture's `App` must
/// not be touched from several threads at once.
///
/// A failing example exits the test process with a non-zero status, so each
/// rspec suite should live in its own test binary.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + Debug,
{
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid rspec configuration: {e}"));
    let stdout_logger = Arc::new(Logger::new(std::io::stdout()));
    Runner::new(config, vec![stdout_logger]).run(suite);
}
