//! Shared fixture infrastructure for idle sway plugin behavioural tests.
//!
//! The rspec-based tests tick a Bevy `App` and need to:
//! - share that `App` across rspec closures, which demand `Send + Sync`,
//! - run `app.finish()` / `app.cleanup()` exactly once, and
//! - advance time by a fixed step so oscillation is deterministic.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use idle_sway::IdleSwayPlugin;

/// Simulated time per tick.
pub const TICK_STEP: Duration = Duration::from_millis(50);

/// `App` wrapper that forwards `Send` and `Sync` because access is
/// mutex-guarded.
#[derive(Debug)]
pub struct GuardedApp(App);

impl Deref for GuardedApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for GuardedApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec requires fixtures to be `Send + Sync` but runs these suites
// serially (see `rspec_runner::run_serial`). Every access to the wrapped
// `App` goes through the fixture's mutex.
unsafe impl Send for GuardedApp {}
unsafe impl Sync for GuardedApp {}

#[derive(Resource, Debug, Default)]
struct PluginsFinalized;

/// Owns a headless app with `IdleSwayPlugin` installed.
#[derive(Debug, Clone)]
pub struct SwayAppFixtureBase {
    app: Arc<Mutex<GuardedApp>>,
}

impl SwayAppFixtureBase {
    /// Builds the app with `MinimalPlugins` and a manual time step.
    #[must_use]
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(IdleSwayPlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(TICK_STEP));
        Self {
            app: Arc::new(Mutex::new(GuardedApp(app))),
        }
    }

    /// Locks the app, recovering from a poisoned mutex so one failed
    /// assertion does not cascade through the suite.
    pub fn app_guard(&self) -> MutexGuard<'_, GuardedApp> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one schedule pass, finalising plugins on the first call.
    pub fn tick(&self) {
        let mut app = self.app_guard();
        if app.world().get_resource::<PluginsFinalized>().is_none() {
            app.finish();
            app.cleanup();
            app.insert_resource(PluginsFinalized);
        }

        app.update();
    }
}
