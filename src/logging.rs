//! Logger setup for binaries and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level applied to this crate's own log records.
const fn crate_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Default `env_logger` filter: other crates stay at `warn`, while idle sway
/// reports lifecycle changes at the requested verbosity.
fn default_filter(verbose: bool) -> String {
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), crate_level(verbose))
}

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages such as baseline captures and
/// inert animators are printed. Otherwise only info level and above are
/// shown. `RUST_LOG` overrides either default.
pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)));

    // Fails only when a logger is already installed, which repeated calls
    // from tests are allowed to do.
    let _ = builder.try_init();
}
