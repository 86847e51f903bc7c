//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Honours `RUST_LOG`; falls back to `default_level` when it is unset.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    // A second init (tests, embedded hosts) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();
}
