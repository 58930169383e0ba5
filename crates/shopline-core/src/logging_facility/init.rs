//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "shopline_core=debug,shopline_store=debug,shopline_engine=debug",
            Profile::Production => "info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility with the profile's default filter
///
/// See [`init_with_filter`].
pub fn init(profile: Profile) {
    init_with_filter(profile, profile.default_filter());
}

/// Initialize the logging facility
///
/// This function should be called once at application startup; later calls
/// are ignored. Output goes to stderr so it never interleaves with the
/// shell's own stdout. `RUST_LOG` takes precedence over `default_filter`.
///
/// # Profiles
///
/// - **Development**: Human-readable logs
/// - **Production**: JSON structured logs
/// - **Test**: No-op registry; use `init_test_capture()` to record events
pub fn init_with_filter(profile: Profile, default_filter: &str) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                // Test capture is initialized separately via init_test_capture()
                tracing_subscriber::registry().init();
            }
        }
    });
}
