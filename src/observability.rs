//! Log output for programs that embed the planner.
//!
//! The pipeline emits `tracing` events under the `gymia_planner` target: one
//! per model call, one per fallback and extraction misses at `debug`. [`init`]
//! routes them to stderr or to a file. Directives from `RUST_LOG` are layered
//! on top of the configured level, so `RUST_LOG=reqwest=debug` still works.

use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const CRATE_TARGET: &str = "gymia_planner";

/// Where planner logs go and how verbose they are.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Most verbose level kept for `gymia_planner` events.
    pub level: Level,
    pub target: LogTarget,
}

impl ObservabilityConfig {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = LogTarget::File(path.into());
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            target: LogTarget::default(),
        }
    }
}

/// Destination of formatted events.
///
/// Stderr is the default so plans printed on stdout stay machine-readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    #[default]
    Stderr,
    /// Created or truncated at start-up; written without ANSI colours.
    File(PathBuf),
}

/// Filter keeping `gymia_planner` events at `level` plus any `RUST_LOG` directives.
pub fn env_filter(level: Level) -> Result<EnvFilter, Box<dyn std::error::Error>> {
    let directive = format!("{CRATE_TARGET}={level}").parse()?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Installs the global subscriber.
///
/// Fails instead of panicking when a subscriber is already installed, and
/// when the log file cannot be created.
pub fn init(config: ObservabilityConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(env_filter(config.level)?);

    match config.target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogTarget::File(path) => {
            let file = std::fs::File::create(&path)?;
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .try_init()?
        }
    }

    Ok(())
}
