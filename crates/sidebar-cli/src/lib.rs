//! Offline replay of sidebar unlocks
//!
//! Drives [`sidebar_unlock::UnlockOrchestrator`] with recorded JSON
//! responses in place of live endpoints.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod commands;
pub mod config;
pub mod fixture;
pub mod telemetry;

pub use commands::{run_inspect, run_unlock, InspectReport, UnlockArgs};
pub use config::{CliConfig, ConfigError};
pub use fixture::FixtureAdapter;
pub use telemetry::{init_tracing, LogFormat};
