//! Startup configuration: a TOML settings file plus `USERDIR__*` environment
//! overrides, and the command line.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
