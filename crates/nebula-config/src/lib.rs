//! Configuration for the Nebula weather tools.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the command
//! line via clap, and support hot-reload detection. Unknown or missing fields
//! fall back to defaults so old and new files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, WeatherConfig, default_config_dir};
pub use error::ConfigError;
