//! Configuration loading for quizdeck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//!
//! # Configuration File Locations
//!
//! Without `--config`, files are merged in this order (later wins):
//! 1. User global config (`~/.quizdeck/config.yml`)
//! 2. Project config (`./.quizdeck.yml`)
//!
//! Command-line flags are applied last.
//!
//! # Example
//!
//! ```
//! use quizdeck::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "endpoint:\n  base_url: http://localhost:3000\n",
//!     Path::new("inline.yml"),
//! )
//! .unwrap();
//! assert_eq!(config.endpoint.base_url, "http://localhost:3000");
//! assert_eq!(config.endpoint.timeout_secs, 30);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigOverrides, ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{EndpointConfig, OutputMode, QuizConfig, Settings, DEFAULT_BASE_URL};
