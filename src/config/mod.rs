//! Configuration loading and parsing for greeklish.
//!
//! This module handles:
//! - Resolved invocation options and the `unique` disambiguation mode
//! - TOML config file parsing
//! - Directory cascade discovery and merging
//! - The starter config written by `--init`

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, discover_configs, load_merged_config, merge_configs, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Config, LoadedConfig, Options, Patterns, Unique, split_patterns};
