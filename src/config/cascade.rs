use crate::config::parser::parse_config_file;
use crate::config::types::{Config, LoadedConfig};
use crate::error::{GreeklishError, Result};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in every directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".greeklish.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.greeklish.toml`
/// 2. If found and `root = true`, stop walking up
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.greeklish.toml
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			let config = parse_config_file(&config_path)?;
			let root = config.root;
			log::debug!("Loaded config {}", config_path.display());

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if root {
				break;
			}
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	let user_path = user_config_path()?;
	let already_loaded = configs.iter().any(|loaded| loaded.path == user_path);
	if !already_loaded && user_path.is_file() {
		let config = parse_config_file(&user_path)?;
		log::debug!("Loaded user config {}", user_path.display());
		configs.push(LoadedConfig {
			config,
			path: user_path,
		});
	}

	Ok(configs)
}

/// Merge multiple configs into a single effective config.
///
/// Configs are expected in cascade order; the first one to set a key wins.
pub fn merge_configs(configs: &[LoadedConfig]) -> Config {
	configs
		.iter()
		.fold(Config::default(), |merged, loaded| {
			merged.or(loaded.config.clone())
		})
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<Config> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(GreeklishError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
