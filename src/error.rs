use std::path::PathBuf;

/// Library-level structured errors for greeklish.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum GreeklishError {
	#[error("`files` parameter/option is required")]
	MissingFiles,

	#[error("`unique` alphabet must be at least 4 characters long (got {len}: {alphabet:?})")]
	UniqueTooShort { alphabet: String, len: usize },

	#[error("Unknown text encoding: {label}")]
	UnknownEncoding { label: String },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid glob pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Failed to walk files matching a pattern")]
	GlobWalk {
		#[source]
		source: glob::GlobError,
	},

	#[error("Failed to read file: {path}")]
	ReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	WriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl GreeklishError {
	/// Whether this error was raised while validating options, before any file I/O.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			GreeklishError::MissingFiles
				| GreeklishError::UniqueTooShort { .. }
				| GreeklishError::UnknownEncoding { .. }
				| GreeklishError::InvalidGlob { .. }
		)
	}
}

/// Result type alias using GreeklishError.
pub type Result<T> = std::result::Result<T, GreeklishError>;
