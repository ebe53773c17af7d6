use crate::error::{GreeklishError, Result};
use encoding_rs::Encoding;
use serde::Deserialize;
use std::path::PathBuf;

/// Minimum number of characters a `unique` alphabet must have.
pub const MIN_UNIQUE_ALPHABET: usize = 4;

/// Disambiguation mode for consecutive rules that collapse to the same replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "UniqueRepr")]
pub enum Unique {
	/// Replacements are emitted as-is.
	#[default]
	Off,

	/// Repeated replacements get a numeric index appended (`0`, `1`, `2`, ...).
	Numeric,

	/// Repeated replacements get the character at the current index of this alphabet appended.
	Alphabet(String),
}

/// TOML accepts `unique = true` as well as `unique = "abcd"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum UniqueRepr {
	Flag(bool),
	Alphabet(String),
}

impl From<UniqueRepr> for Unique {
	fn from(repr: UniqueRepr) -> Self {
		match repr {
			UniqueRepr::Flag(true) => Unique::Numeric,
			UniqueRepr::Flag(false) => Unique::Off,
			UniqueRepr::Alphabet(alphabet) => Unique::from_alphabet(alphabet),
		}
	}
}

impl Unique {
	/// Build an alphabet mode. An empty alphabet turns the mode off.
	pub fn from_alphabet(alphabet: impl Into<String>) -> Self {
		let alphabet = alphabet.into();
		if alphabet.is_empty() {
			Unique::Off
		} else {
			Unique::Alphabet(alphabet)
		}
	}

	pub fn is_enabled(&self) -> bool {
		!matches!(self, Unique::Off)
	}

	/// Suffix to append to the `counter`-th repeat of a replacement.
	///
	/// The alphabet index wraps around once it runs past the last character.
	pub fn suffix(&self, counter: usize) -> Option<String> {
		match self {
			Unique::Off => None,
			Unique::Numeric => Some(counter.to_string()),
			Unique::Alphabet(alphabet) => {
				let len = alphabet.chars().count();
				if len == 0 {
					return None;
				}
				alphabet.chars().nth(counter % len).map(String::from)
			}
		}
	}

	/// Reject alphabets too short to disambiguate anything.
	pub fn validate(&self) -> Result<()> {
		if let Unique::Alphabet(alphabet) = self {
			let len = alphabet.chars().count();
			if len < MIN_UNIQUE_ALPHABET {
				return Err(GreeklishError::UniqueTooShort {
					alphabet: alphabet.clone(),
					len,
				});
			}
		}
		Ok(())
	}
}

/// A list of glob patterns, written either as one comma-separated string or as an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
	Joined(String),
	List(Vec<String>),
}

impl Patterns {
	/// Flatten into individual patterns, splitting on commas.
	pub fn to_vec(&self) -> Vec<String> {
		match self {
			Patterns::Joined(joined) => split_patterns([joined]),
			Patterns::List(list) => split_patterns(list),
		}
	}
}

/// Split comma-separated pattern arguments into individual patterns, dropping empty ones.
pub fn split_patterns<I, S>(args: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	args.into_iter()
		.flat_map(|arg| {
			arg.as_ref()
				.split(',')
				.map(str::trim)
				.filter(|p| !p.is_empty())
				.map(str::to_string)
				.collect::<Vec<_>>()
		})
		.collect()
}

/// Contents of a `.greeklish.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// If true, stop the directory cascade here and fall through to ~/.greeklish.toml.
	#[serde(default)]
	pub root: bool,

	/// WHATWG encoding label used to read and write files.
	pub encoding: Option<String>,

	/// File patterns to process when none are given on the command line.
	pub files: Option<Patterns>,

	/// Characters that no rule may start a match on.
	pub ignore_chars: Option<String>,

	/// Glob patterns of files to leave alone.
	pub ignore_files: Option<Patterns>,

	/// Directory to mirror transformed files into instead of writing in place.
	pub output: Option<PathBuf>,

	/// Text inserted before every replacement.
	pub prefix: Option<String>,

	/// Text inserted after every replacement.
	pub suffix: Option<String>,

	/// Suppress per-file reporting.
	pub silent: Option<bool>,

	/// Compute changes without writing anything.
	pub test: Option<bool>,

	/// Disambiguation mode: `true`, `false`, or an alphabet of at least 4 characters.
	pub unique: Option<Unique>,

	/// Process files concurrently.
	pub parallel: Option<bool>,
}

impl Config {
	/// Validate values that can be checked without touching the filesystem.
	pub fn validate(&self) -> Result<()> {
		if let Some(ref unique) = self.unique {
			unique.validate()?;
		}
		if let Some(ref label) = self.encoding {
			resolve_encoding(label)?;
		}
		Ok(())
	}

	/// Fill every unset key from `fallback`. Keys already set here win.
	pub fn or(self, fallback: Config) -> Config {
		Config {
			root: self.root || fallback.root,
			encoding: self.encoding.or(fallback.encoding),
			files: self.files.or(fallback.files),
			ignore_chars: self.ignore_chars.or(fallback.ignore_chars),
			ignore_files: self.ignore_files.or(fallback.ignore_files),
			output: self.output.or(fallback.output),
			prefix: self.prefix.or(fallback.prefix),
			suffix: self.suffix.or(fallback.suffix),
			silent: self.silent.or(fallback.silent),
			test: self.test.or(fallback.test),
			unique: self.unique.or(fallback.unique),
			parallel: self.parallel.or(fallback.parallel),
		}
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Fully resolved options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
	pub encoding: String,
	pub files: Vec<String>,
	pub ignore_chars: Option<String>,
	pub ignore_files: Vec<String>,
	pub output: Option<PathBuf>,
	pub prefix: String,
	pub suffix: String,
	pub silent: bool,
	pub test: bool,
	pub unique: Unique,
	pub parallel: bool,
}

impl Default for Options {
	fn default() -> Self {
		Options {
			encoding: "utf-8".to_string(),
			files: Vec::new(),
			ignore_chars: None,
			ignore_files: Vec::new(),
			output: None,
			prefix: String::new(),
			suffix: String::new(),
			silent: false,
			test: false,
			unique: Unique::Off,
			parallel: false,
		}
	}
}

impl Options {
	/// Overlay every key set in `config` onto these options.
	pub fn apply(&mut self, config: &Config) {
		if let Some(ref encoding) = config.encoding {
			self.encoding = encoding.clone();
		}
		if let Some(ref files) = config.files {
			self.files = files.to_vec();
		}
		if let Some(ref chars) = config.ignore_chars {
			self.ignore_chars = Some(chars.clone()).filter(|c| !c.is_empty());
		}
		if let Some(ref ignore_files) = config.ignore_files {
			self.ignore_files = ignore_files.to_vec();
		}
		if let Some(ref output) = config.output {
			self.output = Some(output.clone()).filter(|o| !o.as_os_str().is_empty());
		}
		if let Some(ref prefix) = config.prefix {
			self.prefix = prefix.clone();
		}
		if let Some(ref suffix) = config.suffix {
			self.suffix = suffix.clone();
		}
		if let Some(silent) = config.silent {
			self.silent = silent;
		}
		if let Some(test) = config.test {
			self.test = test;
		}
		if let Some(ref unique) = config.unique {
			self.unique = unique.clone();
		}
		if let Some(parallel) = config.parallel {
			self.parallel = parallel;
		}
	}

	/// Check everything that must hold before any file is touched.
	pub fn validate(&self) -> Result<()> {
		if self.files.is_empty() {
			return Err(GreeklishError::MissingFiles);
		}
		self.unique.validate()?;
		self.encoding()?;
		Ok(())
	}

	/// The encoding named by `self.encoding`.
	pub fn encoding(&self) -> Result<&'static Encoding> {
		resolve_encoding(&self.encoding)
	}
}

fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
	Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| GreeklishError::UnknownEncoding {
		label: label.to_string(),
	})
}
