use crate::error::{GreeklishError, Result};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::PathBuf;

/// Wildcards do not match hidden files or descend into hidden directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
	case_sensitive: true,
	require_literal_separator: true,
	require_literal_leading_dot: true,
};

/// Ignore patterns still apply to paths under hidden directories.
const IGNORE_OPTIONS: MatchOptions = MatchOptions {
	require_literal_leading_dot: false,
	..MATCH_OPTIONS
};

/// Compile ignore patterns up front so a bad one fails before any file is read.
pub fn compile_ignores(ignore_files: &[String]) -> Result<Vec<Pattern>> {
	ignore_files
		.iter()
		.map(|pattern| {
			Pattern::new(pattern).map_err(|source| GreeklishError::InvalidGlob {
				pattern: pattern.clone(),
				source,
			})
		})
		.collect()
}

/// Expand glob patterns into the list of files to process.
///
/// Directories and paths matching any ignore pattern are skipped. Files come
/// back in pattern order, then glob order; a file matched by several patterns
/// is listed once.
pub fn resolve_files(patterns: &[String], ignore_files: &[String]) -> Result<Vec<PathBuf>> {
	let ignores = compile_ignores(ignore_files)?;
	let mut seen = HashSet::new();
	let mut files = Vec::new();

	for pattern in patterns {
		let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|source| {
			GreeklishError::InvalidGlob {
				pattern: pattern.clone(),
				source,
			}
		})?;

		let mut matched = 0;
		for entry in entries {
			let path = entry.map_err(|source| GreeklishError::GlobWalk { source })?;
			if !path.is_file() {
				continue;
			}
			if ignores
				.iter()
				.any(|ignore| ignore.matches_path_with(&path, IGNORE_OPTIONS))
			{
				log::debug!("Ignoring {}", path.display());
				continue;
			}
			matched += 1;
			if seen.insert(path.clone()) {
				files.push(path);
			}
		}

		log::debug!("Pattern {pattern} matched {matched} file(s)");
	}

	Ok(files)
}
