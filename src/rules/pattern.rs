use crate::error::{GreeklishError, Result};
use regex::{Match, Regex};

/// A rule pattern compiled together with the characters it must not start on.
///
/// `regex` has no lookaround, so the "not followed by one of these" guard in
/// front of the pattern is evaluated here: a match whose first character is
/// ignored is rejected and the search resumes one character later.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
	regex: Regex,
	ignore: Vec<char>,
}

impl CompiledPattern {
	/// Compile `pattern`, guarded by `ignore_chars` when given.
	pub fn compile(pattern: &str, ignore_chars: Option<&str>) -> Result<Self> {
		let regex = Regex::new(pattern).map_err(|source| GreeklishError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(CompiledPattern {
			regex,
			ignore: ignore_chars
				.map(|chars| chars.chars().collect())
				.unwrap_or_default(),
		})
	}

	pub fn as_str(&self) -> &str {
		self.regex.as_str()
	}

	fn is_ignored_at(&self, text: &str, at: usize) -> bool {
		text[at..]
			.chars()
			.next()
			.is_some_and(|c| self.ignore.contains(&c))
	}

	/// All non-overlapping matches, left to right.
	pub fn find_all<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
		let mut matches = Vec::new();
		let mut pos = 0;

		while pos <= text.len() {
			let Some(m) = self.regex.find_at(text, pos) else {
				break;
			};

			if self.is_ignored_at(text, m.start()) {
				pos = next_char_boundary(text, m.start());
				continue;
			}

			pos = if m.is_empty() {
				next_char_boundary(text, m.end())
			} else {
				m.end()
			};
			matches.push(m);
		}

		matches
	}

	/// Whether there is at least one match.
	pub fn is_match(&self, text: &str) -> bool {
		!self.find_all(text).is_empty()
	}
}

/// Byte offset of the character after the one starting at `at`.
fn next_char_boundary(text: &str, at: usize) -> usize {
	at + text[at..].chars().next().map_or(1, char::len_utf8)
}

/// Replace every match with `replacement`, inserted literally.
pub fn splice(text: &str, matches: &[Match<'_>], replacement: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut last = 0;

	for m in matches {
		out.push_str(&text[last..m.start()]);
		out.push_str(replacement);
		last = m.end();
	}
	out.push_str(&text[last..]);

	out
}
