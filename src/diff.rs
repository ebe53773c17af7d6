//! Change counting between original and transliterated text.
//!
//! Uses the `similar` crate. The text is compared line by line, then word by
//! word inside changed lines, and only then character by character, so the
//! quadratic character diff only ever sees short pieces.

use similar::{ChangeTag, DiffTag, TextDiff};

#[derive(Debug, Clone, Copy)]
enum Level {
	Lines,
	Words,
	Chars,
}

impl Level {
	fn finer(self) -> Option<Level> {
		match self {
			Level::Lines => Some(Level::Words),
			Level::Words => Some(Level::Chars),
			Level::Chars => None,
		}
	}

	/// Split into segments that concatenate back to `text`.
	fn split(self, text: &str) -> Vec<&str> {
		match self {
			Level::Lines => text.split_inclusive('\n').collect(),
			Level::Words | Level::Chars => text.split_inclusive(char::is_whitespace).collect(),
		}
	}
}

/// Count the characters of `original` that do not survive into `transformed`.
///
/// Sums every deleted run of the diff. Zero means the text is unchanged.
pub fn count_changes(original: &str, transformed: &str) -> usize {
	deleted_chars(original, transformed, Level::Lines)
}

fn deleted_chars(original: &str, transformed: &str, level: Level) -> usize {
	if original == transformed {
		return 0;
	}

	let Some(finer) = level.finer() else {
		return TextDiff::from_chars(original, transformed)
			.iter_all_changes()
			.filter(|change| change.tag() == ChangeTag::Delete)
			.map(|change| change.value().chars().count())
			.sum();
	};

	// Transliteration keeps line and word boundaries, so segments pair up
	let old = level.split(original);
	let new = level.split(transformed);
	if old.len() == new.len() {
		return old
			.iter()
			.zip(&new)
			.map(|(o, n)| deleted_chars(o, n, finer))
			.sum();
	}

	match level {
		Level::Lines => deleted_in_hunks(&TextDiff::from_lines(original, transformed), finer),
		_ => deleted_in_hunks(&TextDiff::from_words(original, transformed), finer),
	}
}

/// Sum deletions over a coarse diff, refining only the replaced hunks.
fn deleted_in_hunks(diff: &TextDiff<'_, '_, '_, str>, finer: Level) -> usize {
	let old = diff.old_slices();
	let new = diff.new_slices();

	diff.ops()
		.iter()
		.map(|op| match op.tag() {
			DiffTag::Equal | DiffTag::Insert => 0,
			DiffTag::Delete => old[op.old_range()]
				.iter()
				.map(|s| s.chars().count())
				.sum(),
			DiffTag::Replace => deleted_chars(
				&old[op.old_range()].concat(),
				&new[op.new_range()].concat(),
				finer,
			),
		})
		.sum()
}
