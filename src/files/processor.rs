use crate::diff::count_changes;
use crate::error::{GreeklishError, Result};
use crate::rules::Transliterator;
use encoding_rs::Encoding;
use std::path::{Component, Path, PathBuf};

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
	/// The file as returned by pattern expansion.
	pub file: PathBuf,

	/// Characters removed from the original text; zero when nothing changed.
	pub changes: usize,
}

/// Everything a single file's unit of work needs. Shared read-only across files.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
	pub transliterator: &'a Transliterator,
	pub encoding: &'static Encoding,
	pub output: Option<&'a Path>,
	pub test: bool,
}

/// Where the transformed copy of `file` is written.
///
/// With no output directory the file is rewritten in place. Otherwise the
/// file's path is nested under `output`, dropping any root or drive prefix so
/// absolute inputs stay inside it.
pub fn mirror_path(output: Option<&Path>, file: &Path) -> PathBuf {
	match output.filter(|o| !o.as_os_str().is_empty()) {
		None => file.to_path_buf(),
		Some(output) => file
			.components()
			.fold(output.to_path_buf(), |mut path, component| {
				match component {
					Component::Normal(part) => path.push(part),
					Component::ParentDir => path.push(".."),
					Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
				}
				path
			}),
	}
}

/// Read a file and decode it with exactly `encoding`.
///
/// A byte order mark does not switch the encoding; it stays in the text and is
/// written back unchanged.
fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| GreeklishError::ReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let (text, had_errors) = encoding.decode_without_bom_handling(&bytes);
	if had_errors {
		log::warn!(
			"Malformed {} sequences in {} were replaced",
			encoding.name(),
			path.display()
		);
	}

	Ok(text.into_owned())
}

/// Encode text and write it, creating parent directories as needed.
fn write_text(path: &Path, text: &str, encoding: &'static Encoding) -> Result<()> {
	let write_error = |source| GreeklishError::WriteError {
		path: path.to_path_buf(),
		source,
	};

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).map_err(write_error)?;
	}

	let (bytes, _, had_errors) = encoding.encode(text);
	if had_errors {
		log::warn!(
			"Characters not representable in {} were escaped in {}",
			encoding.name(),
			path.display()
		);
	}

	std::fs::write(path, bytes).map_err(write_error)
}

/// Read, transform, count, and (unless nothing changed or in test mode) write one file.
pub fn process_file(file: &Path, ctx: &FileContext<'_>) -> Result<FileReport> {
	log::debug!("Reading {}", file.display());
	let original = read_text(file, ctx.encoding)?;
	let transformed = ctx.transliterator.transform(&original);
	let changes = count_changes(&original, &transformed);

	let report = FileReport {
		file: file.to_path_buf(),
		changes,
	};

	if changes == 0 || ctx.test {
		log::debug!(
			"Not writing {} ({} changes, test mode: {})",
			file.display(),
			changes,
			ctx.test
		);
		return Ok(report);
	}

	let target = mirror_path(ctx.output, file);
	write_text(&target, &transformed, ctx.encoding)?;
	log::info!("Wrote {} ({} changes)", target.display(), changes);

	Ok(report)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Options;
	use std::fs;

	fn context<'a>(
		transliterator: &'a Transliterator,
		output: Option<&'a Path>,
	) -> FileContext<'a> {
		FileContext {
			transliterator,
			encoding: encoding_rs::UTF_8,
			output,
			test: false,
		}
	}

	#[test]
	fn test_mirror_path_in_place() {
		assert_eq!(
			mirror_path(None, Path::new("test/1/a.txt")),
			PathBuf::from("test/1/a.txt")
		);
		assert_eq!(
			mirror_path(Some(Path::new("")), Path::new("a.txt")),
			PathBuf::from("a.txt")
		);
	}

	#[test]
	fn test_mirror_path_relative() {
		assert_eq!(
			mirror_path(Some(Path::new("test/changed")), Path::new("./test/1/a.txt")),
			PathBuf::from("test/changed/test/1/a.txt")
		);
	}

	#[test]
	fn test_mirror_path_absolute_stays_inside_output() {
		assert_eq!(
			mirror_path(Some(Path::new("out")), Path::new("/srv/docs/a.txt")),
			PathBuf::from("out/srv/docs/a.txt")
		);
	}

	#[test]
	fn test_process_file_in_place() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("a.txt");
		fs::write(&file, "καλημερα").unwrap();

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let report = process_file(&file, &context(&transliterator, None)).unwrap();

		assert_eq!(report.file, file);
		assert_eq!(report.changes, 8);
		assert_eq!(fs::read_to_string(&file).unwrap(), "kalhmera");
	}

	#[test]
	fn test_process_file_to_output_dir() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("src").join("a.txt");
		fs::create_dir_all(file.parent().unwrap()).unwrap();
		fs::write(&file, "ψυχή").unwrap();
		let output = temp_dir.path().join("out");

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let ctx = context(&transliterator, Some(output.as_path()));
		let report = process_file(&file, &ctx).unwrap();

		assert!(report.changes > 0);
		assert_eq!(fs::read_to_string(&file).unwrap(), "ψυχή");
		let target = mirror_path(Some(output.as_path()), &file);
		assert_eq!(fs::read_to_string(target).unwrap(), "psyxh");
	}

	#[test]
	fn test_process_file_unchanged_is_not_written() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("a.txt");
		fs::write(&file, "plain latin").unwrap();
		let output = temp_dir.path().join("out");

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let ctx = context(&transliterator, Some(output.as_path()));
		let report = process_file(&file, &ctx).unwrap();

		assert_eq!(report.changes, 0);
		assert!(!output.exists());
	}

	#[test]
	fn test_process_file_test_mode_counts_without_writing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("a.txt");
		fs::write(&file, "γεια").unwrap();

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let ctx = FileContext {
			test: true,
			..context(&transliterator, None)
		};
		let report = process_file(&file, &ctx).unwrap();

		assert_eq!(report.changes, 4);
		assert_eq!(fs::read_to_string(&file).unwrap(), "γεια");
	}

	#[test]
	fn test_process_file_legacy_encoding() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("a.txt");
		let (bytes, _, _) = encoding_rs::ISO_8859_7.encode("λόγος");
		fs::write(&file, &bytes).unwrap();

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let ctx = FileContext {
			encoding: encoding_rs::ISO_8859_7,
			..context(&transliterator, None)
		};
		process_file(&file, &ctx).unwrap();

		assert_eq!(fs::read(&file).unwrap(), b"logos");
	}

	#[test]
	fn test_process_file_keeps_byte_order_mark() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("a.txt");
		fs::write(&file, "\u{feff}γεια").unwrap();

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let report = process_file(&file, &context(&transliterator, None)).unwrap();

		assert_eq!(report.changes, 4);
		assert_eq!(fs::read(&file).unwrap(), b"\xEF\xBB\xBFgeia");
	}

	#[test]
	fn test_read_text_bom_does_not_override_encoding() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("a.txt");
		// UTF-16LE byte order mark followed by two single-byte letters
		fs::write(&file, [0xFF, 0xFE, b'a', b'b']).unwrap();

		let text = read_text(&file, encoding_rs::WINDOWS_1252).unwrap();
		assert_eq!(text, "\u{ff}\u{fe}ab");
	}

	#[test]
	fn test_process_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let file = temp_dir.path().join("missing.txt");

		let transliterator = Transliterator::new(&Options::default()).unwrap();
		let result = process_file(&file, &context(&transliterator, None));

		match result.unwrap_err() {
			GreeklishError::ReadError { path, .. } => assert_eq!(path, file),
			other => panic!("Expected ReadError, got {other:?}"),
		}
	}
}
