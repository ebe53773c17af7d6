use crate::config::{Options, split_patterns};
use crate::error::Result;
use crate::files::processor::{FileContext, FileReport, process_file};
use crate::files::resolve::resolve_files;
use crate::rules::Transliterator;
use rayon::prelude::*;
use std::path::PathBuf;

/// Merge explicit patterns into `options` and validate the result.
///
/// Non-empty `patterns` replace `options.files`. Every entry may hold several
/// comma-separated patterns.
pub fn resolve_options<S: AsRef<str>>(patterns: &[S], options: &Options) -> Result<Options> {
	let mut resolved = options.clone();

	let explicit = split_patterns(patterns);
	if !explicit.is_empty() {
		resolved.files = explicit;
	} else {
		resolved.files = split_patterns(&resolved.files);
	}
	resolved.ignore_files = split_patterns(&resolved.ignore_files);

	resolved.validate()?;
	Ok(resolved)
}

/// Validated options, compiled rules, and the files they apply to.
struct Plan {
	options: Options,
	transliterator: Transliterator,
	files: Vec<PathBuf>,
}

impl Plan {
	fn new<S: AsRef<str>>(patterns: &[S], options: &Options) -> Result<Self> {
		let options = resolve_options(patterns, options)?;
		let transliterator = Transliterator::new(&options)?;
		let files = resolve_files(&options.files, &options.ignore_files)?;
		log::debug!("{} file(s) to process", files.len());

		Ok(Plan {
			options,
			transliterator,
			files,
		})
	}

	fn context(&self) -> Result<FileContext<'_>> {
		Ok(FileContext {
			transliterator: &self.transliterator,
			encoding: self.options.encoding()?,
			output: self.options.output.as_deref(),
			test: self.options.test,
		})
	}
}

/// Transliterate every matching file concurrently.
///
/// Every file is attempted even if another one fails; the first failure in
/// file order is then returned for the whole batch. Writes that already
/// happened are kept. Files without changes are left out of the result.
pub fn transform_files<S: AsRef<str>>(
	patterns: &[S],
	options: &Options,
) -> Result<Vec<FileReport>> {
	let plan = Plan::new(patterns, options)?;
	let ctx = plan.context()?;

	let outcomes: Vec<Result<FileReport>> = plan
		.files
		.par_iter()
		.map(|file| process_file(file, &ctx))
		.collect();

	let reports = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
	Ok(reports
		.into_iter()
		.filter(|report| report.changes > 0)
		.collect())
}

/// Transliterate matching files one at a time, in order.
///
/// `on_file` is called for each changed file as soon as it is done. The first
/// failure stops processing; later files are not touched.
pub fn transform_files_sync<S, F>(
	patterns: &[S],
	options: &Options,
	mut on_file: F,
) -> Result<Vec<FileReport>>
where
	S: AsRef<str>,
	F: FnMut(&FileReport),
{
	let plan = Plan::new(patterns, options)?;
	let ctx = plan.context()?;
	let mut changed = Vec::new();

	for file in &plan.files {
		let report = process_file(file, &ctx)?;
		if report.changes > 0 {
			on_file(&report);
			changed.push(report);
		}
	}

	Ok(changed)
}
