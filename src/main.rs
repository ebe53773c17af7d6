use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use greeklish_cli::config::{
	CONFIG_FILE_NAME, Config, Options, Patterns, Unique, generate_init_template,
	load_merged_config,
};
use greeklish_cli::files::{FileReport, transform_files, transform_files_sync};

#[derive(Parser)]
#[command(name = "greeklish")]
#[command(
	author,
	version,
	about = "CLI tool for transliterating Greek text in files into Greeklish"
)]
struct Cli {
	/// File patterns to process; each argument may hold comma-separated patterns
	#[arg(value_name = "PATTERNS")]
	patterns: Vec<String>,

	/// Comma-separated file patterns, used when no positional patterns are given
	#[arg(long, value_name = "PATTERNS")]
	files: Option<String>,

	/// Text encoding label used to read and write files
	#[arg(long, value_name = "LABEL")]
	encoding: Option<String>,

	/// Characters no rule may start a match on
	#[arg(long, value_name = "CHARS", allow_hyphen_values = true)]
	ignore_chars: Option<String>,

	/// Comma-separated glob patterns of files to skip (repeatable)
	#[arg(long, value_name = "PATTERNS")]
	ignore_files: Vec<String>,

	/// Write transformed files under this directory instead of in place
	#[arg(long, short, value_name = "DIR")]
	output: Option<PathBuf>,

	/// Text inserted before every replacement
	#[arg(long, allow_hyphen_values = true)]
	prefix: Option<String>,

	/// Text inserted after every replacement
	#[arg(long, allow_hyphen_values = true)]
	suffix: Option<String>,

	/// Do not report changed files
	#[arg(long)]
	silent: bool,

	/// Compute changes without writing any file
	#[arg(long)]
	test: bool,

	/// Index repeated replacements; pass `--unique=ALPHABET` to use letters instead of numbers
	#[arg(
		long,
		value_name = "ALPHABET",
		num_args = 0..=1,
		require_equals = true
	)]
	unique: Option<Option<String>>,

	/// Process files concurrently
	#[arg(long)]
	parallel: bool,

	/// Ignore .greeklish.toml files
	#[arg(long)]
	no_config: bool,

	/// Log every written file
	#[arg(long, short)]
	verbose: bool,

	/// Create a template .greeklish.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .greeklish.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

impl Cli {
	/// Options given on the command line, as a config layer that overrides files.
	fn overrides(&self) -> Config {
		Config {
			root: false,
			encoding: self.encoding.clone(),
			files: self.files.clone().map(Patterns::Joined),
			ignore_chars: self.ignore_chars.clone(),
			ignore_files: (!self.ignore_files.is_empty())
				.then(|| Patterns::List(self.ignore_files.clone())),
			output: self.output.clone(),
			prefix: self.prefix.clone(),
			suffix: self.suffix.clone(),
			silent: self.silent.then_some(true),
			test: self.test.then_some(true),
			unique: self.unique.clone().map(|alphabet| match alphabet {
				None => Unique::Numeric,
				Some(alphabet) => Unique::from_alphabet(alphabet),
			}),
			parallel: self.parallel.then_some(true),
		}
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logger(verbose: bool) {
	let default_filter = if verbose { "info" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.format_timestamp(None)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logger(cli.verbose);

	if cli.init {
		return handle_init(cli.force);
	}

	let options = build_options(&cli)?;
	handle_transform(&cli.patterns, &options)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

/// Defaults, then config files, then command-line flags.
fn build_options(cli: &Cli) -> Result<Options> {
	let file_config = if cli.no_config {
		Config::default()
	} else {
		let cwd = std::env::current_dir().context("Failed to get current directory")?;
		load_merged_config(&cwd).context("Failed to load configuration")?
	};

	let mut options = Options::default();
	options.apply(&cli.overrides().or(file_config));
	Ok(options)
}

fn plural(count: usize) -> &'static str {
	if count > 1 { "s" } else { "" }
}

fn report_file(report: &FileReport) {
	println!(
		"Replaced {} character{} in {}",
		report.changes,
		plural(report.changes),
		report.file.display()
	);
}

fn handle_transform(patterns: &[String], options: &Options) -> Result<ExitCode> {
	let changed = if options.parallel {
		let changed = transform_files(patterns, options).context("Failed to transliterate files")?;
		if !options.silent {
			changed.iter().for_each(report_file);
		}
		changed
	} else {
		transform_files_sync(patterns, options, |report| {
			if !options.silent {
				report_file(report);
			}
		})
		.context("Failed to transliterate files")?
	};

	let total: usize = changed.iter().map(|report| report.changes).sum();
	if !changed.is_empty() && !options.silent {
		println!(
			"Successfully made {} replacement{} in {} file{}.",
			total,
			plural(total),
			changed.len(),
			plural(changed.len())
		);
	}

	Ok(ExitCode::SUCCESS)
}
