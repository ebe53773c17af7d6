//! Greeklish - CLI tool for transliterating Greek text in files into Latin characters.
//!
//! This library provides the core functionality for greeklish, including:
//! - The ordered Greek to Greeklish rule table and the engine that applies it
//! - Character-level change counting
//! - Glob expansion, per-file processing, and parallel or sequential batches
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use greeklish_cli::config::Options;
//! use greeklish_cli::rules::transform;
//!
//! let options = Options::default();
//! let text = transform("Εύηχο: αυτό που ακούγεται ωραία.", &options).unwrap();
//! assert_eq!(text, "Euhxo: auto pou akougetai wraia.");
//! ```
//!
//! ```no_run
//! use greeklish_cli::config::Options;
//! use greeklish_cli::files::transform_files_sync;
//!
//! let options = Options {
//! 	output: Some("build/greeklish".into()),
//! 	..Default::default()
//! };
//! let changed = transform_files_sync(&["docs/**/*.md"], &options, |report| {
//! 	println!("{} ({} changes)", report.file.display(), report.changes);
//! })
//! .unwrap();
//! println!("{} file(s) changed", changed.len());
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod files;
pub mod rules;

pub use error::{GreeklishError, Result};
