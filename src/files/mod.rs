//! File-level processing for greeklish.
//!
//! This module handles:
//! - Expanding glob patterns into files
//! - Reading, transforming, and writing a single file
//! - Running a batch in parallel or sequentially

pub mod batch;
pub mod processor;
pub mod resolve;

pub use batch::{resolve_options, transform_files, transform_files_sync};
pub use processor::{FileContext, FileReport, mirror_path, process_file};
pub use resolve::resolve_files;
