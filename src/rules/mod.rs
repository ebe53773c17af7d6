//! Greek to Greeklish substitution rules.
//!
//! This module handles:
//! - The ordered rule table
//! - Pattern compilation with ignored start characters
//! - Applying the table to text, including `unique` disambiguation

pub mod engine;
pub mod pattern;
pub mod table;

pub use engine::{CompiledRule, Transliterator, UniqueState, transform};
pub use pattern::CompiledPattern;
pub use table::{RULES, Rule};
