//! Retag - bulk media tag editor driven by pattern rules.
//!
//! This library provides the core functionality for retag and its lyrfetch
//! companion, including:
//! - A compact rule language for selecting tags and rewriting their values
//! - An ordered tag pipeline with change detection
//! - Boundaries to the external media inspector and mutator processes
//! - Batch processing with one report per input file
//! - Lyrics lookup with sidecar or embedded storage
//!
//! # Example
//!
//! ```
//! use retag_cli::rules::{TagSet, parse_rule, pipeline};
//!
//! let rule = parse_rule(r"(?i)title/r:^\d+\.?\s*(.+)$/\1/").unwrap();
//!
//! let mut tags = TagSet::new();
//! tags.insert("Title".to_string(), "03. Song Name".to_string());
//!
//! let cleaned = pipeline::run(&tags, &[rule]);
//! assert_eq!(cleaned["Title"], "Song Name");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod media;
pub mod processor;
pub mod rules;

pub use error::{Result, RetagError};
