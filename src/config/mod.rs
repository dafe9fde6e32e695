//! Configuration loading and parsing for retag.
//!
//! This module handles:
//! - TOML config file parsing
//! - Config discovery in the working directory and the user's home

pub mod locate;
pub mod parser;
pub mod types;

pub use locate::{discover_config, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, LoadedConfig};
