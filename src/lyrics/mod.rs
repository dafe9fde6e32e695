//! Lyrics lookup and storage for the lyrfetch companion tool.
//!
//! This module handles:
//! - The blocking HTTP lookup against the lrclib service
//! - Building queries from a file's tag set
//! - Writing sidecar files or embedding lyrics through the media mutator

pub mod client;
pub mod fetcher;
pub mod store;

pub use client::{Lyrics, LyricsClient, LyricsQuery};
pub use fetcher::{FetchOutcome, FetchReport, LyricsFetcher};
pub use store::{embed_lyrics, sidecar_path, write_sidecar};
