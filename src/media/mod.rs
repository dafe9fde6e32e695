//! Boundaries to the external media tools.
//!
//! This module handles:
//! - Reading tags and duration through the media inspector process
//! - Writing new files with replaced metadata through the media mutator

pub mod inspector;
pub mod mutator;

pub use inspector::{MediaInfo, MediaInspector};
pub use mutator::MediaMutator;
