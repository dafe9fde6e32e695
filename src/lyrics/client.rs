use crate::error::{Result, RetagError};
use crate::rules::TagSet;
use serde::Deserialize;
use std::time::Duration;

const LOOKUP_URL: &str = "https://lrclib.net/api/get";

/// Query parameters for one lyrics lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsQuery {
	pub track: String,
	pub artist: String,
	pub album: String,

	/// Track duration, truncated to whole seconds.
	pub duration_secs: u64,
}

impl LyricsQuery {
	/// Build a query from a file's tag set and duration.
	///
	/// The track, artist, and album names are located case-insensitively
	/// under their conventional tag names. All three are required; the
	/// error names every missing category.
	pub fn from_tags(tags: &TagSet, duration: f64) -> Result<Self> {
		let track = find_tag(tags, "title");
		let artist = find_tag(tags, "artist");
		let album = find_tag(tags, "album");

		let mut missing = Vec::new();
		if track.is_none() {
			missing.push("track name");
		}
		if artist.is_none() {
			missing.push("artist name");
		}
		if album.is_none() {
			missing.push("album name");
		}

		match (track, artist, album) {
			(Some(track), Some(artist), Some(album)) => Ok(LyricsQuery {
				track,
				artist,
				album,
				duration_secs: duration as u64,
			}),
			_ => Err(RetagError::MissingTags { missing }),
		}
	}
}

fn find_tag(tags: &TagSet, name: &str) -> Option<String> {
	tags.iter()
		.find(|(key, _)| key.eq_ignore_ascii_case(name))
		.map(|(_, value)| value.clone())
}

/// Lyrics text with its synced/plain classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Lyrics {
	pub text: String,
	pub synced: bool,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
	#[serde(rename = "syncedLyrics")]
	synced_lyrics: Option<String>,
	#[serde(rename = "plainLyrics")]
	plain_lyrics: Option<String>,
}

/// Synced lyrics win when both fields are present; neither means not found.
fn classify(response: LookupResponse) -> Option<Lyrics> {
	if let Some(text) = response.synced_lyrics {
		return Some(Lyrics { text, synced: true });
	}
	if let Some(text) = response.plain_lyrics {
		return Some(Lyrics {
			text,
			synced: false,
		});
	}
	None
}

/// Blocking client for the lyrics lookup service.
#[derive(Clone)]
pub struct LyricsClient {
	agent: ureq::Agent,
	url: String,
}

impl Default for LyricsClient {
	fn default() -> Self {
		Self::new()
	}
}

impl LyricsClient {
	pub fn new() -> Self {
		Self::with_url(LOOKUP_URL)
	}

	/// Point the client at a different endpoint. Mainly useful for testing.
	pub fn with_url(url: impl Into<String>) -> Self {
		let agent = ureq::AgentBuilder::new()
			.timeout_connect(Duration::from_secs(5))
			.timeout_read(Duration::from_secs(10))
			.build();

		LyricsClient {
			agent,
			url: url.into(),
		}
	}

	/// Fetch lyrics for a track.
	///
	/// A 404 means the track is unknown to the service and yields
	/// `Ok(None)`; any other non-2xx status is an error.
	pub fn fetch(&self, query: &LyricsQuery) -> Result<Option<Lyrics>> {
		let response = self
			.agent
			.get(&self.url)
			.query("track_name", &query.track)
			.query("artist_name", &query.artist)
			.query("album_name", &query.album)
			.query("duration", &query.duration_secs.to_string())
			.call();

		let response = match response {
			Ok(response) => response,
			Err(ureq::Error::Status(404, _)) => return Ok(None),
			Err(ureq::Error::Status(status, _)) => {
				return Err(RetagError::LookupStatus { status });
			}
			Err(error) => {
				return Err(RetagError::LookupTransport {
					source: Box::new(error),
				});
			}
		};

		let body: LookupResponse = response
			.into_json()
			.map_err(|source| RetagError::LookupDecode { source })?;

		Ok(classify(body))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tag_set(entries: &[(&str, &str)]) -> TagSet {
		entries
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_query_from_tags_case_insensitive() {
		let tags = tag_set(&[
			("TITLE", "Song Name"),
			("Artist", "Smith"),
			("album", "Songs"),
		]);
		let query = LyricsQuery::from_tags(&tags, 185.33).unwrap();
		assert_eq!(query.track, "Song Name");
		assert_eq!(query.artist, "Smith");
		assert_eq!(query.album, "Songs");
	}

	#[test]
	fn test_query_duration_is_truncated() {
		let tags = tag_set(&[("title", "X"), ("artist", "Y"), ("album", "Z")]);
		let query = LyricsQuery::from_tags(&tags, 185.91).unwrap();
		assert_eq!(query.duration_secs, 185);
	}

	#[test]
	fn test_query_names_every_missing_category() {
		let result = LyricsQuery::from_tags(&tag_set(&[("artist", "Smith")]), 10.0);
		match result.unwrap_err() {
			RetagError::MissingTags { missing } => {
				assert_eq!(missing, vec!["track name", "album name"]);
			}
			other => panic!("Expected MissingTags error, got {other:?}"),
		}
	}

	#[test]
	fn test_classify_prefers_synced() {
		let response: LookupResponse = serde_json::from_str(
			r#"{"syncedLyrics": "[00:12.50]line", "plainLyrics": "line"}"#,
		)
		.unwrap();
		let lyrics = classify(response).unwrap();
		assert!(lyrics.synced);
		assert_eq!(lyrics.text, "[00:12.50]line");
	}

	#[test]
	fn test_classify_falls_back_to_plain() {
		let response: LookupResponse =
			serde_json::from_str(r#"{"syncedLyrics": null, "plainLyrics": "line"}"#).unwrap();
		let lyrics = classify(response).unwrap();
		assert!(!lyrics.synced);
		assert_eq!(lyrics.text, "line");
	}

	#[test]
	fn test_classify_neither_field_is_not_found() {
		let response: LookupResponse = serde_json::from_str(r#"{"instrumental": true}"#).unwrap();
		assert!(classify(response).is_none());
	}
}
