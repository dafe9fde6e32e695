use crate::error::Result;
use crate::rules::rule::TagRule;

/// Strip a trailing filename-style suffix (`.wav`, `.flac`, `.mp3`) from
/// title values.
pub fn strip_title_suffix() -> Result<TagRule> {
	TagRule::new("(?i)title")?.with_rewrite(r"^(.+)\.(wav|flac|mp3)$", r"\1")
}

/// Rewrite `", "` separators to `"; "` in artist values.
pub fn split_artist_separators() -> Result<TagRule> {
	TagRule::new("(?i)artist")?.with_rewrite(r"([^,]),\s([^,])", r"\1; \2")
}

/// Insert `album_artist = "Various Artists"` when no album-artist tag exists.
pub fn default_album_artist() -> Result<TagRule> {
	Ok(TagRule::new(r"(?i)album[_\s]?artist")?.with_default("album_artist", "Various Artists"))
}

/// Strip a leading track-number prefix (digits, optional dot, whitespace)
/// from title values.
pub fn strip_title_number() -> Result<TagRule> {
	TagRule::new("(?i)title")?.with_rewrite(r"^\d+\.?\s*(.+)$", r"\1")
}

/// All built-in rules, in application order: the filename suffix is removed
/// before the leading track number.
pub fn builtin_rules() -> Result<Vec<TagRule>> {
	Ok(vec![
		strip_title_suffix()?,
		strip_title_number()?,
		split_artist_separators()?,
		default_album_artist()?,
	])
}
