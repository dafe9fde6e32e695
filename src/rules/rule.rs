use crate::error::{Result, RetagError};
use indexmap::IndexMap;
use regex::Regex;

/// A media file's metadata: tag name to tag value, in discovery order.
///
/// Keys are case-sensitive and unique. Iteration order is the insertion
/// order, so pipeline output is deterministic for a given input.
pub type TagSet = IndexMap<String, String>;

/// A value rewrite: global pattern substitution with a replacement template.
#[derive(Debug, Clone)]
struct Rewrite {
	pattern: Regex,
	template: String,
}

/// One atomic tag-editing policy.
///
/// A rule selects tags whose name fully matches `selector`, optionally
/// rewrites the values of every selected tag, and optionally inserts a
/// default tag when the selector matched nothing at all.
#[derive(Debug, Clone)]
pub struct TagRule {
	selector: Regex,
	rewrite: Option<Rewrite>,
	default: Option<(String, String)>,
}

impl TagRule {
	/// Create a rule with the given selector and no rewrite or default.
	///
	/// The selector is compiled for full-string matching: `title` matches
	/// the tag name `title` but not `album_title`.
	pub fn new(selector: &str) -> Result<Self> {
		Ok(TagRule {
			selector: compile_fullmatch(selector)?,
			rewrite: None,
			default: None,
		})
	}

	/// Add a value rewrite to this rule.
	///
	/// `pattern` is matched anywhere in the value; every non-overlapping
	/// match is replaced. The template may reference capture groups with
	/// `\1`, `\2`, and so on.
	pub fn with_rewrite(mut self, pattern: &str, template: &str) -> Result<Self> {
		let pattern = Regex::new(pattern).map_err(|source| RetagError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})?;
		self.rewrite = Some(Rewrite {
			pattern,
			template: translate_template(template),
		});
		Ok(self)
	}

	/// Add a default tag, inserted only when the selector matches no tag name.
	pub fn with_default(mut self, key: &str, value: &str) -> Self {
		self.default = Some((key.to_string(), value.to_string()));
		self
	}

	/// Full-string match of the selector against a tag name.
	pub fn matches(&self, tag_name: &str) -> bool {
		self.selector.is_match(tag_name)
	}

	/// Rewrite a tag value. Without a configured rewrite this is the identity.
	pub fn apply(&self, tag_value: &str) -> String {
		match &self.rewrite {
			Some(rewrite) => rewrite
				.pattern
				.replace_all(tag_value, rewrite.template.as_str())
				.into_owned(),
			None => tag_value.to_string(),
		}
	}

	/// Apply this rule to a whole tag set, producing a new tag set.
	///
	/// Every entry whose key matches the selector has its value rewritten;
	/// all other entries pass through unchanged. The default, if configured,
	/// is inserted only when no key of the input matched the selector. The
	/// default overwrites a coincidentally colliding key: the selector test
	/// decides ownership, not key identity.
	pub fn process_tag_set(&self, tags: &TagSet) -> TagSet {
		let mut result = TagSet::with_capacity(tags.len());
		let mut matched_any = false;

		for (name, value) in tags {
			if self.matches(name) {
				matched_any = true;
				result.insert(name.clone(), self.apply(value));
			} else {
				result.insert(name.clone(), value.clone());
			}
		}

		if !matched_any
			&& let Some((key, value)) = &self.default
		{
			result.insert(key.clone(), value.clone());
		}

		result
	}
}

/// Compile a pattern anchored for full-string matching.
fn compile_fullmatch(pattern: &str) -> Result<Regex> {
	Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| RetagError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

/// Translate `\1`-style back-references into the substitution syntax the
/// regex engine expands, and neutralize characters it would otherwise
/// interpret. `\\` becomes a literal backslash; any other escape is kept
/// verbatim.
fn translate_template(template: &str) -> String {
	let mut out = String::with_capacity(template.len());
	let mut chars = template.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			'$' => out.push_str("$$"),
			'\\' => match chars.peek() {
				Some(d) if d.is_ascii_digit() => {
					let mut group = String::new();
					while let Some(&d) = chars.peek() {
						if !d.is_ascii_digit() {
							break;
						}
						group.push(d);
						chars.next();
					}
					out.push_str("${");
					out.push_str(&group);
					out.push('}');
				}
				Some(&'\\') => {
					out.push('\\');
					chars.next();
				}
				_ => out.push('\\'),
			},
			c => out.push(c),
		}
	}

	out
}
