use crate::error::{Result, RetagError};
use crate::rules::rule::TagRule;

/// Parse one textual rule definition.
///
/// The syntax is `SELECTOR[/r:PATTERN/REPLACEMENT][/m:KEY/VALUE]/` where
/// every field excludes unescaped `/` and `\/` denotes a literal `/`. The
/// `r:` group configures a value rewrite, the `m:` group a default tag;
/// either, both, or neither may be present. The whole string must match,
/// including the trailing `/`.
pub fn parse_rule(text: &str) -> Result<TagRule> {
	let fail = |reason: &str| RetagError::RuleFormat {
		text: text.to_string(),
		reason: reason.to_string(),
	};

	if text.is_empty() {
		return Err(fail("empty rule"));
	}

	let segments = split_segments(text);

	// A well-formed rule ends with an unescaped `/`, which leaves an empty
	// terminator segment.
	if segments.len() < 2 || !segments[segments.len() - 1].is_empty() {
		return Err(fail("missing trailing `/`"));
	}

	let selector = &segments[0];
	if selector.is_empty() {
		return Err(fail("empty selector"));
	}
	let mut rule = TagRule::new(selector)?;
	let mut index = 1;

	if let Some(pattern) = segments[index].strip_prefix("r:") {
		if index + 2 > segments.len() - 1 {
			return Err(fail("rewrite group needs a pattern and a replacement"));
		}
		let replacement = &segments[index + 1];
		if pattern.is_empty() || replacement.is_empty() {
			return Err(fail("rewrite fields must be non-empty"));
		}
		rule = rule.with_rewrite(pattern, replacement)?;
		index += 2;
	}

	if index < segments.len() - 1
		&& let Some(key) = segments[index].strip_prefix("m:")
	{
		if index + 2 > segments.len() - 1 {
			return Err(fail("default group needs a key and a value"));
		}
		let value = &segments[index + 1];
		if key.is_empty() || value.is_empty() {
			return Err(fail("default fields must be non-empty"));
		}
		rule = rule.with_default(key, value);
		index += 2;
	}

	if index != segments.len() - 1 {
		return Err(fail("unrecognized trailing segments"));
	}

	Ok(rule)
}

/// Parse a sequence of textual rule definitions, preserving order.
pub fn parse_rules<S: AsRef<str>>(texts: &[S]) -> Result<Vec<TagRule>> {
	texts.iter().map(|text| parse_rule(text.as_ref())).collect()
}

/// Split on unescaped `/`, unescaping `\/` to a literal `/` as we go.
/// A backslash before any other character is kept verbatim.
fn split_segments(input: &str) -> Vec<String> {
	let mut segments = Vec::new();
	let mut current = String::new();
	let mut chars = input.chars().peekable();

	while let Some(c) = chars.next() {
		if c == '\\' && chars.peek() == Some(&'/') {
			current.push('/');
			chars.next();
		} else if c == '/' {
			segments.push(current);
			current = String::new();
		} else {
			current.push(c);
		}
	}

	segments.push(current);
	segments
}
