use crate::rules::rule::{TagRule, TagSet};

/// Apply an ordered rule sequence to a tag set.
///
/// Each rule sees the tag set as modified by all prior rules, so order
/// matters: a rule's "was this tag missing" default check is evaluated
/// against the working state, not the original input. The input is never
/// mutated; the result is a new tag set.
pub fn run(tags: &TagSet, rules: &[TagRule]) -> TagSet {
	let mut working = tags.clone();
	for rule in rules {
		working = rule.process_tag_set(&working);
	}
	working
}

/// Whether the pipeline produced a different tag set than its input.
pub fn changed(before: &TagSet, after: &TagSet) -> bool {
	before != after
}
