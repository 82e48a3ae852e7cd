//! Tag filtering with `*` wildcards
//!
//! A filter like `9.0` or `v9.*` is matched case-insensitively anywhere in
//! the tag name. Every character is literal except `*`, which matches any
//! substring (including the empty one).

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::version::sdk::Version;
use crate::version::types::RawTag;

/// Compiled wildcard filter for tag names
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Compile a user filter. One leading `v` is dropped so `v9` and `9` behave the same.
    pub fn new(filter: &str) -> Result<Self, regex::Error> {
        let filter = filter.strip_prefix('v').unwrap_or(filter);
        let body = filter
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = RegexBuilder::new(&format!("v?{}", body))
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    /// Unanchored search anywhere in the tag name
    pub fn is_match(&self, tag_name: &str) -> bool {
        self.regex.is_match(tag_name)
    }
}

/// Filter tags by an optional wildcard prefix and sort them newest first.
///
/// Tags with empty names or names that do not parse as versions are dropped.
/// Tags with equal versions keep their catalog order.
pub fn filter_and_sort<'a>(tags: &'a [RawTag], prefix: Option<&str>) -> Vec<&'a RawTag> {
    let pattern = match prefix.filter(|p| !p.is_empty()).map(TagPattern::new).transpose() {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("Ignoring tags for unusable filter {:?}: {}", prefix, e);
            return Vec::new();
        }
    };

    let mut matched: Vec<(Version, &RawTag)> = tags
        .iter()
        .filter(|tag| !tag.tag_name.is_empty())
        .filter(|tag| {
            pattern
                .as_ref()
                .is_none_or(|pattern| pattern.is_match(&tag.tag_name))
        })
        .filter_map(|tag| tag.version().map(|version| (version, tag)))
        .collect();

    matched.sort_by(|(a, _), (b, _)| b.cmp(a));
    matched.into_iter().map(|(_, tag)| tag).collect()
}
