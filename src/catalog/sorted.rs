//! Ascending version index over a tag catalog

use crate::version::sdk::Version;
use crate::version::types::RawTag;

/// Parsed versions sorted ascending, each paired with the tag name it came from.
///
/// Unparseable tags are skipped. When several tags parse to the same version,
/// only the first one in catalog order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionIndex<'a> {
    entries: Vec<(Version, &'a str)>,
}

/// Build a [`VersionIndex`] from the tags whose version satisfies `keep`
pub fn version_index<'a, F>(tags: &'a [RawTag], keep: F) -> VersionIndex<'a>
where
    F: Fn(&Version) -> bool,
{
    let mut entries: Vec<(Version, &str)> = tags
        .iter()
        .filter_map(|tag| tag.version().map(|version| (version, tag.tag_name.as_str())))
        .filter(|(version, _)| keep(version))
        .collect();

    // Stable sort, so dedup keeps the earliest tag of each version
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.dedup_by(|(later, _), (earlier, _)| later == earlier);

    VersionIndex { entries }
}

impl<'a> VersionIndex<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&(Version, &'a str)> {
        self.entries.get(index)
    }

    /// Index of the first entry not less than `target` (bisect-left)
    pub fn insertion_point(&self, target: &Version) -> usize {
        self.entries.partition_point(|(version, _)| version < target)
    }

    /// Tag name for an exact version, if present
    pub fn tag_for(&self, target: &Version) -> Option<&'a str> {
        let index = self.insertion_point(target);
        self.entries
            .get(index)
            .filter(|(version, _)| version == target)
            .map(|(_, name)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Version, &'a str)> {
        self.entries.iter()
    }
}
