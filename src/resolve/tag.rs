//! Tag lookup within the build mirror's catalog

use tracing::{debug, warn};

use crate::catalog::version_index;
use crate::resolve::Resolution;
use crate::version::error::ResolveError;
use crate::version::sdk::Version;
use crate::version::types::RawTag;

/// Tag whose name equals `candidate` verbatim
pub fn resolve_exact(candidate: &str, tags: &[RawTag]) -> Result<String, ResolveError> {
    tags.iter()
        .find(|tag| tag.tag_name == candidate)
        .map(|tag| tag.tag_name.clone())
        .ok_or_else(|| ResolveError::NotFound(candidate.to_string()))
}

/// Highest-versioned tag whose name starts with `candidate` (literal, no wildcards).
///
/// Tags that do not parse are ignored; on equal versions the earliest tag wins.
pub fn resolve_by_prefix(candidate: &str, tags: &[RawTag]) -> Result<String, ResolveError> {
    let mut best: Option<(Version, &RawTag)> = None;

    for tag in tags.iter().filter(|tag| tag.tag_name.starts_with(candidate)) {
        let Some(version) = tag.version() else {
            debug!("Skipping unparseable tag {}", tag.tag_name);
            continue;
        };
        if best.as_ref().is_none_or(|(current, _)| version > *current) {
            best = Some((version, tag));
        }
    }

    best.map(|(_, tag)| tag.tag_name.clone())
        .ok_or_else(|| ResolveError::NotFound(candidate.to_string()))
}

/// Exact tag match, falling back to the newest prefix match
pub fn resolve(candidate: &str, tags: &[RawTag]) -> Result<Resolution, ResolveError> {
    if candidate.is_empty() {
        return Err(ResolveError::NotFound(candidate.to_string()));
    }

    if let Ok(tag) = resolve_exact(candidate, tags) {
        return Ok(Resolution::exact(tag));
    }

    let tag = resolve_by_prefix(candidate, tags)?;
    warn!("Exact tag {} not found, using nearest match {}", candidate, tag);
    Ok(Resolution::approximate(tag))
}

/// Tag for `target`, or the closest version below it, or else the closest above it.
///
/// Fails if `target` does not parse or no tag in the catalog parses.
pub fn find_nearest_by_version(tags: &[RawTag], target: &str) -> Result<String, ResolveError> {
    let target_version = Version::parse(target)?;
    let index = version_index(tags, |_| true);

    if let Some(tag) = index.tag_for(&target_version) {
        return Ok(tag.to_string());
    }

    let position = index.insertion_point(&target_version);
    let nearest = position
        .checked_sub(1)
        .and_then(|below| index.get(below))
        .or_else(|| index.get(position));

    match nearest {
        Some((_, tag)) => {
            debug!("Nearest version to {} is {}", target, tag);
            Ok(tag.to_string())
        }
        None => Err(ResolveError::NotFound(target.to_string())),
    }
}
