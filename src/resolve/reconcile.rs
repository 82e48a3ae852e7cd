//! Cross-catalog reconciliation between the build mirror and NuGet
//!
//! A requested version is only installable if the mirror has a build for it
//! and NuGet publishes the matching runtime. When the exact version fails
//! either check, the nearest mirror version within the same major line whose
//! NuGet key exists is chosen instead.

use tracing::{debug, warn};

use crate::catalog::version_index;
use crate::resolve::Resolution;
use crate::version::error::ResolveError;
use crate::version::normalize::{RegistryVersionSet, normalized_key};
use crate::version::sdk::Version;
use crate::version::types::RawTag;

/// Pick the build-mirror tag to install for `requested`.
///
/// The chosen tag has the same major version as `requested` and its
/// normalized key is present in `registry`. Search starts at the request's
/// insertion point and widens one step at a time; at each distance the
/// newer candidate is tried before the older one.
pub fn reconcile(
    requested: &Version,
    build_catalog: &[RawTag],
    registry: &RegistryVersionSet,
) -> Result<Resolution, ResolveError> {
    let index = version_index(build_catalog, |version| version.major == requested.major);
    if index.is_empty() {
        return Err(ResolveError::NoReleasesForMajor(requested.major));
    }

    if let Some(tag) = index.tag_for(requested) {
        if registry.contains(requested) {
            debug!("Exact version {} found in both catalogs", requested);
            return Ok(Resolution::exact(tag));
        }
        debug!(
            "{} exists on the mirror but {} is not on NuGet",
            tag,
            normalized_key(requested)
        );
    }

    let position = index.insertion_point(requested);
    for offset in 0..=index.len() {
        let above = position.checked_add(offset);
        let below = if offset == 0 {
            None
        } else {
            position.checked_sub(offset)
        };

        for candidate in [above, below].into_iter().flatten() {
            let Some((version, tag)) = index.get(candidate) else {
                continue;
            };
            if version.major != requested.major || !registry.contains(version) {
                continue;
            }

            if version == requested {
                return Ok(Resolution::exact(*tag));
            }
            warn!("Using nearest version {} for requested {}", tag, requested);
            return Ok(Resolution::approximate(*tag));
        }
    }

    Err(ResolveError::NotFound(requested.to_string()))
}
