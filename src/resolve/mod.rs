//! Resolution of a requested tag or version to a single build-mirror tag
//!
//! - [`tag`]: exact/prefix tag lookup and single-catalog nearest version
//! - [`reconcile`]: nearest version present in both the mirror and NuGet

pub mod reconcile;
pub mod tag;

pub use reconcile::reconcile;
pub use tag::{find_nearest_by_version, resolve, resolve_by_prefix, resolve_exact};

/// A resolved tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tag: String,
    /// True when the tag only approximates the request (prefix or nearest-version match)
    pub approximate: bool,
}

impl Resolution {
    pub fn exact(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            approximate: false,
        }
    }

    pub fn approximate(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            approximate: true,
        }
    }
}
