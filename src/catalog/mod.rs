//! Tag catalog operations over the build mirror's release list
//!
//! - [`filter`]: wildcard tag filtering and descending version sort
//! - [`sorted`]: ascending, de-duplicated version index used by the resolvers

pub mod filter;
pub mod sorted;

pub use filter::{TagPattern, filter_and_sort};
pub use sorted::{VersionIndex, version_index};
