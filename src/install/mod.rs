//! Installation collaborators: everything that happens after a tag is chosen
//!
//! - [`arch`]: supported IBM architectures
//! - [`asset`]: SDK tarball selection from release assets
//! - [`download`]: HTTP download of the tarball
//! - [`extract`]: gzip+tar extraction into the install directory
//! - [`profile`]: shell profile script and post-install verification
//! - [`prompt`]: interactive tag selection
//! - [`error`]: installer error type

pub mod arch;
pub mod asset;
pub mod download;
pub mod error;
pub mod extract;
pub mod profile;
pub mod prompt;

pub use arch::Arch;
pub use error::InstallError;
