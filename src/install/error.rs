use std::path::PathBuf;

use thiserror::Error;

use crate::version::error::RegistryError;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Unsupported architecture: {0}")]
    UnsupportedArch(String),

    #[error("No .NET SDK asset found for {arch} in release {tag}")]
    NoSdkAsset { tag: String, arch: String },

    #[error("No matching tags found")]
    NoMatchingTags,

    #[error("Tag selection aborted")]
    SelectionAborted,

    #[error("Downloaded file from {0} is HTML, not a tarball")]
    HtmlDownload(String),

    #[error("Invalid archive {path:?}: {source}")]
    InvalidArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("dotnet is not available in {0:?} or PATH")]
    DotnetNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
