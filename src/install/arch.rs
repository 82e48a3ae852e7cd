//! Supported IBM architectures

use std::fmt;
use std::str::FromStr;

use crate::install::error::InstallError;

/// Architectures the IBM build mirror publishes SDKs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    S390x,
    Ppc64le,
}

impl Arch {
    /// Name as it appears in SDK asset file names
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::S390x => "s390x",
            Arch::Ppc64le => "ppc64le",
        }
    }

    /// Architecture of the running binary
    pub fn detect() -> Result<Self, InstallError> {
        let little_endian = cfg!(target_endian = "little");
        Self::from_target(std::env::consts::ARCH, little_endian)
    }

    fn from_target(arch: &str, little_endian: bool) -> Result<Self, InstallError> {
        match (arch, little_endian) {
            ("s390x", _) => Ok(Arch::S390x),
            ("powerpc64", true) => Ok(Arch::Ppc64le),
            (other, _) => Err(InstallError::UnsupportedArch(other.to_string())),
        }
    }
}

impl FromStr for Arch {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s390x" => Ok(Arch::S390x),
            "ppc64le" => Ok(Arch::Ppc64le),
            other => Err(InstallError::UnsupportedArch(other.to_string())),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
