//! .NET SDK version parsing and ordering
//!
//! Tags on the IBM build mirror look like:
//! - `v9.0.100` - stable release
//! - `v9.0.100-preview.7.25351.106` - stage, stage number, then build numbers
//! - `v10.0.100-rc.1` - stage directly followed by build numbers
//!
//! Any other prerelease suffix still parses, but with [`Stage::Unknown`],
//! which sorts below every recognized stage.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::version::error::ParseError;

/// `stage.number.build...`, e.g. `preview.7.25351.106`
static FULL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(alpha|preview|rc|rtm)\.([0-9]+)\.([0-9.]+)").expect("valid regex")
});

/// `stage.build...`, e.g. `rc.1`
static SHORT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(alpha|preview|rc|rtm)\.([0-9.]+)").expect("valid regex")
});

/// Prerelease maturity, ordered from least to most release-ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Unknown,
    Alpha,
    Preview,
    Rc,
    Rtm,
    Stable,
}

impl Stage {
    /// Numeric precedence: alpha=0, preview=1, rc=2, rtm=3, stable=4, unknown=-1
    pub fn priority(self) -> i32 {
        match self {
            Stage::Unknown => -1,
            Stage::Alpha => 0,
            Stage::Preview => 1,
            Stage::Rc => 2,
            Stage::Rtm => 3,
            Stage::Stable => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Unknown => "unknown",
            Stage::Alpha => "alpha",
            Stage::Preview => "preview",
            Stage::Rc => "rc",
            Stage::Rtm => "rtm",
            Stage::Stable => "stable",
        }
    }

    pub fn is_prerelease(self) -> bool {
        self != Stage::Stable
    }

    fn from_prerelease(name: &str) -> Option<Stage> {
        match name {
            "alpha" => Some(Stage::Alpha),
            "preview" => Some(Stage::Preview),
            "rc" => Some(Stage::Rc),
            "rtm" => Some(Stage::Rtm),
            _ => None,
        }
    }
}

/// A parsed SDK version.
///
/// Field order is significant: the derived ordering is lexicographic over
/// `(major, minor, patch, stage, stage_number, build)`, and `build` compares
/// element-wise with a shorter prefix sorting lower.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub stage: Stage,
    pub stage_number: u64,
    pub build: Vec<u64>,
}

impl Version {
    /// Creates a stable version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            stage: Stage::Stable,
            stage_number: 0,
            build: Vec::new(),
        }
    }

    /// Returns a copy of this version with the given prerelease stage
    pub fn with_stage(mut self, stage: Stage, stage_number: u64, build: Vec<u64>) -> Self {
        self.stage = stage;
        self.stage_number = stage_number;
        self.build = build;
        self
    }

    /// Parse a tag or version string.
    ///
    /// Leading `v` characters are stripped. The text before the first `-`
    /// must start with three numeric dot-separated components.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim_start_matches('v');
        let (base, suffix) = trimmed.split_once('-').unwrap_or((trimmed, ""));

        let mut parts = base.split('.');
        let major = parse_component(raw, parts.next(), "major")?;
        let minor = parse_component(raw, parts.next(), "minor")?;
        let patch = parse_component(raw, parts.next(), "patch")?;

        let version = Self::new(major, minor, patch);
        if suffix.is_empty() {
            return Ok(version);
        }

        // Both patterns are anchored at the start only; trailing text is ignored.
        if let Some(caps) = FULL_SUFFIX.captures(suffix) {
            let stage_number = parse_number(raw, &caps[2])?;
            let build = parse_build(raw, &caps[3])?;
            return Ok(version.with_stage(stage_of(&caps), stage_number, build));
        }
        if let Some(caps) = SHORT_SUFFIX.captures(suffix) {
            let build = parse_build(raw, &caps[2])?;
            return Ok(version.with_stage(stage_of(&caps), 0, build));
        }

        Ok(version.with_stage(Stage::Unknown, 0, Vec::new()))
    }

    /// Render with the patch component replaced, used for NuGet normalization
    pub(crate) fn render_with_patch(&self, patch: u64) -> String {
        let mut rendered = format!("{}.{}.{}", self.major, self.minor, patch);
        if self.stage.is_prerelease() {
            rendered.push('-');
            rendered.push_str(self.stage.as_str());
            rendered.push('.');
            rendered.push_str(&self.stage_number.to_string());
            for part in &self.build {
                rendered.push('.');
                rendered.push_str(&part.to_string());
            }
        }
        rendered
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders without the `v` prefix, e.g. `9.0.100-preview.7.25351.106`
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with_patch(self.patch))
    }
}

fn stage_of(caps: &Captures<'_>) -> Stage {
    Stage::from_prerelease(&caps[1]).unwrap_or(Stage::Unknown)
}

fn parse_component(
    raw: &str,
    value: Option<&str>,
    component: &'static str,
) -> Result<u64, ParseError> {
    let value = value.ok_or_else(|| ParseError::MissingComponent {
        input: raw.to_string(),
        component,
    })?;
    parse_number(raw, value)
}

fn parse_number(raw: &str, value: &str) -> Result<u64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        input: raw.to_string(),
        value: value.to_string(),
    })
}

fn parse_build(raw: &str, tail: &str) -> Result<Vec<u64>, ParseError> {
    tail.split('.').map(|part| parse_number(raw, part)).collect()
}
