use crate::error::{Result, VersionError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").expect("tag pattern is valid"))
}

/// Level of a version component, used both for formatting and bumping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Granularity {
    Major,
    Minor,
    Patch,
}

/// Numeric version held by a `vMAJOR.MINOR.PATCH` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TagVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl TagVersion {
    /// Create a new tag version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        TagVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag of the exact form `v<uint>.<uint>.<uint>`
    ///
    /// There is no fallback: anything else is a [`VersionError::MalformedTag`].
    /// That includes components that could not be incremented, i.e. those not
    /// strictly below `u64::MAX`.
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = tag_pattern()
            .captures(tag)
            .ok_or_else(|| VersionError::malformed_tag(tag))?;

        let component = |idx: usize| -> Result<u64> {
            caps[idx]
                .parse::<u64>()
                .ok()
                .filter(|n| *n < u64::MAX)
                .ok_or_else(|| VersionError::malformed_tag(tag))
        };

        Ok(TagVersion {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Increment one component and reset every lower one to zero
    pub fn bump(&mut self, level: Granularity) {
        match level {
            Granularity::Major => {
                self.major += 1;
                self.minor = 0;
                self.patch = 0;
            }
            Granularity::Minor => {
                self.minor += 1;
                self.patch = 0;
            }
            Granularity::Patch => {
                self.patch += 1;
            }
        }
    }

    /// Render as `v`-prefixed string truncated at `level`
    pub fn render(&self, level: Granularity) -> String {
        match level {
            Granularity::Major => format!("v{}", self.major),
            Granularity::Minor => format!("v{}.{}", self.major, self.minor),
            Granularity::Patch => self.to_string(),
        }
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
