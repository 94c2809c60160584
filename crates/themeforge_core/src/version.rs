//! Extension version parsing and bumping.

use std::fmt;

use crate::error::{Result, ThemeError};

/// A `MAJOR.MINOR.PATCH` extension version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component a bump increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpLevel {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpLevel {
    /// Map a user-supplied level string to a bump level.
    ///
    /// Anything other than `major` or `minor` bumps the patch component.
    pub fn parse(level: &str) -> Self {
        match level {
            "major" => BumpLevel::Major,
            "minor" => BumpLevel::Minor,
            _ => BumpLevel::Patch,
        }
    }
}

impl Version {
    /// Parse a version string. Malformed input (wrong segment count,
    /// non-numeric segment) is rejected rather than silently propagated.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = raw.split('.');
        let (Some(major), Some(minor), Some(patch), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(ThemeError::InvalidVersion(raw.to_string()));
        };

        let parse = |segment: &str| {
            segment
                .parse::<u64>()
                .map_err(|_| ThemeError::InvalidVersion(raw.to_string()))
        };

        Ok(Version {
            major: parse(major)?,
            minor: parse(minor)?,
            patch: parse(patch)?,
        })
    }

    /// The version after applying one bump.
    pub fn bumped(self, level: BumpLevel) -> Self {
        match level {
            BumpLevel::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpLevel::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpLevel::Patch => Version {
                patch: self.patch + 1,
                ..self
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
