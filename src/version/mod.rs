pub mod archive;
pub mod deb;
pub mod rpm;

pub use archive::ArchiveVersion;
pub use deb::DebVersion;
pub use rpm::{RcStyle, RpmVersion};

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Sentinel for rolling development builds
pub const NIGHTLY: &str = "nightly";

// Captures: 1=dotted version, 2=release candidate label, 3=content hash.
// Labels and hashes are ASCII word characters only.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?([^.]+\.[^.]+\.[^-~]+)(?:-([A-Za-z0-9_]+)|~([A-Za-z0-9_]+))?$")
        .expect("Invalid version regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("could not parse version: {input}")]
    InvalidVersion { input: String },
}

/// An upstream version identifier, classified by build kind.
///
/// Accepted forms:
/// - `1.14.4` or `v1.14.4` → [`ParsedVersion::Release`]
/// - `1.14.0-rc1` → [`ParsedVersion::ReleaseCandidate`]
/// - `1.15.0~d14b18f1` → [`ParsedVersion::Snapshot`]
/// - `nightly` → [`ParsedVersion::Nightly`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVersion {
    Nightly,
    Release { version: String },
    ReleaseCandidate { version: String, label: String },
    Snapshot { version: String, hash: String },
}

impl ParsedVersion {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed == NIGHTLY {
            return Ok(Self::Nightly);
        }

        let caps = VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| ParseError::InvalidVersion {
                input: input.to_string(),
            })?;

        let version = caps[1].to_string();
        let parsed = match (caps.get(2), caps.get(3)) {
            (Some(label), _) => Self::ReleaseCandidate {
                version,
                label: label.as_str().to_string(),
            },
            (None, Some(hash)) => Self::Snapshot {
                version,
                hash: hash.as_str().to_string(),
            },
            (None, None) => Self::Release { version },
        };

        Ok(parsed)
    }

    /// Numeric version, or `nightly` for the sentinel
    pub fn version(&self) -> &str {
        match self {
            Self::Nightly => NIGHTLY,
            Self::Release { version }
            | Self::ReleaseCandidate { version, .. }
            | Self::Snapshot { version, .. } => version,
        }
    }

    pub fn release_candidate(&self) -> Option<&str> {
        match self {
            Self::ReleaseCandidate { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn content_hash(&self) -> Option<&str> {
        match self {
            Self::Snapshot { hash, .. } => Some(hash),
            _ => None,
        }
    }

    pub fn is_nightly(&self) -> bool {
        matches!(self, Self::Nightly)
    }

    /// Short human-readable name of the build kind, used in verbose output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nightly => "nightly",
            Self::Release { .. } => "release",
            Self::ReleaseCandidate { .. } => "release candidate",
            Self::Snapshot { .. } => "snapshot",
        }
    }

    pub fn rpm(&self, rc_style: RcStyle) -> RpmVersion<'_> {
        RpmVersion::new(self, rc_style)
    }

    pub fn deb(&self) -> DebVersion<'_> {
        DebVersion::new(self)
    }

    pub fn archive(&self) -> ArchiveVersion<'_> {
        ArchiveVersion::new(self)
    }
}

impl FromStr for ParsedVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nightly => f.write_str(NIGHTLY),
            Self::Release { version } => f.write_str(version),
            Self::ReleaseCandidate { version, label } => write!(f, "{}-{}", version, label),
            Self::Snapshot { version, hash } => write!(f, "{}~{}", version, hash),
        }
    }
}
