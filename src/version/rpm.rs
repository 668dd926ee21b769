use super::ParsedVersion;
use serde::Deserialize;

/// How a release candidate is expressed in the RPM release field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RcStyle {
    /// `1.14.0-rc2` → release `0.2`, full version `1.14.0-0.2.rc2`
    #[default]
    Numbered,
    /// `1.14.0-rc2` → release `0`, full version `1.14.0-0.rc2`
    Simple,
}

/// RPM view of a parsed version (Version, Release and the combined full version)
#[derive(Debug, Clone, Copy)]
pub struct RpmVersion<'a> {
    parsed: &'a ParsedVersion,
    rc_style: RcStyle,
}

impl<'a> RpmVersion<'a> {
    pub fn new(parsed: &'a ParsedVersion, rc_style: RcStyle) -> Self {
        Self { parsed, rc_style }
    }

    pub fn version(&self) -> &'a str {
        self.parsed.version()
    }

    pub fn release(&self) -> String {
        match self.parsed {
            ParsedVersion::Nightly | ParsedVersion::Snapshot { .. } => "0".to_string(),
            ParsedVersion::Release { .. } => "1".to_string(),
            ParsedVersion::ReleaseCandidate { label, .. } => match self.rc_style {
                RcStyle::Numbered => match rc_number(label) {
                    Some(n) => format!("0.{}", n),
                    None => "0".to_string(),
                },
                RcStyle::Simple => "0".to_string(),
            },
        }
    }

    /// Content hash if present, otherwise the rc label, otherwise empty
    pub fn extra_version(&self) -> &'a str {
        self.parsed
            .content_hash()
            .or_else(|| self.parsed.release_candidate())
            .unwrap_or("")
    }

    pub fn full_version(&self) -> String {
        match self.parsed {
            ParsedVersion::Nightly => self.version().to_string(),
            ParsedVersion::Release { version } => format!("{}-{}", version, self.release()),
            ParsedVersion::ReleaseCandidate { version, label } => {
                format!("{}-{}.{}", version, self.release(), label)
            }
            ParsedVersion::Snapshot { version, hash } => {
                format!("{}~{}-{}", version, hash, self.release())
            }
        }
    }
}

/// Trailing digit run of a release candidate label (`rc12` → `12`)
fn rc_number(label: &str) -> Option<&str> {
    let start = label.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &label[start..];
    (!digits.is_empty()).then_some(digits)
}
