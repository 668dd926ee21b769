use super::ParsedVersion;

/// Debian view of a parsed version (upstream version and revision)
#[derive(Debug, Clone, Copy)]
pub struct DebVersion<'a> {
    parsed: &'a ParsedVersion,
}

impl<'a> DebVersion<'a> {
    pub fn new(parsed: &'a ParsedVersion) -> Self {
        Self { parsed }
    }

    /// Pre-releases and snapshots use `~` so they sort before the final release
    pub fn version(&self) -> String {
        match self.parsed {
            ParsedVersion::Nightly => self.parsed.version().to_string(),
            ParsedVersion::Release { version } => version.clone(),
            ParsedVersion::ReleaseCandidate { version, label: suffix }
            | ParsedVersion::Snapshot {
                version,
                hash: suffix,
            } => format!("{}~{}", version, suffix),
        }
    }

    pub fn revision(&self) -> &'static str {
        match self.parsed {
            ParsedVersion::Nightly | ParsedVersion::Snapshot { .. } => "0",
            ParsedVersion::Release { .. } | ParsedVersion::ReleaseCandidate { .. } => "1",
        }
    }

    pub fn full_version(&self) -> String {
        if self.parsed.is_nightly() {
            return self.version();
        }
        format!("{}-{}", self.version(), self.revision())
    }
}
