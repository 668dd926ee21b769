use super::{DebVersion, ParsedVersion};

/// Version used in tarball and zip file names.
///
/// Archives carry no packaging revision, so this is the Debian version
/// without the trailing `-{revision}`.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveVersion<'a> {
    parsed: &'a ParsedVersion,
}

impl<'a> ArchiveVersion<'a> {
    pub fn new(parsed: &'a ParsedVersion) -> Self {
        Self { parsed }
    }

    pub fn full_version(&self) -> String {
        DebVersion::new(self.parsed).version()
    }
}
