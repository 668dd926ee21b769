//! Named output variables consumed by packaging scripts.
//!
//! Every derived value has a shell-friendly `KEY` (e.g. `RPM_FULL_VERSION`).
//! The full set prints either as `KEY=value` lines, suitable for `eval` or
//! `source`, or as a single JSON object with the same keys.

use crate::version::{ParsedVersion, RcStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single derived variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Field {
    #[value(name = "RPM_VERSION")]
    RpmVersion,
    #[value(name = "RPM_RELEASE")]
    RpmRelease,
    #[value(name = "RPM_EXTRAVER")]
    RpmExtraVer,
    #[value(name = "RPM_FULL_VERSION")]
    RpmFullVersion,
    #[value(name = "DEB_VERSION")]
    DebVersion,
    #[value(name = "DEB_REVISION")]
    DebRevision,
    #[value(name = "DEB_FULL_VERSION")]
    DebFullVersion,
    #[value(name = "TAR_FULL_VERSION")]
    TarFullVersion,
    #[value(name = "ZIP_FULL_VERSION")]
    ZipFullVersion,
}

impl Field {
    /// All fields in output order
    pub const ALL: [Field; 9] = [
        Field::RpmVersion,
        Field::RpmRelease,
        Field::RpmExtraVer,
        Field::RpmFullVersion,
        Field::DebVersion,
        Field::DebRevision,
        Field::DebFullVersion,
        Field::TarFullVersion,
        Field::ZipFullVersion,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::RpmVersion => "RPM_VERSION",
            Field::RpmRelease => "RPM_RELEASE",
            Field::RpmExtraVer => "RPM_EXTRAVER",
            Field::RpmFullVersion => "RPM_FULL_VERSION",
            Field::DebVersion => "DEB_VERSION",
            Field::DebRevision => "DEB_REVISION",
            Field::DebFullVersion => "DEB_FULL_VERSION",
            Field::TarFullVersion => "TAR_FULL_VERSION",
            Field::ZipFullVersion => "ZIP_FULL_VERSION",
        }
    }

    pub fn value(&self, parsed: &ParsedVersion, rc_style: RcStyle) -> String {
        let rpm = parsed.rpm(rc_style);
        let deb = parsed.deb();
        match self {
            Field::RpmVersion => rpm.version().to_string(),
            Field::RpmRelease => rpm.release(),
            Field::RpmExtraVer => rpm.extra_version().to_string(),
            Field::RpmFullVersion => rpm.full_version(),
            Field::DebVersion => deb.version(),
            Field::DebRevision => deb.revision().to_string(),
            Field::DebFullVersion => deb.full_version(),
            Field::TarFullVersion | Field::ZipFullVersion => parsed.archive().full_version(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How the full set of fields is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `KEY=value` lines
    #[default]
    Env,
    /// A single JSON object
    Json,
}

/// Every derived value for one input, in output order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PackageVersions {
    pub rpm_version: String,
    pub rpm_release: String,
    pub rpm_extraver: String,
    pub rpm_full_version: String,
    pub deb_version: String,
    pub deb_revision: String,
    pub deb_full_version: String,
    pub tar_full_version: String,
    pub zip_full_version: String,
}

impl PackageVersions {
    pub fn new(parsed: &ParsedVersion, rc_style: RcStyle) -> Self {
        let get = |field: Field| field.value(parsed, rc_style);
        Self {
            rpm_version: get(Field::RpmVersion),
            rpm_release: get(Field::RpmRelease),
            rpm_extraver: get(Field::RpmExtraVer),
            rpm_full_version: get(Field::RpmFullVersion),
            deb_version: get(Field::DebVersion),
            deb_revision: get(Field::DebRevision),
            deb_full_version: get(Field::DebFullVersion),
            tar_full_version: get(Field::TarFullVersion),
            zip_full_version: get(Field::ZipFullVersion),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RpmVersion => &self.rpm_version,
            Field::RpmRelease => &self.rpm_release,
            Field::RpmExtraVer => &self.rpm_extraver,
            Field::RpmFullVersion => &self.rpm_full_version,
            Field::DebVersion => &self.deb_version,
            Field::DebRevision => &self.deb_revision,
            Field::DebFullVersion => &self.deb_full_version,
            Field::TarFullVersion => &self.tar_full_version,
            Field::ZipFullVersion => &self.zip_full_version,
        }
    }

    /// `KEY=value` lines, one per field, newline-terminated
    pub fn to_env(&self) -> String {
        Field::ALL
            .iter()
            .map(|field| format!("{}={}\n", field.key(), self.get(*field)))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Env => Ok(self.to_env()),
            OutputFormat::Json => self.to_json().map(|json| json + "\n"),
        }
    }
}

/// Output for one invocation: a single variable's value, or every field
pub fn render_output(
    parsed: &ParsedVersion,
    variable: Option<Field>,
    rc_style: RcStyle,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match variable {
        Some(field) => Ok(format!("{}\n", field.value(parsed, rc_style))),
        None => PackageVersions::new(parsed, rc_style).render(format),
    }
}
