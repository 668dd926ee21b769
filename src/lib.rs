pub mod cli;
pub mod config;
pub mod fields;
pub mod version;

pub use cli::Cli;
pub use config::{ConfigError, PvConfig};
pub use fields::{Field, OutputFormat, PackageVersions, render_output};
pub use version::{ArchiveVersion, DebVersion, ParseError, ParsedVersion, RcStyle, RpmVersion};
