use crate::fields::{Field, OutputFormat};
use crate::version::RcStyle;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pv")]
#[command(
    author,
    version,
    about = "Derive RPM, Debian and archive version strings from an upstream version"
)]
pub struct Cli {
    /// Upstream version: 1.2.3, v1.2.3, 1.2.3-rc1, 1.2.3~<hash> or nightly
    #[arg(value_name = "VERSION")]
    pub input: String,

    /// Print only this variable (e.g. RPM_FULL_VERSION); prints all when omitted
    #[arg(value_enum, ignore_case = true)]
    pub variable: Option<Field>,

    /// RPM release rule for release candidates
    #[arg(long, value_enum, value_name = "STYLE")]
    pub rc_style: Option<RcStyle>,

    /// Output format when printing all variables
    #[arg(short = 'f', long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to config file (default: auto-discover pv.toml or .pvrc.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (written to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
