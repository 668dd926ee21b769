use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pv::cli::Cli;
use pv::config::PvConfig;
use pv::fields::render_output;
use pv::version::ParsedVersion;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let cwd = std::env::current_dir().ok();
    let code = run(
        std::env::args_os(),
        cwd.as_deref(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}

/// Parse arguments, print the requested fields and return the exit status.
///
/// `cwd` is where config discovery starts; `None` skips discovery.
fn run<I, T>(args: I, cwd: Option<&Path>, stdout: &mut dyn Write, stderr: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => {
            let _ = write!(stdout, "{}", e.render());
            return EXIT_SUCCESS;
        }
        // Usage errors exit 1 like every other failure, not clap's 2
        Err(e) => {
            let _ = write!(stderr, "{}", e.render());
            return EXIT_FAILURE;
        }
    };

    // Handle no-color flag
    if cli.no_color {
        colored::control::set_override(false);
    }

    match execute(&cli, cwd, stdout, stderr) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let _ = writeln!(stderr, "{} {:#}", "Error:".red(), e);
            EXIT_FAILURE
        }
    }
}

fn execute(
    cli: &Cli,
    cwd: Option<&Path>,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let config = load_config(cli, cwd, stderr)?;

    let parsed = ParsedVersion::parse(&cli.input)?;
    if cli.verbose {
        writeln!(
            stderr,
            "{}",
            format!("Parsed {} as {} ({})", cli.input.trim(), parsed.kind(), parsed).cyan()
        )?;
    }

    let rc_style = config.rc_style(cli.rc_style);
    let format = config.format(cli.format);
    write!(
        stdout,
        "{}",
        render_output(&parsed, cli.variable, rc_style, format)?
    )?;

    Ok(())
}

fn load_config(cli: &Cli, cwd: Option<&Path>, stderr: &mut dyn Write) -> Result<PvConfig> {
    let (config, source): (PvConfig, Option<PathBuf>) = match (&cli.config, cwd) {
        (Some(path), _) => (
            PvConfig::load_from_path_with_error(path)?,
            Some(path.clone()),
        ),
        (None, Some(dir)) => match PvConfig::discover(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (PvConfig::default(), None),
        },
        (None, None) => (PvConfig::default(), None),
    };

    if cli.verbose {
        match source {
            Some(path) if config.has_config() => writeln!(
                stderr,
                "{}",
                format!("Using config: {}", path.display()).cyan()
            )?,
            Some(path) => writeln!(
                stderr,
                "{}",
                format!("Config {} sets nothing, using defaults", path.display()).dimmed()
            )?,
            None => writeln!(
                stderr,
                "{}",
                "No config file found, using defaults".dimmed()
            )?,
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Outcome {
        code: u8,
        stdout: String,
        stderr: String,
    }

    fn run_in(dir: &Path, args: &[&str]) -> Outcome {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let argv = std::iter::once("pv").chain(args.iter().copied());
        let code = run(argv, Some(dir), &mut stdout, &mut stderr);
        Outcome {
            code,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    #[test]
    fn test_single_variable_exits_zero() {
        let temp_dir = TempDir::new().unwrap();
        let out = run_in(temp_dir.path(), &["v1.14.0-rc1", "RPM_FULL_VERSION"]);
        assert_eq!(out.code, 0);
        assert_eq!(out.stdout, "1.14.0-0.1.rc1\n");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_all_variables_exits_zero() {
        let temp_dir = TempDir::new().unwrap();
        let out = run_in(temp_dir.path(), &["1.15.0~d14b18f1"]);
        assert_eq!(out.code, 0);
        assert!(out.stdout.starts_with("RPM_VERSION=1.15.0\n"));
        assert!(out.stdout.contains("DEB_FULL_VERSION=1.15.0~d14b18f1-0\n"));
    }

    #[test]
    fn test_parse_failure_exits_one() {
        let temp_dir = TempDir::new().unwrap();
        let out = run_in(temp_dir.path(), &["garbage"]);
        assert_eq!(out.code, 1);
        assert!(out.stdout.is_empty());
        assert!(out.stderr.contains("could not parse version: garbage"));
    }

    #[test]
    fn test_usage_errors_exit_one() {
        let temp_dir = TempDir::new().unwrap();

        let out = run_in(temp_dir.path(), &[]);
        assert_eq!(out.code, 1);
        assert!(!out.stderr.is_empty());

        let out = run_in(temp_dir.path(), &["1.0.0", "RPM_VERSION", "extra"]);
        assert_eq!(out.code, 1);

        let out = run_in(temp_dir.path(), &["1.0.0", "RPM_EPOCH"]);
        assert_eq!(out.code, 1);
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let temp_dir = TempDir::new().unwrap();

        let out = run_in(temp_dir.path(), &["--help"]);
        assert_eq!(out.code, 0);
        assert!(out.stdout.contains("Usage"));
        assert!(out.stderr.is_empty());

        let out = run_in(temp_dir.path(), &["--version"]);
        assert_eq!(out.code, 0);
        assert!(out.stdout.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_discovered_config_applies() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pv.toml"), "rc_style = \"simple\"\n").unwrap();

        let out = run_in(temp_dir.path(), &["1.14.0-rc2", "RPM_RELEASE"]);
        assert_eq!(out.code, 0);
        assert_eq!(out.stdout, "0\n");

        // Flag overrides the file
        let out = run_in(
            temp_dir.path(),
            &["--rc-style", "numbered", "1.14.0-rc2", "RPM_RELEASE"],
        );
        assert_eq!(out.stdout, "0.2\n");
    }

    #[test]
    fn test_invalid_discovered_config_exits_one() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pv.toml"), "rc_style = \"simpel\"\n").unwrap();

        let out = run_in(temp_dir.path(), &["-v", "1.14.0-rc2", "RPM_RELEASE"]);
        assert_eq!(out.code, 1);
        assert!(out.stdout.is_empty());
        assert!(out.stderr.contains("Invalid TOML"));
        assert!(!out.stderr.contains("No config file found"));
    }

    #[test]
    fn test_missing_explicit_config_exits_one() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");

        let out = run_in(
            temp_dir.path(),
            &["--config", missing.to_str().unwrap(), "1.0.0"],
        );
        assert_eq!(out.code, 1);
        assert!(out.stderr.contains("Config file not found"));
    }

    #[test]
    fn test_verbose_reports_config_source() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".pvrc.toml"), "format = \"json\"\n").unwrap();

        let out = run_in(temp_dir.path(), &["-v", "--no-color", "nightly"]);
        assert_eq!(out.code, 0);
        assert!(out.stderr.contains("Using config:"));
        assert!(out.stderr.contains("Parsed nightly as nightly"));
        assert!(out.stdout.contains("\"RPM_FULL_VERSION\": \"nightly\""));
    }

    #[test]
    fn test_verbose_reports_empty_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pv.toml"), "").unwrap();

        let out = run_in(temp_dir.path(), &["-v", "1.0.0", "RPM_VERSION"]);
        assert_eq!(out.code, 0);
        assert!(out.stderr.contains("sets nothing"));
    }
}
