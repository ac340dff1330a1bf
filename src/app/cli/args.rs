//! Core CLI arguments structure and basic functionality
//!
//! This module contains the main Args struct definition and basic methods.
//! Configuration file loading is handled by the config module.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the conformance checker
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "plugin-conform")]
#[command(about = "Conformance checker for viewer plugin packages")]
#[command(version)]
pub struct Args {
    /// Package under test (overrides setup.cfg/setup.py resolution)
    #[arg(short = 'p', long = "package", value_name = "NAME")]
    pub package: Option<String>,

    /// Directory containing installed package metadata records
    #[arg(short = 'e', long = "env-dir", value_name = "DIR")]
    pub env_dir: Option<PathBuf>,

    /// Directory holding the plugin's build configuration (default: cwd)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Run the hook-contribution check (skipped by default)
    #[arg(long = "check-hook-contribution")]
    pub check_hook_contribution: bool,

    /// Report output format
    #[arg(short = 'o', long = "format", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force color output
    #[arg(long = "color", overrides_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,
}

impl Args {
    /// Directory the plugin's build configuration is resolved from
    pub fn working_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory the installed environment is loaded from
    ///
    /// Defaults to `dist-meta` under the working directory.
    pub fn environment_directory(&self) -> PathBuf {
        self.env_dir
            .clone()
            .unwrap_or_else(|| self.working_directory().join("dist-meta"))
    }

    /// Report format, defaulting to text
    pub fn report_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["plugin-conform"]);

        assert!(args.package.is_none());
        assert!(!args.check_hook_contribution);
        assert_eq!(args.report_format(), "text");
        assert_eq!(args.working_directory(), PathBuf::from("."));
        assert_eq!(
            args.environment_directory(),
            PathBuf::from(".").join("dist-meta")
        );
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::parse_from([
            "plugin-conform",
            "--package",
            "my-plugin",
            "--env-dir",
            "/env",
            "--directory",
            "/work",
            "--check-hook-contribution",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.package.as_deref(), Some("my-plugin"));
        assert_eq!(args.environment_directory(), PathBuf::from("/env"));
        assert_eq!(args.working_directory(), PathBuf::from("/work"));
        assert!(args.check_hook_contribution);
        assert_eq!(args.report_format(), "json");
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_env_dir_defaults_under_directory() {
        let args = Args::parse_from(["plugin-conform", "--directory", "/work"]);
        assert_eq!(
            args.environment_directory(),
            PathBuf::from("/work").join("dist-meta")
        );
    }

    #[test]
    fn test_color_flags_override_each_other() {
        let args = Args::parse_from(["plugin-conform", "--color", "--no-color"]);
        assert!(!args.color);
        assert!(args.no_color);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["plugin-conform", "--format", "xml"]);
        assert!(result.is_err());
    }
}
