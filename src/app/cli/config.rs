//! TOML configuration file parsing and loading
//!
//! This module handles loading and parsing of the optional TOML
//! configuration file. Values from the file fill in only what the command
//! line left unset, so CLI flags always take precedence.

use std::path::PathBuf;

use super::args::Args;

impl Args {
    /// Load the config file and apply its values, returning the raw table
    ///
    /// A config file named explicitly must exist; the default location is
    /// used only when present.
    pub fn parse_config_file(args: &mut Self, config_file: Option<PathBuf>) -> Option<toml::Table> {
        let config_path = match config_file {
            Some(path) => {
                // User specified a config file - it must exist
                if !path.exists() {
                    eprintln!(
                        "Error: The specified configuration file does not exist: {}",
                        path.display()
                    );
                    std::process::exit(1);
                }
                Some(path)
            }
            None => {
                // Use default config path if it exists
                let default_path = dirs::config_dir()
                    .map(|d| d.join("PluginConform").join("plugin-conform.toml"));
                match default_path {
                    Some(path) if path.exists() => Some(path),
                    _ => None, // No config file to load
                }
            }
        };

        if let Some(path) = config_path {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<toml::Table>(&contents) {
                    Ok(config) => {
                        Self::apply_toml_values(args, &config);
                        Some(config) // Return the raw config
                    }
                    Err(e) => {
                        eprintln!("Error parsing configuration file {}: {}", path.display(), e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading configuration file {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        } else {
            None // No config file found
        }
    }

    /// Apply TOML configuration values to Args
    ///
    /// Only fills fields the command line left unset.
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) {
        if args.package.is_none() {
            if let Some(package) = config.get("package").and_then(|v| v.as_str()) {
                args.package = Some(package.to_string());
            }
        }
        if args.env_dir.is_none() {
            if let Some(env_dir) = config.get("env-dir").and_then(|v| v.as_str()) {
                args.env_dir = Some(PathBuf::from(env_dir));
            }
        }
        if args.directory.is_none() {
            if let Some(directory) = config.get("directory").and_then(|v| v.as_str()) {
                args.directory = Some(PathBuf::from(directory));
            }
        }
        if let Some(enabled) = config
            .get("check-hook-contribution")
            .and_then(|v| v.as_bool())
        {
            args.check_hook_contribution = args.check_hook_contribution || enabled;
        }
        if args.format.is_none() {
            if let Some(format) = config.get("format").and_then(|v| v.as_str()) {
                args.format = Some(format.to_string());
            }
        }
        if !args.color && !args.no_color {
            if let Some(color) = config.get("color").and_then(|v| v.as_bool()) {
                args.color = color;
                args.no_color = !color;
            } else if let Some(no_color) = config.get("no-color").and_then(|v| v.as_bool()) {
                // Legacy support: no-color=true behaves exactly like color=false
                args.no_color = no_color;
                args.color = !no_color;
            }
        }
        if args.log_level.is_none() {
            if let Some(log_level) = config.get("log-level").and_then(|v| v.as_str()) {
                args.log_level = Some(log_level.to_string());
            }
        }
        if args.log_file.is_none() {
            if let Some(log_file) = config.get("log-file").and_then(|v| v.as_str()) {
                if log_file.eq_ignore_ascii_case("none") || log_file == "-" {
                    args.log_file = None; // Magic values "none" and "-" disable file logging
                } else {
                    args.log_file = Some(PathBuf::from(log_file));
                }
            }
        }
        if args.log_format.is_none() {
            if let Some(log_format) = config.get("log-format").and_then(|v| v.as_str()) {
                args.log_format = Some(log_format.to_string());
            }
        }
    }
}
