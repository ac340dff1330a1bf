//! Application startup
//!
//! Wires the session together: argument and config parsing, logging,
//! package name resolution, environment loading, discovery, and the
//! conformance suite itself.

use crate::app::cli::args::Args;
use crate::conformance::api::{run_suite, SuiteOptions};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::metadata::environment::InstalledEnvironment;
use crate::registry::api::{discover, ManifestHost};
use crate::resolver;
use clap::Parser;
use std::io::IsTerminal;

/// Run one conformance session and return the process exit code
///
/// Exit codes: 0 all checks passed, 1 at least one check failed,
/// 2 the session could not run at all.
pub fn run() -> i32 {
    let mut args = Args::parse();
    let config_file = args.config_file.clone();
    Args::parse_config_file(&mut args, config_file);

    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;

    let log_file = args.log_file.as_ref().map(|p| p.display().to_string());
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        return 2;
    }

    log::info!(
        "plugin-conform {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_HASH,
        crate::BUILD_TIME
    );

    // Name resolution is a session prerequisite: failure is fatal
    let directory = args.working_directory();
    let explicit = args.package.clone().or_else(resolver::package_override);
    let package = match resolver::resolve_package_name(&directory, explicit.as_deref()) {
        Ok(package) => package,
        Err(err) => {
            log_error_with_context(&err, "Package name resolution");
            return 2;
        }
    };
    log::info!("Checking plugin package '{}'", package);

    let env_dir = args.environment_directory();
    let env = match InstalledEnvironment::from_dir(&env_dir) {
        Ok(env) => env,
        Err(err) => {
            log_error_with_context(&err, "Environment loading");
            return 2;
        }
    };
    if env.is_empty() {
        log::warn!("No metadata records found in {}", env_dir.display());
    }

    let host = ManifestHost::new(&env);
    let snapshot = discover(&env, &host);

    let options = SuiteOptions {
        check_hook_contribution: args.check_hook_contribution,
    };
    let report = run_suite(&env, &snapshot, &package, &options);

    match args.report_format() {
        "json" => match serde_json::to_string_pretty(&report.to_json()) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                log::error!("Failed to render JSON report: {}", e);
                return 2;
            }
        },
        _ => print!("{}", report.render_text(use_color)),
    }

    if report.passed() {
        0
    } else {
        1
    }
}
