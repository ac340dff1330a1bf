//! Suite runner
//!
//! Runs every check against one environment/snapshot pair, isolating
//! failures per check.

use crate::conformance::checks::{
    check_declares_entry_point, check_dock_widgets, check_hook_contribution,
    check_plugin_detected, check_single_backend,
};
use crate::conformance::error::ConformanceResult;
use crate::conformance::report::{Check, CheckOutcome, CheckResult, ConformanceReport};
use crate::metadata::environment::InstalledEnvironment;
use crate::registry::api::RegistrySnapshot;
use strum::IntoEnumIterator;

/// Options controlling which checks run
#[derive(Debug, Clone, Default)]
pub struct SuiteOptions {
    /// Run the hook-contribution check, which is skipped by default because
    /// it flags every silently-registered module in the environment, not
    /// just the package under test
    pub check_hook_contribution: bool,
}

/// Run the full conformance suite for one package
pub fn run_suite(
    env: &InstalledEnvironment,
    snapshot: &RegistrySnapshot,
    package: &str,
    options: &SuiteOptions,
) -> ConformanceReport {
    let mut results = Vec::new();

    for check in Check::iter() {
        let outcome = match check {
            Check::DeclaresEntryPoint => outcome_of(check_declares_entry_point(env, package)),
            Check::PluginDetected => outcome_of(check_plugin_detected(env, snapshot, package)),
            Check::DockWidgets => outcome_of(check_dock_widgets(env, snapshot, package)),
            Check::SingleBackend => outcome_of(check_single_backend(env)),
            Check::HookContribution => {
                if options.check_hook_contribution {
                    outcome_of(check_hook_contribution(snapshot))
                } else {
                    CheckOutcome::Skipped(
                        "disabled by default; enable with --check-hook-contribution".to_string(),
                    )
                }
            }
        };

        match &outcome {
            CheckOutcome::Passed => log::debug!("Check '{}' passed", check),
            CheckOutcome::Failed(error) => log::error!("Check '{}' failed: {}", check, error),
            CheckOutcome::Skipped(reason) => log::debug!("Check '{}' skipped: {}", check, reason),
        }

        results.push(CheckResult { check, outcome });
    }

    ConformanceReport {
        package: package.to_string(),
        results,
    }
}

fn outcome_of(result: ConformanceResult<()>) -> CheckOutcome {
    match result {
        Ok(()) => CheckOutcome::Passed,
        Err(error) => CheckOutcome::Failed(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance::error::ConformanceError;
    use crate::metadata::types::{
        Distribution, EntryPoint, HookDeclaration, ModuleDeclaration, PackageInfo,
        DOCK_WIDGET_HOOK, PLUGIN_GROUP,
    };
    use crate::registry::api::{discover, ManifestHost};

    fn backend() -> Distribution {
        Distribution {
            package: PackageInfo {
                name: "PyQt5".to_string(),
                version: "5.15.9".to_string(),
            },
            entry_points: Vec::new(),
            modules: Vec::new(),
            hooks: Vec::new(),
        }
    }

    fn conformant_plugin() -> Distribution {
        Distribution {
            package: PackageInfo {
                name: "my-plugin".to_string(),
                version: "0.2.0".to_string(),
            },
            entry_points: vec![EntryPoint {
                group: PLUGIN_GROUP.to_string(),
                name: "my-plugin".to_string(),
                target: "my_plugin.impl".to_string(),
            }],
            modules: vec![ModuleDeclaration {
                name: "my_plugin.impl".to_string(),
                warnings: Vec::new(),
            }],
            hooks: vec![HookDeclaration {
                module: "my_plugin.impl".to_string(),
                hook: DOCK_WIDGET_HOOK.to_string(),
                widgets: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_suite_passes_for_conformant_package() {
        let mut env = InstalledEnvironment::new();
        env.insert(backend());
        env.insert(conformant_plugin());

        let host = ManifestHost::new(&env);
        let snapshot = discover(&env, &host);
        let report = run_suite(&env, &snapshot, "my-plugin", &SuiteOptions::default());

        assert!(report.passed());
        assert_eq!(report.results.len(), 5);
        assert_eq!(
            report.results[4].outcome,
            CheckOutcome::Skipped(
                "disabled by default; enable with --check-hook-contribution".to_string()
            )
        );
    }

    #[test]
    fn test_suite_isolates_failures() {
        // No backend installed and no entry points: two independent failures,
        // later checks still run
        let mut env = InstalledEnvironment::new();
        let mut bare = conformant_plugin();
        bare.entry_points.clear();
        env.insert(bare);

        let host = ManifestHost::new(&env);
        let snapshot = discover(&env, &host);
        let report = run_suite(&env, &snapshot, "my-plugin", &SuiteOptions::default());

        assert!(!report.passed());
        let failed: Vec<Check> = report.failures().map(|(result, _)| result.check).collect();
        assert!(failed.contains(&Check::DeclaresEntryPoint));
        assert!(failed.contains(&Check::SingleBackend));
        // Detection passes vacuously: no declared entry points to miss
        assert_eq!(report.results[1].outcome, CheckOutcome::Passed);
    }

    #[test]
    fn test_opt_in_hook_contribution_check() {
        let mut env = InstalledEnvironment::new();
        env.insert(backend());
        let mut silent = conformant_plugin();
        silent.hooks.clear(); // module loads but contributes nothing
        env.insert(silent);

        let host = ManifestHost::new(&env);
        let snapshot = discover(&env, &host);

        let options = SuiteOptions {
            check_hook_contribution: true,
        };
        let report = run_suite(&env, &snapshot, "my-plugin", &options);

        assert!(!report.passed());
        let (_, error) = report.failures().next().unwrap();
        assert_eq!(
            *error,
            ConformanceError::SilentEntryPoint {
                module: "my_plugin.impl".to_string()
            }
        );
    }
}
