//! The conformance checks
//!
//! Every check reads the environment and snapshot fresh and keeps no state
//! of its own.

use crate::conformance::error::{ConformanceError, ConformanceResult};
use crate::metadata::environment::InstalledEnvironment;
use crate::metadata::types::{
    EntryPoint, BACKEND_CANDIDATES, CONSOLE_MODULE, DOCK_WIDGET_HOOK, PLUGIN_GROUP,
};
use crate::registry::api::RegistrySnapshot;

/// Plugin-group entry points the package under test declares
fn declared_entry_points<'a>(
    env: &'a InstalledEnvironment,
    package: &str,
) -> ConformanceResult<Vec<&'a EntryPoint>> {
    let dist = env
        .distribution(package)
        .ok_or_else(|| ConformanceError::PackageNotInstalled {
            package: package.to_string(),
        })?;
    Ok(dist.entry_points_in_group(PLUGIN_GROUP).collect())
}

/// The package must declare at least one plugin-group entry point
pub fn check_declares_entry_point(
    env: &InstalledEnvironment,
    package: &str,
) -> ConformanceResult<()> {
    if declared_entry_points(env, package)?.is_empty() {
        return Err(ConformanceError::NoEntryPoints {
            package: package.to_string(),
            group: PLUGIN_GROUP.to_string(),
        });
    }
    Ok(())
}

/// Every declared module must have been registered by discovery
///
/// A missing registration means the framework silently failed to pick up a
/// declared plugin: an import error swallowed during discovery, or a
/// metadata/module name mismatch.
pub fn check_plugin_detected(
    env: &InstalledEnvironment,
    snapshot: &RegistrySnapshot,
    package: &str,
) -> ConformanceResult<()> {
    for entry_point in declared_entry_points(env, package)? {
        if !snapshot.is_registered(&entry_point.target) {
            return Err(ConformanceError::PluginNotDetected {
                module: entry_point.target.clone(),
            });
        }
    }
    Ok(())
}

/// Every dock widget contribution of the package's modules must be callable
///
/// Matches implementations by owning module rather than by plugin name, so
/// only the package under test is validated. Widgets are never instantiated
/// here; that needs a live viewer context.
pub fn check_dock_widgets(
    env: &InstalledEnvironment,
    snapshot: &RegistrySnapshot,
    package: &str,
) -> ConformanceResult<()> {
    for entry_point in declared_entry_points(env, package)? {
        for implementation in snapshot.hook_implementations(DOCK_WIDGET_HOOK) {
            if implementation.plugin_module() != entry_point.target {
                continue;
            }

            let contribution = match implementation.invoke() {
                Some(contribution) => contribution,
                None => continue,
            };

            for value in contribution.normalize() {
                if !value.is_callable() {
                    return Err(ConformanceError::NonCallableWidget {
                        module: entry_point.target.clone(),
                        hook: DOCK_WIDGET_HOOK.to_string(),
                        value: value.describe(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Exactly one GUI toolkit backend must be installed
///
/// Not plugin-specific: zero backends means nothing can run, more than one
/// makes runtime backend selection ambiguous.
pub fn check_single_backend(env: &InstalledEnvironment) -> ConformanceResult<()> {
    let installed: Vec<&str> = BACKEND_CANDIDATES
        .iter()
        .copied()
        .filter(|backend| env.installed(backend))
        .collect();

    match installed.len() {
        0 => Err(ConformanceError::NoBackend {
            candidates: BACKEND_CANDIDATES.join(", "),
        }),
        1 => Ok(()),
        _ => Err(ConformanceError::MultipleBackends {
            found: installed.join(", "),
        }),
    }
}

/// Every registered module must contribute at least one hook implementation
///
/// A registration with no implementations is likely abusing its entry point
/// for import side effects. The console module is exempt.
pub fn check_hook_contribution(snapshot: &RegistrySnapshot) -> ConformanceResult<()> {
    for (module, implementations) in snapshot.registrations() {
        if module == CONSOLE_MODULE {
            continue;
        }
        if implementations.is_empty() {
            return Err(ConformanceError::SilentEntryPoint {
                module: module.to_string(),
            });
        }
    }
    Ok(())
}
