//! Discovery pass
//!
//! Walks every installed package's plugin-group entry points, loads each
//! target module through the host, and produces an immutable snapshot.
//! Load failures and duplicate registrations are collected on the snapshot;
//! load-time warnings are demoted to debug logging and never fail anything.

use crate::metadata::environment::InstalledEnvironment;
use crate::metadata::types::PLUGIN_GROUP;
use crate::registry::host::PluginHost;
use crate::registry::snapshot::{DiscoveryError, RegistrySnapshot};

/// Run one discovery pass over the installed environment
pub fn discover(env: &InstalledEnvironment, host: &dyn PluginHost) -> RegistrySnapshot {
    let mut snapshot = RegistrySnapshot::new();

    for dist in env.distributions() {
        let package = dist.package.name.as_str();
        for entry_point in dist.entry_points_in_group(PLUGIN_GROUP) {
            log::debug!(
                "Discovering entry point '{}' of '{}' -> module '{}'",
                entry_point.name,
                package,
                entry_point.target
            );

            let loaded = match host.load_module(&entry_point.target) {
                Ok(loaded) => loaded,
                Err(err) => {
                    let error = DiscoveryError::LoadFailed {
                        package: package.to_string(),
                        entry_point: entry_point.name.clone(),
                        module: entry_point.target.clone(),
                        reason: err.reason,
                    };
                    log::info!("Discovery: {}", error);
                    snapshot.record_error(error);
                    continue;
                }
            };

            // Import-side-effect warnings must not fail the pass
            for warning in &loaded.warnings {
                log::debug!(
                    "Suppressed warning while loading '{}': {}",
                    loaded.module,
                    warning
                );
            }

            if let Err(module) = snapshot.register_module(loaded.module, loaded.hook_implementations)
            {
                let error = DiscoveryError::DuplicateRegistration {
                    package: package.to_string(),
                    entry_point: entry_point.name.clone(),
                    module,
                };
                log::info!("Discovery: {}", error);
                snapshot.record_error(error);
            }
        }
    }

    log::debug!(
        "Discovery finished: {} modules registered, {} errors",
        snapshot.len(),
        snapshot.errors().len()
    );
    snapshot
}
