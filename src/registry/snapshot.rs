//! Immutable discovery snapshot
//!
//! The host framework keeps its registration tables as global mutable state;
//! here discovery instead produces a `RegistrySnapshot` that the checks read
//! but never mutate. The snapshot pairs the registration mapping with the
//! errors collected along the way, so nothing is silently dropped.

use crate::registry::types::HookImplementation;
use std::collections::BTreeMap;

/// A problem encountered during the discovery pass
///
/// Discovery errors are diagnostic: they are logged and kept on the snapshot,
/// but only the downstream conformance checks turn them into failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiscoveryError {
    /// An entry point target failed to load
    #[error("entry point '{entry_point}' of '{package}': module '{module}' failed to load: {reason}")]
    LoadFailed {
        package: String,
        entry_point: String,
        module: String,
        reason: String,
    },

    /// A second entry point named an already-registered module
    #[error("entry point '{entry_point}' of '{package}': module '{module}' is already registered")]
    DuplicateRegistration {
        package: String,
        entry_point: String,
        module: String,
    },
}

/// Immutable result of one discovery pass: registration records keyed by
/// module, plus the errors encountered while producing them
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    registrations: BTreeMap<String, Vec<HookImplementation>>,
    errors: Vec<DiscoveryError>,
}

impl RegistrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a module registration with its hook implementations
    ///
    /// Registering a module twice is refused; discovery records the refusal
    /// as a `DuplicateRegistration` error instead of dropping it silently.
    pub fn register_module(
        &mut self,
        module: impl Into<String>,
        implementations: Vec<HookImplementation>,
    ) -> Result<(), String> {
        let module = module.into();
        if self.registrations.contains_key(&module) {
            return Err(module);
        }
        self.registrations.insert(module, implementations);
        Ok(())
    }

    /// Record a discovery error
    pub fn record_error(&mut self, error: DiscoveryError) {
        self.errors.push(error);
    }

    /// Whether `module` has a registration record
    pub fn is_registered(&self, module: &str) -> bool {
        self.registrations.contains_key(module)
    }

    /// All registered module names, sorted
    pub fn registered_modules(&self) -> Vec<&str> {
        self.registrations.keys().map(String::as_str).collect()
    }

    /// Hook implementations attached to `module`
    pub fn implementations_for(&self, module: &str) -> &[HookImplementation] {
        self.registrations
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Hook-namespace query: every implementation of `hook_name` across all
    /// registered modules, each carrying its owning module
    pub fn hook_implementations<'a>(
        &'a self,
        hook_name: &'a str,
    ) -> impl Iterator<Item = &'a HookImplementation> + 'a {
        self.registrations
            .values()
            .flatten()
            .filter(move |imp| imp.hook_name() == hook_name)
    }

    /// Registration records as (module, implementations) pairs
    pub fn registrations(&self) -> impl Iterator<Item = (&str, &[HookImplementation])> {
        self.registrations
            .iter()
            .map(|(module, imps)| (module.as_str(), imps.as_slice()))
    }

    /// Errors collected during discovery
    pub fn errors(&self) -> &[DiscoveryError] {
        &self.errors
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no modules are registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
