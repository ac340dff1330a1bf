//! Package name resolution
//!
//! Determines which installed package is under test. An explicit override
//! wins; otherwise the plugin's build configuration in the working directory
//! is inspected: the `[metadata]` section of `setup.cfg`, then a structural
//! (never executed) parse of `setup.py`. Resolution failure is fatal to the
//! whole session, so it surfaces as an error rather than a failed check.

pub mod error;
pub mod setup_cfg;
pub mod setup_script;

use crate::metadata::types::PACKAGE_OVERRIDE_ENV;
use self::error::{ResolveError, ResolveResult};
use std::path::Path;

/// Read the environment override, treating empty values as unset
pub fn package_override() -> Option<String> {
    std::env::var(PACKAGE_OVERRIDE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Resolve the package under test
///
/// Precedence: explicit override, then `setup.cfg`, then `setup.py`.
pub fn resolve_package_name(dir: &Path, explicit: Option<&str>) -> ResolveResult<String> {
    if let Some(name) = explicit.filter(|name| !name.trim().is_empty()) {
        log::debug!("Package name '{}' taken from explicit override", name);
        return Ok(name.to_string());
    }

    let setup_cfg = dir.join("setup.cfg");
    if setup_cfg.exists() {
        if let Some(name) = setup_cfg::package_name(&setup_cfg)? {
            log::debug!("Package name '{}' taken from {}", name, setup_cfg.display());
            return Ok(name);
        }
    }

    let setup_py = dir.join("setup.py");
    if setup_py.exists() {
        let source = std::fs::read_to_string(&setup_py).map_err(|source| ResolveError::Io {
            path: setup_py.display().to_string(),
            source,
        })?;
        if let Some(name) = setup_script::package_name(&source) {
            log::debug!("Package name '{}' taken from {}", name, setup_py.display());
            return Ok(name);
        }
    }

    Err(ResolveError::NotFound {
        directory: dir.display().to_string(),
    })
}
