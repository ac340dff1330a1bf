//! Installed environment index
//!
//! Scans an environment directory for `*.dist.toml` metadata records and
//! indexes them by normalized package name.

use crate::metadata::error::{MetadataError, MetadataResult};
use crate::metadata::types::Distribution;
use std::collections::BTreeMap;
use std::path::Path;

/// Normalize a package name for lookup: lowercase, underscores as dashes
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Read-only index of the installed packages' metadata records
#[derive(Debug, Clone, Default)]
pub struct InstalledEnvironment {
    distributions: BTreeMap<String, Distribution>,
}

impl InstalledEnvironment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all metadata records from `dir`
    ///
    /// Malformed or unreadable records are skipped with a warning so that one
    /// broken unrelated package cannot abort the conformance session.
    pub fn from_dir(dir: &Path) -> MetadataResult<Self> {
        if !dir.is_dir() {
            return Err(MetadataError::MissingDirectory {
                path: dir.display().to_string(),
            });
        }

        let pattern = dir.join("*.dist.toml").display().to_string();
        let entries = glob::glob(&pattern).map_err(|source| MetadataError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut env = Self::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    log::warn!("Skipping unreadable metadata record: {}", err);
                    continue;
                }
            };

            let contents = match std::fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(err) => {
                    log::warn!(
                        "Skipping metadata record {}: {}",
                        path.display(),
                        err
                    );
                    continue;
                }
            };

            match toml::from_str::<Distribution>(&contents) {
                Ok(dist) => {
                    log::debug!(
                        "Loaded metadata record for '{}' from {}",
                        dist.package.name,
                        path.display()
                    );
                    env.insert(dist);
                }
                Err(err) => {
                    log::warn!(
                        "Skipping malformed metadata record {}: {}",
                        path.display(),
                        err
                    );
                }
            }
        }

        Ok(env)
    }

    /// Add or replace a distribution record
    pub fn insert(&mut self, dist: Distribution) {
        self.distributions
            .insert(normalize_name(&dist.package.name), dist);
    }

    /// Look up a package's metadata record by (normalized) name
    pub fn distribution(&self, package: &str) -> Option<&Distribution> {
        self.distributions.get(&normalize_name(package))
    }

    /// Whether a package is installed
    pub fn installed(&self, package: &str) -> bool {
        self.distributions.contains_key(&normalize_name(package))
    }

    /// All installed distributions, in normalized-name order
    pub fn distributions(&self) -> impl Iterator<Item = &Distribution> {
        self.distributions.values()
    }

    /// Number of installed packages
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// Whether the environment contains no packages
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::types::{PackageInfo, PLUGIN_GROUP};

    fn dist(name: &str) -> Distribution {
        Distribution {
            package: PackageInfo {
                name: name.to_string(),
                version: "1.0.0".to_string(),
            },
            entry_points: Vec::new(),
            modules: Vec::new(),
            hooks: Vec::new(),
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("My_Plugin"), "my-plugin");
        assert_eq!(normalize_name("napari-svg"), "napari-svg");
        assert_eq!(normalize_name("PyQt5"), "pyqt5");
    }

    #[test]
    fn test_lookup_is_name_normalized() {
        let mut env = InstalledEnvironment::new();
        env.insert(dist("My_Plugin"));

        assert!(env.installed("my-plugin"));
        assert!(env.installed("MY_PLUGIN"));
        assert!(env.distribution("my_plugin").is_some());
        assert!(!env.installed("other"));
    }

    #[test]
    fn test_from_dir_loads_records() {
        let tmp = tempfile::tempdir().unwrap();

        std::fs::write(
            tmp.path().join("napari-svg.dist.toml"),
            r#"
            [package]
            name = "napari-svg"
            version = "0.1.6"

            [[entry_points]]
            group = "napari.plugin"
            name = "svg"
            target = "napari_svg.hook_implementations"
            "#,
        )
        .unwrap();
        std::fs::write(
            tmp.path().join("pyqt5.dist.toml"),
            "[package]\nname = \"PyQt5\"\nversion = \"5.15.9\"\n",
        )
        .unwrap();
        // Unrelated files are not picked up
        std::fs::write(tmp.path().join("README.txt"), "not metadata").unwrap();

        let env = InstalledEnvironment::from_dir(tmp.path()).unwrap();
        assert_eq!(env.len(), 2);
        assert!(env.installed("napari-svg"));
        assert!(env.installed("PyQt5"));

        let svg = env.distribution("napari-svg").unwrap();
        assert_eq!(svg.entry_points_in_group(PLUGIN_GROUP).count(), 1);
    }

    #[test]
    fn test_from_dir_skips_malformed_records() {
        let tmp = tempfile::tempdir().unwrap();

        std::fs::write(
            tmp.path().join("good.dist.toml"),
            "[package]\nname = \"good\"\nversion = \"1.0.0\"\n",
        )
        .unwrap();
        std::fs::write(tmp.path().join("broken.dist.toml"), "not [ valid toml").unwrap();

        let env = InstalledEnvironment::from_dir(tmp.path()).unwrap();
        assert_eq!(env.len(), 1);
        assert!(env.installed("good"));
    }

    #[test]
    fn test_from_dir_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let err = InstalledEnvironment::from_dir(&missing).unwrap_err();
        assert!(matches!(err, MetadataError::MissingDirectory { .. }));
    }

    #[test]
    fn test_empty_environment() {
        let env = InstalledEnvironment::new();
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
        assert!(env.distribution("anything").is_none());
    }
}
