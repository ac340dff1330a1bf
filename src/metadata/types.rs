//! Type definitions for installed package metadata
//!
//! A package's metadata record is a TOML document written once at install
//! time and read-only afterwards. It declares the package identity, its
//! entry points, the modules those entry points resolve to, and the hook
//! contributions each module provides.

use crate::registry::api::WidgetOptions;
use serde::{Deserialize, Serialize};

/// Entry point group recognised as a plugin registration
pub const PLUGIN_GROUP: &str = "napari.plugin";

/// Hook name under which plugins contribute dock widget factories
pub const DOCK_WIDGET_HOOK: &str = "napari_experimental_provide_dock_widget";

/// Environment variable that short-circuits package name resolution
pub const PACKAGE_OVERRIDE_ENV: &str = "NAPARI_PLUGIN";

/// GUI toolkit backends the host can run on. Exactly one must be installed.
pub const BACKEND_CANDIDATES: &[&str] = &["PyQt5", "PySide2"];

/// Module whose registration is exempt from the hook-contribution check
pub const CONSOLE_MODULE: &str = "napari_console";

/// Package identity section of a metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

/// A declared (name, target-module) pair under an entry point group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub group: String,
    pub name: String,
    pub target: String,
}

/// A module the package installs, with any warnings its load emits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    pub name: String,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// A hook implementation declared by one of the package's modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookDeclaration {
    /// Module that owns the implementation
    pub module: String,
    /// Hook name the implementation is registered under
    pub hook: String,
    /// Widgets contributed when the hook is a dock widget provider
    #[serde(default)]
    pub widgets: Vec<WidgetDeclaration>,
}

/// One dock widget contributed by a hook implementation
///
/// A well-formed declaration names a factory symbol in `module:attribute`
/// form. A declaration without a resolvable factory is kept as-is so the
/// conformance checks can surface it as a non-callable contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDeclaration {
    /// Factory symbol, `module:attribute` form
    #[serde(default)]
    pub factory: Option<String>,
    /// Whether the factory's constructor takes the host viewer
    #[serde(default)]
    pub requires_viewer: bool,
    /// Dock placement options, passed through unvalidated
    #[serde(default)]
    pub options: Option<WidgetOptions>,
}

/// One installed package's complete metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub package: PackageInfo,
    #[serde(default)]
    pub entry_points: Vec<EntryPoint>,
    #[serde(default)]
    pub modules: Vec<ModuleDeclaration>,
    #[serde(default)]
    pub hooks: Vec<HookDeclaration>,
}

impl Distribution {
    /// Entry points declared under `group`, lazily and restartably
    pub fn entry_points_in_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = &'a EntryPoint> + 'a {
        self.entry_points.iter().filter(move |ep| ep.group == group)
    }

    /// Whether this package installs `module`, either via an explicit module
    /// declaration or by attaching hook implementations to it
    pub fn declares_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m.name == module)
            || self.hooks.iter().any(|h| h.module == module)
    }

    /// Hook implementations declared by `module`
    pub fn hooks_for_module<'a>(
        &'a self,
        module: &'a str,
    ) -> impl Iterator<Item = &'a HookDeclaration> + 'a {
        self.hooks.iter().filter(move |h| h.module == module)
    }

    /// Warnings emitted when `module` loads
    pub fn module_warnings(&self, module: &str) -> &[String] {
        self.modules
            .iter()
            .find(|m| m.name == module)
            .map(|m| m.warnings.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Distribution {
        toml::from_str(
            r#"
            [package]
            name = "napari-svg"
            version = "0.1.6"

            [[entry_points]]
            group = "napari.plugin"
            name = "svg"
            target = "napari_svg.hook_implementations"

            [[entry_points]]
            group = "console_scripts"
            name = "svg-tool"
            target = "napari_svg.cli"

            [[modules]]
            name = "napari_svg.hook_implementations"
            warnings = ["DeprecationWarning: old hook signature"]

            [[hooks]]
            module = "napari_svg.hook_implementations"
            hook = "napari_experimental_provide_dock_widget"

            [[hooks.widgets]]
            factory = "napari_svg._widget:SvgExportWidget"
            requires_viewer = true

            [hooks.widgets.options]
            area = "right"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_record_parses_from_toml() {
        let dist = sample_record();

        assert_eq!(dist.package.name, "napari-svg");
        assert_eq!(dist.package.version, "0.1.6");
        assert_eq!(dist.entry_points.len(), 2);
        assert_eq!(dist.modules.len(), 1);
        assert_eq!(dist.hooks.len(), 1);
        assert_eq!(dist.hooks[0].widgets.len(), 1);

        let widget = &dist.hooks[0].widgets[0];
        assert!(widget.requires_viewer);
        assert_eq!(
            widget.factory.as_deref(),
            Some("napari_svg._widget:SvgExportWidget")
        );
        assert_eq!(
            widget.options.as_ref().unwrap().area.as_deref(),
            Some("right")
        );
    }

    #[test]
    fn test_entry_points_filtered_by_group() {
        let dist = sample_record();

        let plugin_eps: Vec<_> = dist.entry_points_in_group(PLUGIN_GROUP).collect();
        assert_eq!(plugin_eps.len(), 1);
        assert_eq!(plugin_eps[0].name, "svg");
        assert_eq!(plugin_eps[0].target, "napari_svg.hook_implementations");

        // Restartable: a second pass sees the same sequence
        let again: Vec<_> = dist.entry_points_in_group(PLUGIN_GROUP).collect();
        assert_eq!(plugin_eps, again);
    }

    #[test]
    fn test_declares_module_via_modules_or_hooks() {
        let dist = sample_record();
        assert!(dist.declares_module("napari_svg.hook_implementations"));
        assert!(!dist.declares_module("napari_svg.other"));

        // A hook declaration alone is enough to make a module known
        let dist: Distribution = toml::from_str(
            r#"
            [package]
            name = "hook-only"
            version = "0.1.0"

            [[hooks]]
            module = "hook_only.impl"
            hook = "napari_experimental_provide_dock_widget"
            "#,
        )
        .unwrap();
        assert!(dist.declares_module("hook_only.impl"));
    }

    #[test]
    fn test_module_warnings_lookup() {
        let dist = sample_record();
        assert_eq!(
            dist.module_warnings("napari_svg.hook_implementations"),
            ["DeprecationWarning: old hook signature"]
        );
        assert!(dist.module_warnings("unknown.module").is_empty());
    }

    #[test]
    fn test_minimal_record_defaults() {
        let dist: Distribution = toml::from_str(
            r#"
            [package]
            name = "PyQt5"
            version = "5.15.9"
            "#,
        )
        .unwrap();

        assert!(dist.entry_points.is_empty());
        assert!(dist.modules.is_empty());
        assert!(dist.hooks.is_empty());
        assert_eq!(dist.entry_points_in_group(PLUGIN_GROUP).count(), 0);
    }
}
