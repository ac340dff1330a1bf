//! Plugin host abstraction
//!
//! The host framework is the thing that actually loads plugin modules and
//! attaches their hook implementations; the checker only consumes its query
//! surface. `PluginHost` is that seam: discovery asks it to load each entry
//! point target. `ManifestHost` services loads from the hook declarations in
//! the installed metadata records, so a full conformance run needs no live
//! plugin code.

use crate::metadata::environment::InstalledEnvironment;
use crate::metadata::types::{Distribution, WidgetDeclaration};
use crate::registry::types::{
    DockWidgetContribution, HookImplementation, LoadedModule, Widget, WidgetFactory, WidgetValue,
};
use std::sync::Arc;

/// Error returned when a host cannot load a plugin module
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("failed to load module '{module}': {reason}")]
pub struct PluginLoadError {
    pub module: String,
    pub reason: String,
}

/// The loading seam between discovery and the host framework
pub trait PluginHost {
    /// Load `target` and return its hook implementations plus any warnings
    /// emitted during the load
    fn load_module(&self, target: &str) -> Result<LoadedModule, PluginLoadError>;
}

/// Host backed by the hook declarations in installed metadata records
pub struct ManifestHost<'a> {
    env: &'a InstalledEnvironment,
}

impl<'a> ManifestHost<'a> {
    pub fn new(env: &'a InstalledEnvironment) -> Self {
        Self { env }
    }

    fn owning_distribution(&self, target: &str) -> Option<&'a Distribution> {
        self.env.distributions().find(|d| d.declares_module(target))
    }
}

impl PluginHost for ManifestHost<'_> {
    fn load_module(&self, target: &str) -> Result<LoadedModule, PluginLoadError> {
        let dist = self
            .owning_distribution(target)
            .ok_or_else(|| PluginLoadError {
                module: target.to_string(),
                reason: "no installed package declares this module".to_string(),
            })?;

        let hook_implementations = dist
            .hooks_for_module(target)
            .map(|decl| {
                let widgets = decl.widgets.clone();
                HookImplementation::new(
                    target,
                    decl.hook.clone(),
                    Arc::new(move || contribution_from_declarations(&widgets)),
                )
            })
            .collect();

        Ok(LoadedModule {
            module: target.to_string(),
            hook_implementations,
            warnings: dist.module_warnings(target).to_vec(),
        })
    }
}

/// Build the hook result for a set of declared widgets
///
/// No widgets means the hook returns nothing; a single declaration is
/// returned bare, matching hooks that hand back one value instead of a list.
fn contribution_from_declarations(widgets: &[WidgetDeclaration]) -> Option<DockWidgetContribution> {
    match widgets {
        [] => None,
        [only] => Some(contribution_from_declaration(only)),
        many => Some(DockWidgetContribution::Many(
            many.iter().map(contribution_from_declaration).collect(),
        )),
    }
}

fn contribution_from_declaration(decl: &WidgetDeclaration) -> DockWidgetContribution {
    let value = widget_value_from_declaration(decl);
    match &decl.options {
        Some(options) => DockWidgetContribution::Labeled(value, options.clone()),
        None => DockWidgetContribution::Single(value),
    }
}

/// A declaration with a resolvable `module:attribute` factory symbol becomes
/// a callable factory; anything else is kept as the opaque value the check
/// will reject.
fn widget_value_from_declaration(decl: &WidgetDeclaration) -> WidgetValue {
    let symbol = match decl.factory.as_deref() {
        Some(symbol) if !symbol.trim().is_empty() => symbol.to_string(),
        Some(_) => return WidgetValue::Opaque("empty factory symbol".to_string()),
        None => return WidgetValue::Opaque("widget declared without a factory".to_string()),
    };

    let widget_name = match symbol.split_once(':') {
        Some((module, attribute)) if !module.is_empty() && !attribute.is_empty() => {
            attribute.to_string()
        }
        _ => String::new(),
    };
    if widget_name.is_empty() {
        return WidgetValue::Opaque(symbol);
    }

    WidgetValue::Factory(WidgetFactory::new(
        symbol,
        decl.requires_viewer,
        Arc::new(move |_viewer| Widget::new(widget_name.clone())),
    ))
}
