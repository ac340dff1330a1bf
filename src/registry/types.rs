//! Type definitions for the registry model
//!
//! These types mirror what the host framework hands back when queried:
//! hook implementations with their owning module, and the duck-shaped
//! values a dock widget hook may return (a bare factory, a labeled
//! (factory, options) pair, or a list of either).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stand-in for the host application's viewer object
///
/// The real viewer belongs to the host GUI framework; the checker only ever
/// threads it through factory construction, so an identity is enough here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    pub title: String,
}

impl Viewer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Opaque handle to a native toolkit widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeHandle(pub u64);

/// A constructed dock widget, possibly wrapping a native toolkit handle
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    name: String,
    native: Option<NativeHandle>,
}

impl Widget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native: None,
        }
    }

    pub fn with_native(name: impl Into<String>, handle: NativeHandle) -> Self {
        Self {
            name: name.into(),
            native: Some(handle),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unwrap to the native handle when one exists, else keep the widget
    pub fn into_native(self) -> Result<NativeHandle, Widget> {
        match self.native {
            Some(handle) => Ok(handle),
            None => Err(self),
        }
    }
}

/// Construction closure for a widget factory
pub type ConstructFn = Arc<dyn Fn(Option<Viewer>) -> Widget + Send + Sync>;

/// A callable widget constructor advertised by a plugin
#[derive(Clone)]
pub struct WidgetFactory {
    name: String,
    requires_viewer: bool,
    construct: ConstructFn,
}

impl WidgetFactory {
    pub fn new(name: impl Into<String>, requires_viewer: bool, construct: ConstructFn) -> Self {
        Self {
            name: name.into(),
            requires_viewer,
            construct,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the constructor expects the host viewer as an argument
    pub fn requires_viewer(&self) -> bool {
        self.requires_viewer
    }

    pub fn construct(&self, viewer: Option<Viewer>) -> Widget {
        (self.construct)(viewer)
    }
}

impl fmt::Debug for WidgetFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetFactory")
            .field("name", &self.name)
            .field("requires_viewer", &self.requires_viewer)
            .finish()
    }
}

/// Dock placement options attached to a labeled contribution
///
/// Passed through unvalidated; the checks never inspect these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One item position of a dock widget contribution: a callable factory, or
/// whatever non-callable value a plugin returned by mistake
#[derive(Debug, Clone)]
pub enum WidgetValue {
    Factory(WidgetFactory),
    Opaque(String),
}

impl WidgetValue {
    /// Whether this value can be called to construct a widget
    pub fn is_callable(&self) -> bool {
        matches!(self, WidgetValue::Factory(_))
    }

    /// Short human-readable description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            WidgetValue::Factory(factory) => format!("factory '{}'", factory.name()),
            WidgetValue::Opaque(value) => format!("non-callable value '{}'", value),
        }
    }
}

/// The shape of a dock widget hook result
///
/// Hook results are duck-shaped: a single factory-like value, a labeled
/// (factory, options) pair, or a list of either. The variant keeps the shape
/// explicit; `normalize` flattens it to the sequence of values a host would
/// validate.
#[derive(Debug, Clone)]
pub enum DockWidgetContribution {
    Single(WidgetValue),
    Labeled(WidgetValue, WidgetOptions),
    Many(Vec<DockWidgetContribution>),
}

impl DockWidgetContribution {
    /// Flatten to the widget values in declaration order
    ///
    /// For `Labeled` only the factory position is surfaced; the options are
    /// never validated.
    pub fn normalize(&self) -> Vec<&WidgetValue> {
        let mut values = Vec::new();
        self.collect_values(&mut values);
        values
    }

    fn collect_values<'a>(&'a self, into: &mut Vec<&'a WidgetValue>) {
        match self {
            DockWidgetContribution::Single(value) => into.push(value),
            DockWidgetContribution::Labeled(value, _options) => into.push(value),
            DockWidgetContribution::Many(items) => {
                for item in items {
                    item.collect_values(into);
                }
            }
        }
    }

    /// Whether the contribution carries no widget values at all
    pub fn is_empty(&self) -> bool {
        match self {
            DockWidgetContribution::Single(_) | DockWidgetContribution::Labeled(..) => false,
            DockWidgetContribution::Many(items) => items.iter().all(|i| i.is_empty()),
        }
    }
}

/// Hook implementation closure: invoked fresh on every call
pub type HookFn = Arc<dyn Fn() -> Option<DockWidgetContribution> + Send + Sync>;

/// One hook implementation as recorded by the registry, with its owning
/// module and underlying callable
#[derive(Clone)]
pub struct HookImplementation {
    plugin_module: String,
    hook_name: String,
    function: HookFn,
}

impl HookImplementation {
    pub fn new(
        plugin_module: impl Into<String>,
        hook_name: impl Into<String>,
        function: HookFn,
    ) -> Self {
        Self {
            plugin_module: plugin_module.into(),
            hook_name: hook_name.into(),
            function,
        }
    }

    /// Module that contributed this implementation
    pub fn plugin_module(&self) -> &str {
        &self.plugin_module
    }

    /// Hook name the implementation is registered under
    pub fn hook_name(&self) -> &str {
        &self.hook_name
    }

    /// Call the underlying implementation
    pub fn invoke(&self) -> Option<DockWidgetContribution> {
        (self.function)()
    }
}

impl fmt::Debug for HookImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookImplementation")
            .field("plugin_module", &self.plugin_module)
            .field("hook_name", &self.hook_name)
            .finish()
    }
}

/// The result of loading one plugin module through a host
#[derive(Debug, Clone, Default)]
pub struct LoadedModule {
    pub module: String,
    pub hook_implementations: Vec<HookImplementation>,
    pub warnings: Vec<String>,
}
