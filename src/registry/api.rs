//! Public API for the registry model
//!
//! This module provides the complete public API for the registry model.
//! External modules should import from here rather than directly from
//! internal modules.

// Discovery pass and snapshot
pub use crate::registry::discovery::discover;
pub use crate::registry::snapshot::{DiscoveryError, RegistrySnapshot};

// Host loading seam
pub use crate::registry::host::{ManifestHost, PluginHost, PluginLoadError};

// Hook and widget value types
pub use crate::registry::types::{
    ConstructFn, DockWidgetContribution, HookFn, HookImplementation, LoadedModule, NativeHandle,
    Viewer, Widget, WidgetFactory, WidgetOptions, WidgetValue,
};
