//! Conformance check errors
//!
//! One variant per violated contract. These are check outcomes, not system
//! failures: they are reported per check and never abort the session.

/// Result type alias for conformance checks
pub type ConformanceResult<T> = std::result::Result<T, ConformanceError>;

/// A violated plugin contract
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConformanceError {
    /// The package under test has no metadata record at all
    #[error("package '{package}' is not installed")]
    PackageNotInstalled { package: String },

    /// The package declares no entry points under the plugin group
    #[error("package '{package}' declares no entry points under group '{group}'")]
    NoEntryPoints { package: String, group: String },

    /// A declared module is missing from the registry after discovery
    #[error("declared plugin module '{module}' was not registered by discovery")]
    PluginNotDetected { module: String },

    /// A dock widget hook returned something that cannot construct a widget
    #[error("hook '{hook}' of module '{module}' returned {value}")]
    NonCallableWidget {
        module: String,
        hook: String,
        value: String,
    },

    /// No GUI toolkit backend is installed
    #[error("no GUI backend installed (candidates: {candidates})")]
    NoBackend { candidates: String },

    /// More than one GUI toolkit backend is installed
    #[error("multiple GUI backends installed: {found}")]
    MultipleBackends { found: String },

    /// A registered module contributes no hook implementations
    #[error("module '{module}' was imported but contributes no hook implementations")]
    SilentEntryPoint { module: String },
}
