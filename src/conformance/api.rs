//! Public API for the conformance checks
//!
//! This module provides the complete public API for the conformance checks.
//! External modules should import from here rather than directly from
//! internal modules.

// Individual checks
pub use crate::conformance::checks::{
    check_declares_entry_point, check_dock_widgets, check_hook_contribution,
    check_plugin_detected, check_single_backend,
};

// Error handling
pub use crate::conformance::error::{ConformanceError, ConformanceResult};

// Reporting
pub use crate::conformance::report::{Check, CheckOutcome, CheckResult, ConformanceReport};

// Suite runner
pub use crate::conformance::suite::{run_suite, SuiteOptions};

// Optional widget instantiation helper
pub use crate::conformance::widget::{instantiate_dock_widget, InstantiatedWidget};
