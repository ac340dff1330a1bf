//! Plugin Registry Model
//!
//! Models the query surface the host framework's plugin registry exposes:
//! hook implementations keyed by owning module, the values a dock widget
//! hook can return, and a discovery pass producing an immutable snapshot.

// Internal modules - all access should go through api module
pub(crate) mod discovery;
pub(crate) mod host;
pub(crate) mod snapshot;
pub(crate) mod types;

// Public API module - the only public interface for the registry model
pub mod api;
