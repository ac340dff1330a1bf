//! Installed package metadata
//!
//! Models the read-only view of an installed environment: one metadata record
//! per package, each declaring entry points and (optionally) the hook
//! contributions its modules provide.

pub mod environment;
pub mod error;
pub mod types;
