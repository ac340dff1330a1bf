pub mod app;
pub mod conformance;
pub mod core;
pub mod metadata;
pub mod registry;
pub mod resolver;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
