//! Shared fixtures for integration tests

use std::path::Path;

/// Write one metadata record into an environment directory
pub fn write_record(env_dir: &Path, file_name: &str, contents: &str) {
    std::fs::write(env_dir.join(file_name), contents).unwrap();
}

/// Metadata record for a GUI backend package (no entry points)
pub fn backend_record(name: &str) -> String {
    format!("[package]\nname = \"{}\"\nversion = \"5.15.9\"\n", name)
}

/// Metadata record for a conformant plugin with one dock widget
pub fn plugin_record(package: &str, module: &str, factory: &str) -> String {
    format!(
        r#"
[package]
name = "{package}"
version = "0.2.0"

[[entry_points]]
group = "napari.plugin"
name = "{package}"
target = "{module}"

[[modules]]
name = "{module}"

[[hooks]]
module = "{module}"
hook = "napari_experimental_provide_dock_widget"

[[hooks.widgets]]
factory = "{factory}"
requires_viewer = true

[hooks.widgets.options]
area = "right"
"#
    )
}

/// Metadata record declaring an entry point whose module never loads,
/// mirroring an import error swallowed during discovery
pub fn broken_plugin_record(package: &str, module: &str) -> String {
    format!(
        r#"
[package]
name = "{package}"
version = "0.1.0"

[[entry_points]]
group = "napari.plugin"
name = "{package}"
target = "{module}"
"#
    )
}
