//! Widget instantiation helper
//!
//! Deeper, optional verification: actually construct a widget from its
//! factory. None of the default checks call this; constructing real widgets
//! needs a live viewer context and applying it across arbitrary plugins
//! tends to produce false failures.

use crate::registry::api::{NativeHandle, Viewer, Widget, WidgetFactory};

/// A constructed dock widget, unwrapped to its native handle when one exists
#[derive(Debug, Clone, PartialEq)]
pub enum InstantiatedWidget {
    Native(NativeHandle),
    Widget(Widget),
}

/// Construct a widget from its factory, supplying a viewer when the factory
/// asks for one
pub fn instantiate_dock_widget<F>(factory: &WidgetFactory, make_viewer: F) -> InstantiatedWidget
where
    F: FnOnce() -> Viewer,
{
    let viewer = if factory.requires_viewer() {
        Some(make_viewer())
    } else {
        None
    };

    match factory.construct(viewer).into_native() {
        Ok(handle) => InstantiatedWidget::Native(handle),
        Err(widget) => InstantiatedWidget::Widget(widget),
    }
}
