//! Model access as a plugin.
//!
//! [`ElementsPlugin`] re-exposes the host's [`ElementRegistry`] behind the
//! plugin surface, so code holding only a [`PluginHost`](super::PluginHost)
//! handle can still resolve elements.

use std::rc::Rc;

use flowpath_core::{
    registry::ElementRegistry,
    semantic::{Element, ElementKind},
};

use super::Plugin;

/// Registration id of [`ElementsPlugin`].
pub const ELEMENTS_PLUGIN_ID: &str = "elements";

/// Plugin delegating element queries to the shared registry.
pub struct ElementsPlugin<R: ElementRegistry> {
    registry: Rc<R>,
}

impl<R: ElementRegistry> ElementsPlugin<R> {
    /// Create the plugin over the shared registry handle.
    pub fn new(registry: Rc<R>) -> Self {
        Self { registry }
    }
}

impl<R: ElementRegistry + 'static> Plugin for ElementsPlugin<R> {
    fn plugin_id(&self) -> &str {
        ELEMENTS_PLUGIN_ID
    }
}

impl<R: ElementRegistry> ElementRegistry for ElementsPlugin<R> {
    fn resolve_ids(&self, ids: &[String]) -> Vec<Element> {
        self.registry.resolve_ids(ids)
    }

    fn elements_by_kinds(&self, kinds: &[ElementKind]) -> Vec<Element> {
        self.registry.elements_by_kinds(kinds)
    }
}
