//! Element category identification.
//!
//! Answers "what is this id" questions without the caller touching the kind
//! enums: resolve the id, classify its kind. Unknown ids and edges simply
//! answer `false` to the shape-category predicates.

use flowpath_core::{
    registry::ElementRegistry,
    semantic::{ElementKind, ShapeKind},
};

/// Classifies elements by id.
pub struct ElementsIdentifier<'a, R: ElementRegistry> {
    registry: &'a R,
}

impl<'a, R: ElementRegistry> ElementsIdentifier<'a, R> {
    /// Create an identifier over the given registry.
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Whether the id names an activity (any task flavor, call activity,
    /// or sub-process).
    pub fn is_activity(&self, element_id: &str) -> bool {
        self.shape_category(element_id, ShapeKind::is_activity)
    }

    /// Whether the id names a gateway.
    pub fn is_gateway(&self, element_id: &str) -> bool {
        self.shape_category(element_id, ShapeKind::is_gateway)
    }

    /// Whether the id names an event.
    pub fn is_event(&self, element_id: &str) -> bool {
        self.shape_category(element_id, ShapeKind::is_event)
    }

    /// Whether the id names an artifact (group or text annotation).
    pub fn is_artifact(&self, element_id: &str) -> bool {
        self.shape_category(element_id, ShapeKind::is_artifact)
    }

    /// Whether the id names a flow node: an event, gateway, or activity.
    pub fn is_flow_node(&self, element_id: &str) -> bool {
        self.shape_category(element_id, ShapeKind::is_flow_node)
    }

    /// The kind of the element, if the id resolves.
    pub fn kind_of(&self, element_id: &str) -> Option<ElementKind> {
        self.registry
            .resolve_id(element_id)
            .map(|element| element.kind())
    }

    fn shape_category(&self, element_id: &str, category: impl Fn(ShapeKind) -> bool) -> bool {
        self.registry
            .resolve_id(element_id)
            .and_then(|element| element.as_shape().map(|shape| category(shape.kind())))
            .unwrap_or(false)
    }
}
