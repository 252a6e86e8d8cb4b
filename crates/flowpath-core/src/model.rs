//! In-memory diagram model.
//!
//! [`DiagramModel`] is the reference [`ElementRegistry`] implementation: an
//! insertion-ordered map of elements keyed by id. It is the model handed to
//! the CLI and to tests, and the serde shape (`Vec<Element>` on the wire)
//! is the document format the CLI loads.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    registry::ElementRegistry,
    semantic::{Element, ElementKind},
};

/// Errors raised while constructing a [`DiagramModel`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two elements share an id. Ids are unique across shapes and edges
    /// combined, so the model refuses the whole document.
    #[error("duplicate element id '{id}' in diagram model")]
    DuplicateId { id: String },
}

/// An insertion-ordered collection of diagram elements keyed by id.
///
/// Element order is the order of construction and defines registry order
/// for kind-scoped queries. Serialization round-trips through a plain
/// element sequence; deserializing a document with colliding ids fails with
/// [`ModelError::DuplicateId`].
///
/// # Examples
///
/// ```rust
/// use flowpath_core::model::DiagramModel;
/// use flowpath_core::registry::ElementRegistry;
/// use flowpath_core::semantic::{EdgeSemantic, Element, FlowKind, ShapeKind, ShapeSemantic};
///
/// let model = DiagramModel::from_elements([
///     Element::from(ShapeSemantic::new(
///         "StartEvent_1",
///         None,
///         ShapeKind::StartEvent,
///         vec![],
///         vec!["Flow_A".to_string()],
///     )),
///     Element::from(EdgeSemantic::new(
///         "Flow_A",
///         None,
///         FlowKind::SequenceFlow,
///         "StartEvent_1",
///         "Task_1",
///     )),
/// ])
/// .unwrap();
///
/// assert_eq!(model.len(), 2);
/// assert!(model.resolve_id("Flow_A").is_some());
/// assert!(model.resolve_id("Task_1").is_none());
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(try_from = "Vec<Element>", into = "Vec<Element>")]
pub struct DiagramModel {
    elements: IndexMap<String, Element>,
}

impl DiagramModel {
    /// Build a model from elements, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateId`] if two elements share an id.
    pub fn from_elements(
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self, ModelError> {
        let mut map = IndexMap::new();
        for element in elements {
            let id = element.id().to_string();
            if map.contains_key(&id) {
                return Err(ModelError::DuplicateId { id });
            }
            map.insert(id, element);
        }
        debug!(elements_count = map.len(); "Diagram model constructed");
        Ok(Self { elements: map })
    }

    /// Look up an element by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Number of elements in the model.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the model holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in registry order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }
}

impl ElementRegistry for DiagramModel {
    fn resolve_ids(&self, ids: &[String]) -> Vec<Element> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(ids.len());
        let mut resolved = Vec::new();
        for id in ids {
            // First occurrence wins; later duplicates are skipped whether
            // or not the id resolves.
            if !seen.insert(id.as_str()) {
                continue;
            }
            if let Some(element) = self.elements.get(id.as_str()) {
                resolved.push(element.clone());
            }
        }
        resolved
    }

    fn elements_by_kinds(&self, kinds: &[ElementKind]) -> Vec<Element> {
        self.elements
            .values()
            .filter(|element| kinds.contains(&element.kind()))
            .cloned()
            .collect()
    }
}

impl TryFrom<Vec<Element>> for DiagramModel {
    type Error = ModelError;

    fn try_from(elements: Vec<Element>) -> Result<Self, Self::Error> {
        DiagramModel::from_elements(elements)
    }
}

impl From<DiagramModel> for Vec<Element> {
    fn from(model: DiagramModel) -> Self {
        model.elements.into_values().collect()
    }
}
