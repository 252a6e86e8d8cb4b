//! Element access capability.
//!
//! The diagram model is externally owned; add-ons read it through
//! [`ElementRegistry`] and nothing else. The trait is deliberately small so
//! a host can expose an existing model without adapters and tests can use
//! an in-memory fake ([`crate::model::DiagramModel`]).

use crate::semantic::{Element, ElementKind};

/// Read-only access to the elements of a diagram model.
///
/// Implementations must be pure lookups: no mutation, no caching visible to
/// callers, and deterministic results for a given model state.
pub trait ElementRegistry {
    /// Resolve ids to their full element representations.
    ///
    /// The result contains the subset of `ids` that exist in the model,
    /// deduplicated by id and ordered by first occurrence in the input.
    /// Ids that match nothing are omitted silently; resolution is never an
    /// error.
    fn resolve_ids(&self, ids: &[String]) -> Vec<Element>;

    /// All elements whose kind is one of `kinds`, in registry order.
    ///
    /// Registry order is the model's own element order and does not depend
    /// on the order of `kinds`.
    fn elements_by_kinds(&self, kinds: &[ElementKind]) -> Vec<Element>;

    /// Resolve a single id, if it exists.
    fn resolve_id(&self, id: &str) -> Option<Element> {
        self.resolve_ids(&[id.to_string()]).into_iter().next()
    }
}
