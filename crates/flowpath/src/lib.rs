//! Flowpath - Path resolution and element add-ons for BPMN process diagrams
//!
//! This library augments an externally owned process-diagram model with
//! queries the model itself does not provide: which edges a set of shapes
//! visited, which elements a case instance's completed set implies, lookup
//! by display name, and kind classification. All add-ons read the model
//! through the [`registry::ElementRegistry`] capability and never mutate
//! it.
//!
//! - [`paths`] - visited-edge and case-path resolution
//! - [`search`] - name-based element lookup
//! - [`identify`] - kind classification by element id
//! - [`plugins`] - instance-scoped plugin registration
//!
//! The element model and the in-memory [`model::DiagramModel`] live in the
//! `flowpath-core` crate and are re-exported here.

pub mod identify;
pub mod paths;
pub mod plugins;
pub mod search;

pub use flowpath_core::{model, registry, semantic};
