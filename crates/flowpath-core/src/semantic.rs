//! Semantic diagram model types.
//!
//! This module contains the element model consumed by every add-on: shapes
//! and edges with their ids, kinds, labels, and adjacency. The model is a
//! snapshot of an already elaborated diagram; nothing here parses BPMN or
//! builds a graph structure.
//!
//! # Organization
//!
//! - [`element`] - Elements: [`Element`], [`ShapeSemantic`], [`EdgeSemantic`]
//! - [`kind`] - Kind taxonomy: [`ShapeKind`], [`FlowKind`], [`ElementKind`]

pub mod element;
pub mod kind;

pub use element::*;
pub use kind::*;
