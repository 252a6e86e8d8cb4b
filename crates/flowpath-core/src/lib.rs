//! Flowpath Core Types and Definitions
//!
//! This crate provides the foundational types for the Flowpath BPMN add-on
//! libraries. It includes:
//!
//! - **Semantic**: the element model of a process diagram ([`semantic`]
//!   module): shapes, edges, kinds, and adjacency
//! - **Registry**: the read-only access capability add-ons are built on
//!   ([`registry::ElementRegistry`])
//! - **Model**: an insertion-ordered in-memory implementation with a JSON
//!   document format ([`model::DiagramModel`])

pub mod model;
pub mod registry;
pub mod semantic;
