//! Path resolution over a diagram model.
//!
//! Two resolvers share one inference rule: an edge counts as *visited* by a
//! set of shapes when its id appears in the `incoming` list of one of those
//! shapes AND in the `outgoing` list of one of them. In other words, some
//! listed shape can produce the edge and some listed shape can consume it.
//!
//! - [`PathResolver`] answers the direct question: which edges were visited
//!   by a given set of shape ids.
//! - [`CasePathResolver`] starts from a mixed set of "completed" element
//!   ids (shapes and edges, typically reported by a process engine) and
//!   computes the complementary elements implied by connectivity:
//!
//! ```text
//! compute(completed_ids)
//! ├─ provided: what the caller named, split into shapes / edges
//! └─ computed: what connectivity implies on top of that
//!    ├─ edges: visited-edge rule over the provided shapes
//!    └─ shapes: endpoints of the provided edges
//! ```
//!
//! Everything is a pure query: unknown ids are skipped silently, inputs may
//! contain duplicates, outputs are deduplicated and keep first-occurrence
//! order, and repeated calls over an unchanged model return identical
//! results.
//!
//! Adjacency is trusted as stored, one side per direction of inference:
//! shape `incoming`/`outgoing` lists drive edge inference and edge
//! `sourceRef`/`targetRef` drive shape inference. Contradictions between
//! the two sides are never reconciled and flow through to the result.

use std::collections::HashSet;

use indexmap::IndexSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use flowpath_core::{
    registry::ElementRegistry,
    semantic::{EdgeSemantic, Element, ShapeSemantic},
};

/// Edge ids visited by the given shapes.
///
/// Aggregates the shapes' `incoming` and `outgoing` lists (shape order,
/// then within-shape order) and returns the ids present in both
/// aggregates, deduplicated, in first-occurrence order of the incoming
/// aggregate. Both resolvers delegate here so their edge-inference
/// semantics cannot diverge.
pub fn infer_visited_edge_ids(shapes: &[ShapeSemantic]) -> Vec<String> {
    let all_outgoing: HashSet<&str> = shapes
        .iter()
        .flat_map(|shape| shape.outgoing())
        .map(String::as_str)
        .collect();

    let mut visited: IndexSet<&str> = IndexSet::new();
    for shape in shapes {
        for edge_id in shape.incoming() {
            if all_outgoing.contains(edge_id.as_str()) {
                visited.insert(edge_id.as_str());
            }
        }
    }

    visited.into_iter().map(str::to_string).collect()
}

/// Resolves the edges visited by a set of shapes.
///
/// # Examples
///
/// ```rust
/// use flowpath::paths::PathResolver;
/// use flowpath_core::model::DiagramModel;
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
///     Element::from(ShapeSemantic::new(
///         "Task_1",
///         None,
///         ShapeKind::Task,
///         vec!["Flow_A".to_string()],
///         vec!["Flow_B".to_string()],
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
/// let resolver = PathResolver::new(&model);
/// let ids = vec!["StartEvent_1".to_string(), "Task_1".to_string()];
/// assert_eq!(resolver.get_visited_edges(&ids), ["Flow_A"]);
/// ```
pub struct PathResolver<'a, R: ElementRegistry> {
    registry: &'a R,
}

impl<'a, R: ElementRegistry> PathResolver<'a, R> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Ids of the edges visited by the given shapes.
    ///
    /// Ids that match nothing are skipped, ids of edges are ignored, and
    /// duplicated ids behave like a single occurrence. The result is
    /// deduplicated and ordered by first occurrence in the aggregated
    /// incoming lists of the resolved shapes. Never fails; an empty or
    /// fully unknown input yields an empty result.
    pub fn get_visited_edges(&self, shape_ids: &[String]) -> Vec<String> {
        let shapes: Vec<ShapeSemantic> = self
            .registry
            .resolve_ids(shape_ids)
            .into_iter()
            .filter_map(Element::into_shape)
            .collect();
        debug!(input_count = shape_ids.len(), shapes_count = shapes.len(); "Resolving visited edges");

        let visited = infer_visited_edge_ids(&shapes);
        trace!(visited:?; "Visited edges inferred");
        visited
    }
}

/// Input of [`CasePathResolver::compute`].
///
/// `completed_ids` may mix shape and edge ids, contain duplicates, and name
/// elements that do not exist; the resolver sorts all of that out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePathResolverInput {
    pub completed_ids: Vec<String>,
}

/// Shapes and edges of one element state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedElements {
    pub shapes: Vec<ShapeSemantic>,
    pub edges: Vec<EdgeSemantic>,
}

/// One group of the case path document.
///
/// Only the `completed` state exists today; the nesting leaves room for
/// sibling states (pending, faulted) without reshaping the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElements {
    pub completed: CompletedElements,
}

/// Output of [`CasePathResolver::compute`].
///
/// `provided` holds the elements the caller named; `computed` holds the
/// elements inferred from connectivity. No id ever appears in both groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePathResolverOutput {
    pub provided: PathElements,
    pub computed: PathElements,
}

/// Resolves the full path of a case instance from its completed elements.
///
/// A process engine reports which elements a case went through, usually as
/// a mix of activity and flow ids. `compute` classifies those ids and fills
/// the gaps: edges whose endpoints are both completed, and shapes sitting
/// at the endpoints of completed edges.
pub struct CasePathResolver<'a, R: ElementRegistry> {
    registry: &'a R,
}

impl<'a, R: ElementRegistry> CasePathResolver<'a, R> {
    /// Create a resolver over the given registry.
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Classify the provided ids and compute the elements they imply.
    ///
    /// The four output sequences are deduplicated, keep first-occurrence
    /// order, and contain full element snapshots. Computed elements never
    /// repeat an id present anywhere in `completed_ids`, so providing an
    /// element always removes it from the computed side. Never fails.
    pub fn compute(&self, input: CasePathResolverInput) -> CasePathResolverOutput {
        let input_ids: HashSet<&str> = input.completed_ids.iter().map(String::as_str).collect();

        // Classification: the registry already dedups by first occurrence,
        // so each partition keeps input order per family.
        let mut provided_shapes = Vec::new();
        let mut provided_edges = Vec::new();
        for element in self.registry.resolve_ids(&input.completed_ids) {
            match element {
                Element::Shape(shape) => provided_shapes.push(shape),
                Element::Edge(edge) => provided_edges.push(edge),
            }
        }
        debug!(
            input_count = input.completed_ids.len(),
            provided_shapes_count = provided_shapes.len(),
            provided_edges_count = provided_edges.len();
            "Computing case path"
        );

        let computed_edges = self.compute_edges(&provided_shapes, &input_ids);
        let computed_shapes = self.compute_shapes(&provided_edges, &input_ids);

        CasePathResolverOutput {
            provided: PathElements {
                completed: CompletedElements {
                    shapes: provided_shapes,
                    edges: provided_edges,
                },
            },
            computed: PathElements {
                completed: CompletedElements {
                    shapes: computed_shapes,
                    edges: computed_edges,
                },
            },
        }
    }

    /// Edges implied by the provided shapes, minus anything already
    /// provided.
    fn compute_edges(
        &self,
        provided_shapes: &[ShapeSemantic],
        input_ids: &HashSet<&str>,
    ) -> Vec<EdgeSemantic> {
        let candidate_ids: Vec<String> = infer_visited_edge_ids(provided_shapes)
            .into_iter()
            .filter(|id| !input_ids.contains(id.as_str()))
            .collect();
        trace!(candidate_ids:?; "Computed edge candidates");

        // Ids resolving to anything but an edge are dropped: adjacency
        // lists are trusted, not validated.
        self.registry
            .resolve_ids(&candidate_ids)
            .into_iter()
            .filter_map(Element::into_edge)
            .collect()
    }

    /// Shapes implied by the provided edges, minus anything already
    /// provided. Each edge contributes its source, then its target.
    fn compute_shapes(
        &self,
        provided_edges: &[EdgeSemantic],
        input_ids: &HashSet<&str>,
    ) -> Vec<ShapeSemantic> {
        let mut candidates: IndexSet<&str> = IndexSet::new();
        for edge in provided_edges {
            for shape_id in [edge.source_ref(), edge.target_ref()] {
                if !input_ids.contains(shape_id) {
                    candidates.insert(shape_id);
                }
            }
        }
        let candidate_ids: Vec<String> = candidates.into_iter().map(str::to_string).collect();
        trace!(candidate_ids:?; "Computed shape candidates");

        self.registry
            .resolve_ids(&candidate_ids)
            .into_iter()
            .filter_map(Element::into_shape)
            .collect()
    }
}
