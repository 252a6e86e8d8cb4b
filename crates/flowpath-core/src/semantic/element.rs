//! Diagram element types.
//!
//! An element is either a shape (a node of the diagram graph: activity,
//! gateway, event, container, artifact) or an edge (a directed connection:
//! sequence flow, message flow, association). Shapes carry their adjacency
//! as **ordered** lists of edge ids; edges carry the ids of their source
//! and target shapes. Ids are unique across both families combined.
//!
//! Adjacency is taken from the source document as-is. The two sides are
//! never validated against each other: a shape may list an edge id that no
//! edge object carries, and an edge may reference a shape that does not
//! list it back.

use serde::{Deserialize, Serialize};

use crate::semantic::kind::{ElementKind, FlowKind, ShapeKind};

/// A node of the diagram graph.
///
/// `incoming` and `outgoing` hold edge ids in document order; that order is
/// observable through every query built on top of the model, so it is
/// preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSemantic {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    kind: ShapeKind,
    #[serde(default)]
    incoming: Vec<String>,
    #[serde(default)]
    outgoing: Vec<String>,
}

impl ShapeSemantic {
    /// Create a new shape with its adjacency lists.
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        kind: ShapeKind,
        incoming: Vec<String>,
        outgoing: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            kind,
            incoming,
            outgoing,
        }
    }

    /// The shape id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Ordered ids of edges arriving at this shape.
    pub fn incoming(&self) -> &[String] {
        &self.incoming
    }

    /// Ordered ids of edges leaving this shape.
    pub fn outgoing(&self) -> &[String] {
        &self.outgoing
    }
}

/// A directed connection between two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSemantic {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    kind: FlowKind,
    source_ref: String,
    target_ref: String,
}

impl EdgeSemantic {
    /// Create a new edge from its endpoint shape ids.
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        kind: FlowKind,
        source_ref: impl Into<String>,
        target_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            kind,
            source_ref: source_ref.into(),
            target_ref: target_ref.into(),
        }
    }

    /// The edge id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The flow kind.
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Id of the shape this edge leaves.
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    /// Id of the shape this edge enters.
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Any diagram element.
///
/// The JSON representation is internally tagged: shapes serialize with
/// `"type": "shape"`, edges with `"type": "edge"`, alongside their own
/// fields.
///
/// # Variants
///
/// - `Shape` - a node of the diagram graph
/// - `Edge` - a directed connection between shapes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Shape(ShapeSemantic),
    Edge(EdgeSemantic),
}

impl Element {
    /// The element id.
    pub fn id(&self) -> &str {
        match self {
            Element::Shape(shape) => shape.id(),
            Element::Edge(edge) => edge.id(),
        }
    }

    /// The display label, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Shape(shape) => shape.name(),
            Element::Edge(edge) => edge.name(),
        }
    }

    /// The element kind, shape or flow.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Shape(shape) => ElementKind::Shape(shape.kind()),
            Element::Edge(edge) => ElementKind::Flow(edge.kind()),
        }
    }

    /// Whether this element is a shape.
    pub fn is_shape(&self) -> bool {
        matches!(self, Element::Shape(_))
    }

    /// Borrow the shape data, if this element is a shape.
    pub fn as_shape(&self) -> Option<&ShapeSemantic> {
        match self {
            Element::Shape(shape) => Some(shape),
            Element::Edge(_) => None,
        }
    }

    /// Borrow the edge data, if this element is an edge.
    pub fn as_edge(&self) -> Option<&EdgeSemantic> {
        match self {
            Element::Shape(_) => None,
            Element::Edge(edge) => Some(edge),
        }
    }

    /// Consume the element into its shape data, if it is a shape.
    pub fn into_shape(self) -> Option<ShapeSemantic> {
        match self {
            Element::Shape(shape) => Some(shape),
            Element::Edge(_) => None,
        }
    }

    /// Consume the element into its edge data, if it is an edge.
    pub fn into_edge(self) -> Option<EdgeSemantic> {
        match self {
            Element::Shape(_) => None,
            Element::Edge(edge) => Some(edge),
        }
    }
}

impl From<ShapeSemantic> for Element {
    fn from(shape: ShapeSemantic) -> Self {
        Element::Shape(shape)
    }
}

impl From<EdgeSemantic> for Element {
    fn from(edge: EdgeSemantic) -> Self {
        Element::Edge(edge)
    }
}
