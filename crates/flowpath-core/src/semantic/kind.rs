//! Element kind taxonomy.
//!
//! Kinds mirror the BPMN vocabulary: shapes carry a [`ShapeKind`] (flow
//! nodes, containers, artifacts), edges carry a [`FlowKind`] (sequence
//! flows, message flows, associations). [`ElementKind`] unifies the two for
//! APIs that span both families. Serialized names use the BPMN camelCase
//! spellings (`userTask`, `sequenceFlow`, ...).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Kind of a diagram shape.
///
/// Covers the flow-node kinds (events, gateways, activities), the
/// containers (`Pool`, `Lane`) and the artifacts (`Group`,
/// `TextAnnotation`). The category helpers ([`ShapeKind::is_event`],
/// [`ShapeKind::is_activity`], ...) partition the variants so callers never
/// have to enumerate kinds themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    /// Participant container, drawn as a pool in collaboration diagrams.
    Pool,
    /// Sub-partition of a pool.
    Lane,
    CallActivity,
    SubProcess,
    Task,
    UserTask,
    ServiceTask,
    ReceiveTask,
    SendTask,
    ManualTask,
    ScriptTask,
    BusinessRuleTask,
    /// Artifact grouping related elements, no flow semantics.
    Group,
    /// Artifact holding free text, no flow semantics.
    TextAnnotation,
    ComplexGateway,
    EventBasedGateway,
    ExclusiveGateway,
    InclusiveGateway,
    ParallelGateway,
    StartEvent,
    EndEvent,
    IntermediateCatchEvent,
    IntermediateThrowEvent,
    BoundaryEvent,
}

impl ShapeKind {
    /// All shape kinds in declaration order.
    ///
    /// This order is the search order used by name-based lookup when no
    /// kind restriction is given.
    pub const ALL: [ShapeKind; 24] = [
        ShapeKind::Pool,
        ShapeKind::Lane,
        ShapeKind::CallActivity,
        ShapeKind::SubProcess,
        ShapeKind::Task,
        ShapeKind::UserTask,
        ShapeKind::ServiceTask,
        ShapeKind::ReceiveTask,
        ShapeKind::SendTask,
        ShapeKind::ManualTask,
        ShapeKind::ScriptTask,
        ShapeKind::BusinessRuleTask,
        ShapeKind::Group,
        ShapeKind::TextAnnotation,
        ShapeKind::ComplexGateway,
        ShapeKind::EventBasedGateway,
        ShapeKind::ExclusiveGateway,
        ShapeKind::InclusiveGateway,
        ShapeKind::ParallelGateway,
        ShapeKind::StartEvent,
        ShapeKind::EndEvent,
        ShapeKind::IntermediateCatchEvent,
        ShapeKind::IntermediateThrowEvent,
        ShapeKind::BoundaryEvent,
    ];

    /// Whether this kind is a BPMN event.
    pub fn is_event(self) -> bool {
        matches!(
            self,
            ShapeKind::StartEvent
                | ShapeKind::EndEvent
                | ShapeKind::IntermediateCatchEvent
                | ShapeKind::IntermediateThrowEvent
                | ShapeKind::BoundaryEvent
        )
    }

    /// Whether this kind is a BPMN gateway.
    pub fn is_gateway(self) -> bool {
        matches!(
            self,
            ShapeKind::ComplexGateway
                | ShapeKind::EventBasedGateway
                | ShapeKind::ExclusiveGateway
                | ShapeKind::InclusiveGateway
                | ShapeKind::ParallelGateway
        )
    }

    /// Whether this kind is a BPMN activity (any task flavor, call
    /// activity, or sub-process).
    pub fn is_activity(self) -> bool {
        matches!(
            self,
            ShapeKind::CallActivity
                | ShapeKind::SubProcess
                | ShapeKind::Task
                | ShapeKind::UserTask
                | ShapeKind::ServiceTask
                | ShapeKind::ReceiveTask
                | ShapeKind::SendTask
                | ShapeKind::ManualTask
                | ShapeKind::ScriptTask
                | ShapeKind::BusinessRuleTask
        )
    }

    /// Whether this kind is an artifact (group or text annotation).
    pub fn is_artifact(self) -> bool {
        matches!(self, ShapeKind::Group | ShapeKind::TextAnnotation)
    }

    /// Whether this kind is a container (pool or lane).
    pub fn is_container(self) -> bool {
        matches!(self, ShapeKind::Pool | ShapeKind::Lane)
    }

    /// Whether this kind takes part in the flow: an event, a gateway, or an
    /// activity. Artifacts and containers are not flow nodes.
    pub fn is_flow_node(self) -> bool {
        self.is_event() || self.is_gateway() || self.is_activity()
    }
}

impl From<ShapeKind> for &'static str {
    fn from(val: ShapeKind) -> Self {
        match val {
            ShapeKind::Pool => "pool",
            ShapeKind::Lane => "lane",
            ShapeKind::CallActivity => "callActivity",
            ShapeKind::SubProcess => "subProcess",
            ShapeKind::Task => "task",
            ShapeKind::UserTask => "userTask",
            ShapeKind::ServiceTask => "serviceTask",
            ShapeKind::ReceiveTask => "receiveTask",
            ShapeKind::SendTask => "sendTask",
            ShapeKind::ManualTask => "manualTask",
            ShapeKind::ScriptTask => "scriptTask",
            ShapeKind::BusinessRuleTask => "businessRuleTask",
            ShapeKind::Group => "group",
            ShapeKind::TextAnnotation => "textAnnotation",
            ShapeKind::ComplexGateway => "complexGateway",
            ShapeKind::EventBasedGateway => "eventBasedGateway",
            ShapeKind::ExclusiveGateway => "exclusiveGateway",
            ShapeKind::InclusiveGateway => "inclusiveGateway",
            ShapeKind::ParallelGateway => "parallelGateway",
            ShapeKind::StartEvent => "startEvent",
            ShapeKind::EndEvent => "endEvent",
            ShapeKind::IntermediateCatchEvent => "intermediateCatchEvent",
            ShapeKind::IntermediateThrowEvent => "intermediateThrowEvent",
            ShapeKind::BoundaryEvent => "boundaryEvent",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| <&'static str>::from(*kind) == s)
            .ok_or("Unknown shape kind")
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Kind of a diagram edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowKind {
    SequenceFlow,
    MessageFlow,
    Association,
}

impl FlowKind {
    /// All flow kinds in declaration order.
    pub const ALL: [FlowKind; 3] = [
        FlowKind::SequenceFlow,
        FlowKind::MessageFlow,
        FlowKind::Association,
    ];
}

impl From<FlowKind> for &'static str {
    fn from(val: FlowKind) -> Self {
        match val {
            FlowKind::SequenceFlow => "sequenceFlow",
            FlowKind::MessageFlow => "messageFlow",
            FlowKind::Association => "association",
        }
    }
}

impl FromStr for FlowKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowKind::ALL
            .into_iter()
            .find(|kind| <&'static str>::from(*kind) == s)
            .ok_or("Unknown flow kind")
    }
}

impl Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Kind of any diagram element, shape or edge.
///
/// Used by APIs that accept a mixed kind list, such as kind-scoped registry
/// queries and name-based search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ElementKind {
    Shape(ShapeKind),
    Flow(FlowKind),
}

impl ElementKind {
    /// Iterate every element kind: all shape kinds first, then all flow
    /// kinds, in declaration order.
    pub fn all() -> impl Iterator<Item = ElementKind> {
        ShapeKind::ALL
            .into_iter()
            .map(ElementKind::Shape)
            .chain(FlowKind::ALL.into_iter().map(ElementKind::Flow))
    }

    /// The shape kind, if this is a shape kind.
    pub fn as_shape(self) -> Option<ShapeKind> {
        match self {
            ElementKind::Shape(kind) => Some(kind),
            ElementKind::Flow(_) => None,
        }
    }

    /// The flow kind, if this is a flow kind.
    pub fn as_flow(self) -> Option<FlowKind> {
        match self {
            ElementKind::Shape(_) => None,
            ElementKind::Flow(kind) => Some(kind),
        }
    }
}

impl From<ShapeKind> for ElementKind {
    fn from(kind: ShapeKind) -> Self {
        ElementKind::Shape(kind)
    }
}

impl From<FlowKind> for ElementKind {
    fn from(kind: FlowKind) -> Self {
        ElementKind::Flow(kind)
    }
}

impl FromStr for ElementKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::from_str(s)
            .map(ElementKind::Shape)
            .or_else(|_| FlowKind::from_str(s).map(ElementKind::Flow))
            .map_err(|_| "Unknown element kind")
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Shape(kind) => kind.fmt(f),
            ElementKind::Flow(kind) => kind.fmt(f),
        }
    }
}
