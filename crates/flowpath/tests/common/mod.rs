//! Shared diagram fixtures for the resolver integration tests.
//!
//! The models mirror the reference processes used across the test suites:
//! a simple process with one split/join, a collaboration with pools and
//! message flows, and a straight line carrying contradictory adjacency.

#![allow(dead_code)]

use flowpath_core::{
    model::DiagramModel,
    semantic::{EdgeSemantic, Element, FlowKind, ShapeKind, ShapeSemantic},
};

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn shape(
    id: &str,
    kind: ShapeKind,
    name: Option<&str>,
    incoming: &[&str],
    outgoing: &[&str],
) -> Element {
    Element::from(ShapeSemantic::new(
        id,
        name.map(str::to_string),
        kind,
        ids(incoming),
        ids(outgoing),
    ))
}

pub fn flow(id: &str, source: &str, target: &str) -> Element {
    Element::from(EdgeSemantic::new(
        id,
        None,
        FlowKind::SequenceFlow,
        source,
        target,
    ))
}

pub fn message_flow(id: &str, source: &str, target: &str) -> Element {
    Element::from(EdgeSemantic::new(
        id,
        None,
        FlowKind::MessageFlow,
        source,
        target,
    ))
}

/// ```text
/// StartEvent_1 --> Task_1 --> Gateway_1 --> Task_2_1 ----------------------> Gateway_2 --> Task_3 --> EndEvent_1
///                                |--------> Task_2_2 --> IntermediateEvent_1 ---|
/// ```
pub fn simple_process() -> DiagramModel {
    DiagramModel::from_elements([
        shape(
            "StartEvent_1",
            ShapeKind::StartEvent,
            Some("Start"),
            &[],
            &["Flow_StartEvent_1_Task_1"],
        ),
        shape(
            "Task_1",
            ShapeKind::Task,
            Some("Task 1"),
            &["Flow_StartEvent_1_Task_1"],
            &["Flow_Task_1_Gateway_1"],
        ),
        shape(
            "Gateway_1",
            ShapeKind::ExclusiveGateway,
            None,
            &["Flow_Task_1_Gateway_1"],
            &["Flow_Gateway_1_Task_2_1", "Flow_Gateway_1_Task_2_2"],
        ),
        shape(
            "Task_2_1",
            ShapeKind::UserTask,
            Some("Task 2.1"),
            &["Flow_Gateway_1_Task_2_1"],
            &["Flow_Task_2_1_Gateway_2"],
        ),
        shape(
            "Task_2_2",
            ShapeKind::Task,
            Some("Task 2.2"),
            &["Flow_Gateway_1_Task_2_2"],
            &["Flow_Task_2_2_IntermediateEvent_1"],
        ),
        shape(
            "IntermediateEvent_1",
            ShapeKind::IntermediateCatchEvent,
            Some("Timer intermediate event"),
            &["Flow_Task_2_2_IntermediateEvent_1"],
            &["Flow_IntermediateEvent_1_Gateway_2"],
        ),
        shape(
            "Gateway_2",
            ShapeKind::ExclusiveGateway,
            None,
            &["Flow_IntermediateEvent_1_Gateway_2", "Flow_Task_2_1_Gateway_2"],
            &["Flow_Gateway_2_Task_3"],
        ),
        shape(
            "Task_3",
            ShapeKind::Task,
            Some("Task 3"),
            &["Flow_Gateway_2_Task_3"],
            &["Flow_Task_3_EndEvent_1"],
        ),
        shape(
            "EndEvent_1",
            ShapeKind::EndEvent,
            Some("End"),
            &["Flow_Task_3_EndEvent_1"],
            &[],
        ),
        flow("Flow_StartEvent_1_Task_1", "StartEvent_1", "Task_1"),
        flow("Flow_Task_1_Gateway_1", "Task_1", "Gateway_1"),
        flow("Flow_Gateway_1_Task_2_1", "Gateway_1", "Task_2_1"),
        flow("Flow_Gateway_1_Task_2_2", "Gateway_1", "Task_2_2"),
        flow("Flow_Task_2_1_Gateway_2", "Task_2_1", "Gateway_2"),
        flow(
            "Flow_Task_2_2_IntermediateEvent_1",
            "Task_2_2",
            "IntermediateEvent_1",
        ),
        flow(
            "Flow_IntermediateEvent_1_Gateway_2",
            "IntermediateEvent_1",
            "Gateway_2",
        ),
        flow("Flow_Gateway_2_Task_3", "Gateway_2", "Task_3"),
        flow("Flow_Task_3_EndEvent_1", "Task_3", "EndEvent_1"),
    ])
    .unwrap()
}

/// Three pools exchanging messages: a message end event in pool 1 caught by
/// a boundary event in pool 2, and an intermediate throw event in pool 2
/// caught by an intermediate catch event in pool 3.
pub fn pools_with_message_flows() -> DiagramModel {
    DiagramModel::from_elements([
        // pool 1
        shape(
            "StartEvent_1_1",
            ShapeKind::StartEvent,
            None,
            &[],
            &["Flow_StartEvent_1_1_Task_1_1"],
        ),
        shape(
            "Task_1_1",
            ShapeKind::Task,
            Some("Task 1.1"),
            &["Flow_StartEvent_1_1_Task_1_1"],
            &["Flow_Task_1_1_EndEvent_Message_1"],
        ),
        shape(
            "EndEvent_Message_1",
            ShapeKind::EndEvent,
            Some("Message end"),
            &["Flow_Task_1_1_EndEvent_Message_1"],
            &["MessageFlow_1-2"],
        ),
        // pool 2
        shape(
            "Task_2_1",
            ShapeKind::Task,
            Some("Task 2.1"),
            &[],
            &["Flow_Task_2_1_Throw_Message_1"],
        ),
        shape(
            "BoundaryEvent_1",
            ShapeKind::BoundaryEvent,
            None,
            &["MessageFlow_1-2"],
            &["Flow_BoundaryEvent_1_Task_2_2"],
        ),
        shape(
            "Task_2_2",
            ShapeKind::Task,
            Some("Task 2.2"),
            &["Flow_BoundaryEvent_1_Task_2_2"],
            &[],
        ),
        shape(
            "IntermediateEvent_Throw_Message_1",
            ShapeKind::IntermediateThrowEvent,
            Some("Message throw"),
            &["Flow_Task_2_1_Throw_Message_1"],
            &["Flow_Throw_Message_1_Gateway_1", "MessageFlow_2-3"],
        ),
        shape(
            "Gateway_1",
            ShapeKind::ExclusiveGateway,
            None,
            &["Flow_Throw_Message_1_Gateway_1"],
            &["Flow_Gateway_1_Task_2_3"],
        ),
        shape(
            "Task_2_3",
            ShapeKind::Task,
            Some("Task 2.3"),
            &["Flow_Gateway_1_Task_2_3"],
            &[],
        ),
        // pool 3
        shape(
            "IntermediateEvent_Catch_Message_1",
            ShapeKind::IntermediateCatchEvent,
            Some("Message catch"),
            &["MessageFlow_2-3"],
            &["Flow_Catch_Message_1_Task_3_1"],
        ),
        shape(
            "Task_3_1",
            ShapeKind::Task,
            Some("Task 3.1"),
            &["Flow_Catch_Message_1_Task_3_1"],
            &[],
        ),
        flow("Flow_StartEvent_1_1_Task_1_1", "StartEvent_1_1", "Task_1_1"),
        flow(
            "Flow_Task_1_1_EndEvent_Message_1",
            "Task_1_1",
            "EndEvent_Message_1",
        ),
        message_flow("MessageFlow_1-2", "EndEvent_Message_1", "BoundaryEvent_1"),
        flow(
            "Flow_BoundaryEvent_1_Task_2_2",
            "BoundaryEvent_1",
            "Task_2_2",
        ),
        flow(
            "Flow_Task_2_1_Throw_Message_1",
            "Task_2_1",
            "IntermediateEvent_Throw_Message_1",
        ),
        flow(
            "Flow_Throw_Message_1_Gateway_1",
            "IntermediateEvent_Throw_Message_1",
            "Gateway_1",
        ),
        message_flow(
            "MessageFlow_2-3",
            "IntermediateEvent_Throw_Message_1",
            "IntermediateEvent_Catch_Message_1",
        ),
        flow("Flow_Gateway_1_Task_2_3", "Gateway_1", "Task_2_3"),
        flow(
            "Flow_Catch_Message_1_Task_3_1",
            "IntermediateEvent_Catch_Message_1",
            "Task_3_1",
        ),
    ])
    .unwrap()
}

/// `StartEvent_1 --> Task_1 --> Task_2 --> Task_3 --> Task_4 --> EndEvent_1`
/// where `StartEvent_1.outgoing` wrongly also lists the Task_1/Task_2 flow
/// and `EndEvent_1.incoming` wrongly also lists the Task_3/Task_4 flow.
pub fn straight_line_with_wrong_adjacency() -> DiagramModel {
    DiagramModel::from_elements([
        shape(
            "StartEvent_1",
            ShapeKind::StartEvent,
            None,
            &[],
            &["Flow_StartEvent_1_Task_1", "Flow_Task_1_Task_2"],
        ),
        shape(
            "Task_1",
            ShapeKind::Task,
            Some("Task 1"),
            &["Flow_StartEvent_1_Task_1"],
            &["Flow_Task_1_Task_2"],
        ),
        shape(
            "Task_2",
            ShapeKind::Task,
            Some("Task 2"),
            &["Flow_Task_1_Task_2"],
            &["Flow_Task_2_Task_3"],
        ),
        shape(
            "Task_3",
            ShapeKind::Task,
            Some("Task 3"),
            &["Flow_Task_2_Task_3"],
            &["Flow_Task_3_Task_4"],
        ),
        shape(
            "Task_4",
            ShapeKind::Task,
            Some("Task 4"),
            &["Flow_Task_3_Task_4"],
            &["Flow_Task_4_EndEvent_1"],
        ),
        shape(
            "EndEvent_1",
            ShapeKind::EndEvent,
            None,
            &["Flow_Task_4_EndEvent_1", "Flow_Task_3_Task_4"],
            &[],
        ),
        flow("Flow_StartEvent_1_Task_1", "StartEvent_1", "Task_1"),
        flow("Flow_Task_1_Task_2", "Task_1", "Task_2"),
        flow("Flow_Task_2_Task_3", "Task_2", "Task_3"),
        flow("Flow_Task_3_Task_4", "Task_3", "Task_4"),
        flow("Flow_Task_4_EndEvent_1", "Task_4", "EndEvent_1"),
    ])
    .unwrap()
}
