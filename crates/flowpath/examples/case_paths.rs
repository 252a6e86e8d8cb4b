//! Example: Resolving paths from a completed-elements report
//!
//! This example builds a small order process in memory, asks the path
//! resolver for the edges a finished case went through, and then lets the
//! case path resolver reconstruct the full path from the partial element
//! ids a process engine would typically report.

use flowpath::paths::{CasePathResolver, CasePathResolverInput, PathResolver};
use flowpath::semantic::{EdgeSemantic, Element, FlowKind, ShapeKind, ShapeSemantic};
use flowpath_core::model::DiagramModel;

fn shape(id: &str, name: &str, kind: ShapeKind, incoming: &[&str], outgoing: &[&str]) -> Element {
    Element::from(ShapeSemantic::new(
        id,
        Some(name.to_string()),
        kind,
        incoming.iter().map(|s| s.to_string()).collect(),
        outgoing.iter().map(|s| s.to_string()).collect(),
    ))
}

fn flow(id: &str, source: &str, target: &str) -> Element {
    Element::from(EdgeSemantic::new(
        id,
        None,
        FlowKind::SequenceFlow,
        source,
        target,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Order process: validate, then either ship or reject.
    let model = DiagramModel::from_elements([
        shape(
            "StartEvent_1",
            "Order received",
            ShapeKind::StartEvent,
            &[],
            &["Flow_1"],
        ),
        shape(
            "Task_Validate",
            "Validate order",
            ShapeKind::ServiceTask,
            &["Flow_1"],
            &["Flow_2"],
        ),
        shape(
            "Gateway_1",
            "Valid?",
            ShapeKind::ExclusiveGateway,
            &["Flow_2"],
            &["Flow_3", "Flow_4"],
        ),
        shape(
            "Task_Ship",
            "Ship order",
            ShapeKind::UserTask,
            &["Flow_3"],
            &["Flow_5"],
        ),
        shape(
            "Task_Reject",
            "Reject order",
            ShapeKind::ServiceTask,
            &["Flow_4"],
            &["Flow_6"],
        ),
        shape(
            "EndEvent_Shipped",
            "Order shipped",
            ShapeKind::EndEvent,
            &["Flow_5"],
            &[],
        ),
        shape(
            "EndEvent_Rejected",
            "Order rejected",
            ShapeKind::EndEvent,
            &["Flow_6"],
            &[],
        ),
        flow("Flow_1", "StartEvent_1", "Task_Validate"),
        flow("Flow_2", "Task_Validate", "Gateway_1"),
        flow("Flow_3", "Gateway_1", "Task_Ship"),
        flow("Flow_4", "Gateway_1", "Task_Reject"),
        flow("Flow_5", "Task_Ship", "EndEvent_Shipped"),
        flow("Flow_6", "Task_Reject", "EndEvent_Rejected"),
    ])?;
    println!("Model loaded: {} elements\n", model.len());

    // Which edges did a case visit, given the shapes it completed?
    let resolver = PathResolver::new(&model);
    let happy_path = vec![
        "StartEvent_1".to_string(),
        "Task_Validate".to_string(),
        "Gateway_1".to_string(),
        "Task_Ship".to_string(),
        "EndEvent_Shipped".to_string(),
    ];
    let visited = resolver.get_visited_edges(&happy_path);
    println!("Edges visited by the happy path: {visited:?}\n");

    // A process engine usually reports only part of the path, as a mix of
    // shape and edge ids. The case path resolver fills in the rest.
    let case_resolver = CasePathResolver::new(&model);
    let output = case_resolver.compute(CasePathResolverInput {
        completed_ids: vec![
            "StartEvent_1".to_string(),
            "Flow_2".to_string(),
            "Task_Ship".to_string(),
            "EndEvent_Shipped".to_string(),
        ],
    });

    println!("Provided by the engine:");
    for shape in &output.provided.completed.shapes {
        println!("  shape {} ({})", shape.id(), shape.name().unwrap_or("-"));
    }
    for edge in &output.provided.completed.edges {
        println!("  edge  {}", edge.id());
    }
    println!("Computed from connectivity:");
    for shape in &output.computed.completed.shapes {
        println!("  shape {} ({})", shape.id(), shape.name().unwrap_or("-"));
    }
    for edge in &output.computed.completed.edges {
        println!("  edge  {}", edge.id());
    }

    // The full document also serializes, e.g. for an HTTP response.
    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
