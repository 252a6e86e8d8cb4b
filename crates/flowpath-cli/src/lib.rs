//! CLI logic for the Flowpath diagram tool.
//!
//! This module contains the core CLI logic for the Flowpath diagram tool:
//! loading a diagram model from disk, dispatching to the resolver queries
//! and rendering their results.

mod args;

pub use args::{Args, Command};

use std::{fs, str::FromStr};

use log::{debug, info};
use thiserror::Error;

use flowpath::model::DiagramModel;
use flowpath::paths::{
    CasePathResolver, CasePathResolverInput, CasePathResolverOutput, CompletedElements,
    PathResolver,
};
use flowpath::search::{ElementsSearcher, SearchOptions};
use flowpath::semantic::{Element, ElementKind};

/// Errors surfaced by the CLI layer
///
/// # Variants
///
/// - `Io` - the model file could not be read
/// - `Parse` - the model file is not a valid element list
/// - `UnknownKind` - a `--kinds` entry names no element kind
/// - `NameNotFound` - the searched name matched no element
/// - `Render` - a result could not be rendered as JSON
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown element kind '{0}'")]
    UnknownKind(String),

    #[error("no element named '{0}'")]
    NameNotFound(String),

    #[error("cannot render result: {0}")]
    Render(#[source] serde_json::Error),
}

/// Run the Flowpath CLI application
///
/// Loads the model named by the subcommand, runs the requested query and
/// prints the result to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Model parsing errors, including duplicate element ids
/// - Unknown `--kinds` entries
/// - A search that matches nothing
///
/// Unknown element ids inside a well-formed model are not errors; the
/// resolvers skip them silently.
pub fn run(args: &Args) -> Result<(), CliError> {
    let output = match &args.command {
        Command::VisitedEdges { model, ids } => {
            let model = load_model(model)?;
            let resolver = PathResolver::new(&model);
            render_visited_edges(&resolver.get_visited_edges(ids), args.json)?
        }
        Command::CasePaths { model, ids } => {
            let model = load_model(model)?;
            let resolver = CasePathResolver::new(&model);
            let report = resolver.compute(CasePathResolverInput {
                completed_ids: ids.clone(),
            });
            render_case_paths(&report, args.json)?
        }
        Command::Search { model, name, kinds } => {
            let model = load_model(model)?;
            let options = parse_search_options(kinds)?;
            let searcher = ElementsSearcher::new(&model);
            let element = searcher
                .element_by_name_with(name, &options)
                .ok_or_else(|| CliError::NameNotFound(name.clone()))?;
            render_element(&element, args.json)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

fn load_model(path: &str) -> Result<DiagramModel, CliError> {
    info!(model_path = path; "Loading diagram model");

    let source = fs::read_to_string(path)?;
    let model: DiagramModel = serde_json::from_str(&source)?;
    debug!(elements_count = model.len(); "Model loaded");

    Ok(model)
}

fn parse_search_options(kinds: &[String]) -> Result<SearchOptions, CliError> {
    if kinds.is_empty() {
        return Ok(SearchOptions::new());
    }

    let kinds = kinds
        .iter()
        .map(|kind| ElementKind::from_str(kind).map_err(|_| CliError::UnknownKind(kind.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SearchOptions::new().kinds(kinds))
}

fn render_visited_edges(edge_ids: &[String], json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(edge_ids).map_err(CliError::Render);
    }

    Ok(edge_ids.join("\n"))
}

fn render_case_paths(report: &CasePathResolverOutput, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(report).map_err(CliError::Render);
    }

    let mut lines = vec!["provided:".to_string()];
    push_elements(&mut lines, &report.provided.completed);
    lines.push("computed:".to_string());
    push_elements(&mut lines, &report.computed.completed);
    Ok(lines.join("\n"))
}

fn push_elements(lines: &mut Vec<String>, elements: &CompletedElements) {
    for shape in &elements.shapes {
        lines.push(format!("  shape {} ({})", shape.id(), shape.kind()));
    }
    for edge in &elements.edges {
        lines.push(format!("  edge  {} ({})", edge.id(), edge.kind()));
    }
}

fn render_element(element: &Element, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(element).map_err(CliError::Render);
    }

    Ok(format!("{}\t{}", element.id(), element.kind()))
}
