use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::RoleGraph;
use super::parse::parse_dataset;

const BUILTIN_DATASET: &str = include_str!("../../assets/roles.json");

pub fn load_builtin_dataset() -> Result<RoleGraph> {
    let graph = parse_dataset(BUILTIN_DATASET).context("failed to parse built-in dataset")?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "loaded built-in dataset"
    );
    Ok(graph)
}

pub fn load_dataset_file(path: &Path) -> Result<RoleGraph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let graph =
        parse_dataset(&raw).with_context(|| format!("failed to parse dataset {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "loaded dataset"
    );
    Ok(graph)
}
