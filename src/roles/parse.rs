use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::util::initials;

use super::category::Category;
use super::model::{Edge, Node, NodeId, RoleGraph};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawNode {
    id: NodeId,
    label: String,
    #[serde(default)]
    short_label: Option<String>,
    category: Category,
    #[serde(default)]
    role: String,
    #[serde(default)]
    description: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub(super) struct RawEdge {
    source: NodeId,
    target: NodeId,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawDataset {
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let short_label = raw
            .short_label
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| initials(&raw.label));

        Node {
            id: raw.id,
            label: raw.label,
            short_label,
            category: raw.category,
            role: raw.role,
            description: raw.description,
        }
    }
}

pub(super) fn parse_dataset(raw: &str) -> Result<RoleGraph> {
    let dataset: RawDataset = serde_json::from_str(raw).context("invalid dataset JSON")?;

    if dataset.nodes.is_empty() {
        return Err(anyhow!("dataset contains no nodes"));
    }

    let nodes = dataset.nodes.into_iter().map(Node::from).collect::<Vec<_>>();
    let edges = dataset
        .edges
        .into_iter()
        .map(|raw| Edge {
            source: raw.source,
            target: raw.target,
        })
        .collect::<Vec<_>>();

    Ok(RoleGraph::new(nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_dataset() {
        let graph = parse_dataset(
            r#"{
                "nodes": [
                    {"id": 1, "label": "Chief Executive Officer", "shortLabel": "CEO", "category": "Leadership", "role": "CEO"},
                    {"id": 2, "label": "Head of People", "category": "HR", "role": "HR lead", "description": "Hiring"}
                ],
                "edges": [{"source": 1, "target": 2}]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        let people = graph.node_by_id(NodeId(2)).unwrap();
        assert_eq!(people.category, Category::HumanResources);
        assert_eq!(people.short_label, "HoP");
        assert_eq!(people.description, "Hiring");
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_blank_short_label_falls_back_to_initials() {
        let graph = parse_dataset(
            r#"{"nodes": [{"id": 7, "label": "Legal Counsel", "shortLabel": "  ", "category": "External"}]}"#,
        )
        .unwrap();

        assert_eq!(graph.node_by_id(NodeId(7)).unwrap().short_label, "LC");
    }

    #[test]
    fn test_rejects_empty_and_malformed_input() {
        assert!(parse_dataset(r#"{"nodes": [], "edges": []}"#).is_err());
        assert!(parse_dataset(r#"{"nodes": [{"id": 1}]}"#).is_err());
        assert!(parse_dataset(r#"{"nodes": [{"id": 1, "label": "X", "category": "Wizards"}]}"#).is_err());
        assert!(parse_dataset("not json").is_err());
    }
}
