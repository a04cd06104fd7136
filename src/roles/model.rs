use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use super::category::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub short_label: String,
    pub category: Category,
    pub role: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

/// Immutable node/edge set with adjacency lookups.
///
/// Edges are kept exactly as supplied, including ones that reference unknown
/// ids or loop back onto their source. Those are reported once here and left
/// out of every adjacency structure; consumers resolve endpoints through
/// [`RoleGraph::index_of`] and skip what does not resolve.
#[derive(Clone, Debug)]
pub struct RoleGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index_by_id: HashMap<NodeId, usize>,
    neighbors: Vec<BTreeSet<NodeId>>,
    outgoing: Vec<Vec<NodeId>>,
    incoming: Vec<Vec<NodeId>>,
}

impl RoleGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut unique_nodes = Vec::with_capacity(nodes.len());
        let mut index_by_id = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if index_by_id.contains_key(&node.id) {
                tracing::warn!("duplicate node id {}; keeping the first occurrence", node.id);
                continue;
            }
            index_by_id.insert(node.id, unique_nodes.len());
            unique_nodes.push(node);
        }

        let node_count = unique_nodes.len();
        let mut neighbors = vec![BTreeSet::new(); node_count];
        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];

        for edge in &edges {
            let (Some(&source), Some(&target)) =
                (index_by_id.get(&edge.source), index_by_id.get(&edge.target))
            else {
                tracing::warn!(
                    "edge {} -> {} references a node that is not in the dataset; it will not be drawn",
                    edge.source,
                    edge.target
                );
                continue;
            };

            if source == target {
                tracing::warn!("self-loop on {} ignored", edge.source);
                continue;
            }

            neighbors[source].insert(edge.target);
            neighbors[target].insert(edge.source);
            if !outgoing[source].contains(&edge.target) {
                outgoing[source].push(edge.target);
            }
            if !incoming[target].contains(&edge.source) {
                incoming[target].push(edge.source);
            }
        }

        Self {
            nodes: unique_nodes,
            edges,
            index_by_id,
            neighbors,
            outgoing,
            incoming,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index_by_id.get(&id).copied()
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.index_of(id).and_then(|index| self.nodes.get(index))
    }

    pub fn neighbors(&self, id: NodeId) -> BTreeSet<NodeId> {
        self.index_of(id)
            .and_then(|index| self.neighbors.get(index))
            .cloned()
            .unwrap_or_default()
    }

    pub fn outgoing(&self, id: NodeId) -> &[NodeId] {
        self.index_of(id)
            .and_then(|index| self.outgoing.get(index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn incoming(&self, id: NodeId) -> &[NodeId] {
        self.index_of(id)
            .and_then(|index| self.incoming.get(index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn resolve_edge(&self, edge: &Edge) -> Option<(usize, usize)> {
        let source = self.index_of(edge.source)?;
        let target = self.index_of(edge.target)?;
        (source != target).then_some((source, target))
    }

    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut counts = [0usize; Category::ALL.len()];
        for node in &self.nodes {
            counts[node.category.index()] += 1;
        }

        Category::ALL
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(category, count)| (*category, count))
            .collect()
    }
}
