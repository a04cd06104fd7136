use std::collections::BTreeSet;

use eframe::egui::{Color32, Pos2, vec2};

use crate::layout::Placement;
use crate::roles::{NodeId, RoleGraph};

use super::theme::{ThemeMode, color_for, palette};
use super::viewport::ViewportTransform;

/// Opacities and stroke widths of the selection highlight. Only their
/// relative ordering matters.
#[derive(Clone, Copy, Debug)]
pub struct HighlightStyle {
    pub dimmed_node_opacity: f32,
    pub dimmed_edge_opacity: f32,
    pub edge_width: f32,
    pub emphasized_edge_width: f32,
    pub hovered_halo_width: f32,
    pub selected_halo_width: f32,
    pub halo_gap: f32,
    pub label_gap: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            dimmed_node_opacity: 0.4,
            dimmed_edge_opacity: 0.3,
            edge_width: 1.4,
            emphasized_edge_width: 2.8,
            hovered_halo_width: 2.0,
            selected_halo_width: 3.5,
            halo_gap: 4.0,
            label_gap: 4.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Emphasis {
    Dimmed,
    Normal,
    Neighbor,
    Hovered,
    Selected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Halo {
    pub radius: f32,
    pub width: f32,
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeDraw {
    pub id: NodeId,
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub opacity: f32,
    pub emphasis: Emphasis,
    pub halo: Option<Halo>,
    pub label: String,
    pub label_pos: Pos2,
    pub label_color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeDraw {
    pub source: NodeId,
    pub target: NodeId,
    pub from: Pos2,
    pub to: Pos2,
    pub width: f32,
    pub color: Color32,
    pub opacity: f32,
    pub emphasized: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub edges: Vec<EdgeDraw>,
    pub nodes: Vec<NodeDraw>,
}

impl DrawList {
    pub fn node(&self, id: NodeId) -> Option<&NodeDraw> {
        self.nodes.iter().find(|draw| draw.id == id)
    }
}

/// A selection that does not name a known node counts as no selection.
/// Edges whose endpoints do not resolve, and nodes without a placement, are
/// left out.
pub fn compute_draw_list(
    graph: &RoleGraph,
    placements: &[Placement],
    viewport: &ViewportTransform,
    selected: Option<NodeId>,
    hovered: Option<NodeId>,
    theme: ThemeMode,
    style: &HighlightStyle,
) -> DrawList {
    let colors = palette(theme);
    let selected = selected.filter(|id| graph.node_by_id(*id).is_some());
    let neighbors = selected
        .map(|id| graph.neighbors(id))
        .unwrap_or_else(BTreeSet::new);

    let screen = |index: usize| {
        placements.get(index).map(|placement| {
            (
                viewport.scene_to_screen(placement.position),
                viewport.scale_length(placement.radius),
            )
        })
    };

    let edges = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let (source, target) = graph.resolve_edge(edge)?;
            let (start, start_radius) = screen(source)?;
            let (end, end_radius) = screen(target)?;

            let (from, to) = trim_to_rims(start, start_radius, end, end_radius);
            let emphasized = selected.is_some_and(|id| edge.touches(id));
            let (width, color, opacity) = match selected {
                None => (style.edge_width, colors.edge, 1.0),
                Some(_) if emphasized => (style.emphasized_edge_width, colors.edge_emphasis, 1.0),
                Some(_) => (style.edge_width, colors.edge, style.dimmed_edge_opacity),
            };

            Some(EdgeDraw {
                source: edge.source,
                target: edge.target,
                from,
                to,
                width,
                color,
                opacity,
                emphasized,
            })
        })
        .collect();

    let mut nodes = graph
        .nodes()
        .iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let (center, radius) = screen(index)?;

            let emphasis = if selected == Some(node.id) {
                Emphasis::Selected
            } else if hovered == Some(node.id) {
                Emphasis::Hovered
            } else if neighbors.contains(&node.id) {
                Emphasis::Neighbor
            } else if selected.is_some() {
                Emphasis::Dimmed
            } else {
                Emphasis::Normal
            };

            let opacity = if emphasis == Emphasis::Dimmed {
                style.dimmed_node_opacity
            } else {
                1.0
            };

            let halo = match emphasis {
                Emphasis::Selected => Some(Halo {
                    radius: radius + style.halo_gap,
                    width: style.selected_halo_width,
                    color: colors.selected_halo,
                }),
                Emphasis::Hovered => Some(Halo {
                    radius: radius + style.halo_gap,
                    width: style.hovered_halo_width,
                    color: colors.hovered_halo,
                }),
                _ => None,
            };

            Some(NodeDraw {
                id: node.id,
                center,
                radius,
                fill: color_for(node.category, theme),
                stroke: colors.node_stroke,
                opacity,
                emphasis,
                halo,
                label: node.short_label.clone(),
                label_pos: center + vec2(0.0, radius + style.label_gap),
                label_color: colors.label,
            })
        })
        .collect::<Vec<_>>();

    nodes.sort_by_key(|draw| draw.emphasis);

    DrawList { edges, nodes }
}

fn trim_to_rims(start: Pos2, start_radius: f32, end: Pos2, end_radius: f32) -> (Pos2, Pos2) {
    let delta = end - start;
    let length = delta.length();
    if length <= start_radius + end_radius {
        return (start, end);
    }

    let direction = delta / length;
    (start + direction * start_radius, end - direction * end_radius)
}
