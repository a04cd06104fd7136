use eframe::egui::{Color32, Rect, Vec2, vec2};

use crate::layout::Placement;
use crate::roles::{Category, NodeId, RoleGraph};

use super::theme::{ThemeMode, color_for};
use super::viewport::ViewportTransform;

pub const TOOLTIP_OFFSET: Vec2 = vec2(10.0, 0.0);
pub const TOOLTIP_MARGIN: f32 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub label: &'static str,
    pub color: Color32,
    pub count: usize,
}

pub fn legend(graph: &RoleGraph, theme: ThemeMode) -> Vec<LegendEntry> {
    graph
        .category_counts()
        .into_iter()
        .map(|(category, count)| LegendEntry {
            category,
            label: category.label(),
            color: color_for(category, theme),
            count,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub node: NodeId,
    pub title: String,
    pub role: String,
    pub rect: Rect,
}

/// Hover tooltip, suppressed while anything is selected.
///
/// Sits to the right of the node's rim, vertically centered on it, and is
/// pushed back inside the canvas when it would cross the right or bottom
/// edge.
pub fn tooltip(
    graph: &RoleGraph,
    placements: &[Placement],
    viewport: &ViewportTransform,
    selected: Option<NodeId>,
    hovered: Option<NodeId>,
    canvas_size: Vec2,
    tooltip_size: Vec2,
) -> Option<Tooltip> {
    if selected.is_some() {
        return None;
    }

    let id = hovered?;
    let index = graph.index_of(id)?;
    let node = graph.nodes().get(index)?;
    let placement = placements.get(index)?;

    let center = viewport.scene_to_screen(placement.position);
    let radius = viewport.scale_length(placement.radius);
    let mut min = center + vec2(radius, -tooltip_size.y * 0.5) + TOOLTIP_OFFSET;

    min.x = min.x.min(canvas_size.x - tooltip_size.x - TOOLTIP_MARGIN);
    min.y = min.y.min(canvas_size.y - tooltip_size.y - TOOLTIP_MARGIN);
    min.x = min.x.max(TOOLTIP_MARGIN);
    min.y = min.y.max(TOOLTIP_MARGIN);

    Some(Tooltip {
        node: id,
        title: node.label.clone(),
        role: node.role.clone(),
        rect: Rect::from_min_size(min, tooltip_size),
    })
}
