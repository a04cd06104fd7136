//! Backend-independent visualization core.
//!
//! [`GraphSession`] owns the only mutable state of a session: node
//! placements, the viewport transform and the pointer interaction state.
//! Everything else is derived from it through pure functions in
//! [`draw_list`] and [`overlay`].

use eframe::egui::{Pos2, Vec2};

use crate::layout::{LayoutConfig, Placement, radial_layout, recenter};
use crate::roles::{NodeId, RoleGraph};

pub mod draw_list;
mod interaction;
pub mod overlay;
pub mod theme;
pub mod viewport;

pub use draw_list::{DrawList, HighlightStyle, compute_draw_list};
pub use interaction::{InteractionState, PointerButton, PointerEvent, PointerMode};
pub use overlay::{LegendEntry, Tooltip, legend, tooltip};
pub use theme::ThemeMode;
pub use viewport::{ViewportTransform, ZoomConfig};

pub struct GraphSession {
    graph: RoleGraph,
    placements: Vec<Placement>,
    viewport: ViewportTransform,
    interaction: InteractionState,
    canvas_size: Option<Vec2>,
    layout_config: LayoutConfig,
    zoom_config: ZoomConfig,
}

impl GraphSession {
    pub fn new(graph: RoleGraph) -> Self {
        Self::with_config(graph, LayoutConfig::default(), ZoomConfig::default())
    }

    pub fn with_config(graph: RoleGraph, layout_config: LayoutConfig, zoom_config: ZoomConfig) -> Self {
        Self {
            graph,
            placements: Vec::new(),
            viewport: ViewportTransform::IDENTITY,
            interaction: InteractionState::default(),
            canvas_size: None,
            layout_config,
            zoom_config,
        }
    }

    pub fn graph(&self) -> &RoleGraph {
        &self.graph
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement_of(&self, id: NodeId) -> Option<&Placement> {
        self.graph
            .index_of(id)
            .and_then(|index| self.placements.get(index))
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn canvas_size(&self) -> Option<Vec2> {
        self.canvas_size
    }

    pub fn selected_id(&self) -> Option<NodeId> {
        self.interaction.selected
    }

    pub fn hovered_id(&self) -> Option<NodeId> {
        self.interaction.hovered
    }

    /// Lays the graph out on the first call with a usable size; later size
    /// changes shift every placement by the movement of the canvas center.
    pub fn resize(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }

        match self.canvas_size {
            None => {
                self.placements = radial_layout(self.graph.nodes(), size, &self.layout_config);
                tracing::debug!(width = size.x, height = size.y, "initial layout computed");
            }
            Some(previous) if previous != size => {
                recenter(&mut self.placements, previous, size, self.viewport.scale);
                tracing::debug!(
                    from = ?previous,
                    to = ?size,
                    "canvas resized; placements re-centered"
                );
            }
            Some(_) => return,
        }
        self.canvas_size = Some(size);
        self.refresh_hover();
    }

    pub fn restore_layout(&mut self) {
        if let Some(size) = self.canvas_size {
            self.placements = radial_layout(self.graph.nodes(), size, &self.layout_config);
            self.refresh_hover();
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom(self.zoom_config.button_step, None);
        self.refresh_hover();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom(1.0 / self.zoom_config.button_step, None);
        self.refresh_hover();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.refresh_hover();
    }

    pub fn select(&mut self, id: Option<NodeId>) {
        let id = id.filter(|id| self.graph.node_by_id(*id).is_some());
        self.set_selected(id);
    }

    pub fn draw_list(&self, theme: ThemeMode, style: &HighlightStyle) -> DrawList {
        compute_draw_list(
            &self.graph,
            &self.placements,
            &self.viewport,
            self.interaction.selected,
            self.interaction.hovered,
            theme,
            style,
        )
    }

    pub fn tooltip(&self, tooltip_size: Vec2) -> Option<Tooltip> {
        tooltip(
            &self.graph,
            &self.placements,
            &self.viewport,
            self.interaction.selected,
            self.interaction.hovered,
            self.canvas_size?,
            tooltip_size,
        )
    }

    pub fn screen_position(&self, id: NodeId) -> Option<Pos2> {
        self.placement_of(id)
            .map(|placement| self.viewport.scene_to_screen(placement.position))
    }
}
