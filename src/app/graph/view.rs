use eframe::egui::{self, Align2, CursorIcon, FontId, Sense, Stroke, Ui, vec2};

use crate::scene::PointerMode;
use crate::scene::theme::palette;

use super::super::render_utils::{circle_visible, draw_arrow, draw_background, with_opacity};
use super::super::ViewModel;

const TOOLTIP_PADDING: f32 = 8.0;

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.session.resize(rect.size());
        self.forward_pointer_events(ui, rect, &response);

        let painter = ui.painter_at(rect);
        let colors = palette(self.theme);
        let origin = rect.min.to_vec2();
        let label_size = (12.0 * self.session.viewport().scale).clamp(9.0, 18.0);

        draw_background(&painter, rect, self.session.viewport(), &colors);

        let draw_list = self.session.draw_list(self.theme, &self.style);

        for edge in &draw_list.edges {
            let stroke = Stroke::new(edge.width, with_opacity(edge.color, edge.opacity));
            draw_arrow(&painter, edge.from + origin, edge.to + origin, stroke);
        }

        for node in &draw_list.nodes {
            let center = node.center + origin;
            let outer = node.halo.map_or(node.radius, |halo| halo.radius + halo.width);
            if !circle_visible(rect, center, outer + label_size * 2.0) {
                continue;
            }

            if let Some(halo) = node.halo {
                painter.circle_stroke(center, halo.radius, Stroke::new(halo.width, halo.color));
            }
            painter.circle_filled(center, node.radius, with_opacity(node.fill, node.opacity));
            painter.circle_stroke(
                center,
                node.radius,
                Stroke::new(1.5, with_opacity(node.stroke, node.opacity)),
            );
            painter.text(
                node.label_pos + origin,
                Align2::CENTER_TOP,
                node.label.as_str(),
                FontId::proportional(label_size),
                with_opacity(node.label_color, node.opacity),
            );
        }

        self.draw_legend_overlay(&painter, rect);
        self.draw_tooltip(&painter, rect);

        let cursor = match self.session.interaction().mode {
            PointerMode::DraggingNode { .. } => Some(CursorIcon::Grabbing),
            PointerMode::Panning { .. } => Some(CursorIcon::AllScroll),
            PointerMode::Idle if self.session.hovered_id().is_some() => {
                Some(CursorIcon::PointingHand)
            }
            PointerMode::Idle => None,
        };
        if let Some(cursor) = cursor
            && response.contains_pointer()
        {
            ui.output_mut(|output| {
                output.cursor_icon = cursor;
            });
        }
    }

    fn draw_legend_overlay(&self, painter: &egui::Painter, rect: egui::Rect) {
        let colors = palette(self.theme);
        let row_height = 18.0;
        let height = row_height * self.legend.len() as f32 + TOOLTIP_PADDING * 2.0;
        let panel = egui::Rect::from_min_size(
            rect.left_bottom() + vec2(12.0, -12.0 - height),
            vec2(170.0, height),
        );

        painter.rect_filled(panel, 6.0, colors.tooltip_fill);
        for (row, entry) in self.legend.iter().enumerate() {
            let y = panel.top() + TOOLTIP_PADDING + row_height * (row as f32 + 0.5);
            painter.circle_filled(egui::pos2(panel.left() + 16.0, y), 6.0, entry.color);
            painter.text(
                egui::pos2(panel.left() + 30.0, y),
                Align2::LEFT_CENTER,
                format!("{} ({})", entry.label, entry.count),
                FontId::proportional(12.0),
                colors.tooltip_text,
            );
        }
    }

    fn draw_tooltip(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(node) = self
            .session
            .hovered_id()
            .and_then(|id| self.session.graph().node_by_id(id))
        else {
            return;
        };

        let colors = palette(self.theme);
        let title = painter.layout_no_wrap(
            node.label.clone(),
            FontId::proportional(13.0),
            colors.tooltip_text,
        );
        let role = painter.layout_no_wrap(
            node.role.clone(),
            FontId::proportional(11.5),
            with_opacity(colors.tooltip_text, 0.75),
        );
        let size = vec2(
            title.size().x.max(role.size().x),
            title.size().y + 2.0 + role.size().y,
        ) + vec2(TOOLTIP_PADDING, TOOLTIP_PADDING) * 2.0;

        let Some(tooltip) = self.session.tooltip(size) else {
            return;
        };

        let frame = tooltip.rect.translate(rect.min.to_vec2());
        painter.rect_filled(frame, 6.0, colors.tooltip_fill);
        let text_origin = frame.min + vec2(TOOLTIP_PADDING, TOOLTIP_PADDING);
        let title_height = title.size().y;
        painter.galley(text_origin, title, colors.tooltip_text);
        painter.galley(
            text_origin + vec2(0.0, title_height + 2.0),
            role,
            colors.tooltip_text,
        );
    }
}
