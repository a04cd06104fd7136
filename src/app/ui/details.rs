use eframe::egui::{self, RichText, Sense, Ui, vec2};

use crate::roles::NodeId;
use crate::scene::theme::color_for;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.session.selected_id() else {
            ui.label("Click a node in the graph or a search result.");
            return;
        };

        let Some(node) = self.session.graph().node_by_id(selected_id) else {
            ui.label("Selected node is not part of the dataset.");
            return;
        };

        let label = node.label.clone();
        let short_label = node.short_label.clone();
        let category = node.category;
        let role = node.role.clone();
        let description = node.description.clone();
        let outgoing = self.relation_rows(self.session.graph().outgoing(selected_id));
        let incoming = self.relation_rows(self.session.graph().incoming(selected_id));

        ui.label(RichText::new(label).strong());
        ui.small(short_label);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .circle_filled(swatch.center(), 6.0, color_for(category, self.theme));
            ui.label(category.label());
        });
        if !role.is_empty() {
            ui.label(format!("Role: {role}"));
        }
        if !description.is_empty() {
            ui.add_space(4.0);
            ui.label(description);
        }

        let mut next_selection = None;

        ui.separator();
        ui.label(RichText::new(format!("Links to ({})", outgoing.len())).strong());
        Self::relation_list(ui, "outgoing_relations", &outgoing, &mut next_selection);

        ui.separator();
        ui.label(RichText::new(format!("Linked from ({})", incoming.len())).strong());
        Self::relation_list(ui, "incoming_relations", &incoming, &mut next_selection);

        ui.separator();
        if ui.button("Clear selection").clicked() {
            next_selection = Some(None);
        }

        if let Some(selection) = next_selection {
            self.session.select(selection);
        }
    }

    fn relation_rows(&self, ids: &[NodeId]) -> Vec<(NodeId, String)> {
        ids.iter()
            .filter_map(|id| {
                self.session
                    .graph()
                    .node_by_id(*id)
                    .map(|node| (node.id, format!("{}  ({})", node.label, node.role)))
            })
            .collect()
    }

    fn relation_list(
        ui: &mut Ui,
        id_salt: &str,
        rows: &[(NodeId, String)],
        next_selection: &mut Option<Option<NodeId>>,
    ) {
        if rows.is_empty() {
            ui.weak("None");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt(id_salt)
            .max_height(220.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (id, text) in rows {
                    if ui.link(text.as_str()).clicked() {
                        *next_selection = Some(Some(*id));
                    }
                }
            });
    }
}
