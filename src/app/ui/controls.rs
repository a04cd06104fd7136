use eframe::egui::Ui;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::roles::{Node, NodeId};
use crate::util::ellipsize;

use super::super::ViewModel;

const SEARCH_RESULT_LIMIT: usize = 12;

fn fuzzy_match_score(matcher: &SkimMatcherV2, node: &Node, query: &str) -> Option<i64> {
    [&node.label, &node.short_label, &node.role]
        .into_iter()
        .filter_map(|text| matcher.fuzzy_match(text, query))
        .max()
}

fn search_matches(nodes: &[Node], query: &str) -> Vec<(NodeId, String)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored = nodes
        .iter()
        .filter_map(|node| {
            fuzzy_match_score(&matcher, node, query).map(|score| (score, node.id, &node.label))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    scored
        .into_iter()
        .take(SEARCH_RESULT_LIMIT)
        .map(|(_, id, label)| (id, label.clone()))
        .collect()
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("View");
        ui.separator();
        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            if ui.button("Zoom in").clicked() {
                self.session.zoom_in();
            }
            if ui.button("Zoom out").clicked() {
                self.session.zoom_out();
            }
            if ui
                .button("Reset view")
                .on_hover_text("Return to 100% zoom with no panning. Node positions are kept.")
                .clicked()
            {
                self.session.reset_view();
            }
            if ui
                .button("Restore layout")
                .on_hover_text("Put every node back on its category ring.")
                .clicked()
            {
                self.session.restore_layout();
            }
        });

        ui.add_space(4.0);
        ui.small("Drag a node to move it. Click a node to highlight its neighborhood.");
        ui.small("Pan with the middle button, Shift + drag, or the scroll wheel.");
        ui.small("Ctrl + scroll zooms around the pointer.");

        ui.separator();
        ui.label("Search roles")
            .on_hover_text("Fuzzy match on name, short name and role.");
        ui.text_edit_singleline(&mut self.search);

        let matches = search_matches(self.session.graph().nodes(), &self.search);
        if !self.search.trim().is_empty() && matches.is_empty() {
            ui.label("No matching roles.");
        }
        for (id, label) in matches {
            let selected = self.session.selected_id() == Some(id);
            if ui
                .selectable_label(selected, ellipsize(&label, 36))
                .on_hover_text(label.as_str())
                .clicked()
            {
                self.session.select(Some(id));
            }
        }
    }
}
