use std::path::Path;

use eframe::egui::{self, Align, Context, Layout, Visuals};

use crate::roles::RoleGraph;
use crate::scene::{GraphSession, HighlightStyle, ThemeMode, legend};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(graph: RoleGraph, theme: ThemeMode) -> Self {
        let legend = legend(&graph, theme);

        Self {
            session: GraphSession::new(graph),
            theme,
            style: HighlightStyle::default(),
            legend,
            search: String::new(),
        }
    }

    pub(in crate::app) fn set_theme(&mut self, theme: ThemeMode) {
        if self.theme != theme {
            self.theme = theme;
            self.legend = legend(self.session.graph(), theme);
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context, dataset: Option<&Path>) {
        ctx.set_visuals(match self.theme {
            ThemeMode::Dark => Visuals::dark(),
            ThemeMode::Light => Visuals::light(),
        });

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("rolegraph");
                    ui.separator();
                    let source = dataset
                        .map(|path| path.display().to_string())
                        .unwrap_or_else(|| "built-in".to_owned());
                    ui.label(format!("dataset: {source}"));
                    ui.label(format!("nodes: {}", self.session.graph().node_count()));
                    ui.label(format!("edges: {}", self.session.graph().edges().len()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let next = self.theme.toggled();
                        if ui
                            .button(format!("{} theme", next.label()))
                            .on_hover_text("Switch between light and dark colors.")
                            .clicked()
                        {
                            self.set_theme(next);
                        }
                        ui.label(format!(
                            "zoom {:.0}%",
                            self.session.viewport().scale * 100.0
                        ));
                        if let Some(node) = self
                            .session
                            .selected_id()
                            .and_then(|id| self.session.graph().node_by_id(id))
                        {
                            ui.label(format!("selected: {}", node.label));
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_graph(ui));
    }
}
