use std::path::{Path, PathBuf};

use anyhow::Result;
use eframe::egui::{self, Context};

use crate::roles::{RoleGraph, load_builtin_dataset, load_dataset_file};
use crate::scene::{GraphSession, HighlightStyle, LegendEntry, ThemeMode};

mod graph;
mod render_utils;
mod ui;

pub struct RoleGraphApp {
    dataset: Option<PathBuf>,
    theme: ThemeMode,
    state: AppState,
}

enum AppState {
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    session: GraphSession,
    theme: ThemeMode,
    style: HighlightStyle,
    legend: Vec<LegendEntry>,
    search: String,
}

fn load_graph(dataset: Option<&Path>) -> Result<RoleGraph> {
    match dataset {
        Some(path) => load_dataset_file(path),
        None => load_builtin_dataset(),
    }
}

impl RoleGraphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: Option<PathBuf>, theme: ThemeMode) -> Self {
        let state = Self::load(dataset.as_deref(), theme);
        Self {
            dataset,
            theme,
            state,
        }
    }

    fn load(dataset: Option<&Path>, theme: ThemeMode) -> AppState {
        match load_graph(dataset) {
            Ok(graph) => AppState::Ready(Box::new(ViewModel::new(graph, theme))),
            Err(error) => {
                tracing::error!("{error:#}");
                AppState::Error(format!("{error:#}"))
            }
        }
    }
}

impl eframe::App for RoleGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the relationship dataset");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::load(self.dataset.as_deref(), self.theme));
                    }
                });
            }
            AppState::Ready(model) => {
                model.show(ctx, self.dataset.as_deref());
                self.theme = model.theme;
            }
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
