use eframe::egui::Color32;

use crate::roles::Category;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

pub fn color_for(category: Category, theme: ThemeMode) -> Color32 {
    match (theme, category) {
        (ThemeMode::Dark, Category::Leadership) => Color32::from_rgb(245, 196, 81),
        (ThemeMode::Dark, Category::Executive) => Color32::from_rgb(167, 139, 250),
        (ThemeMode::Dark, Category::Technical) => Color32::from_rgb(96, 165, 250),
        (ThemeMode::Dark, Category::Operations) => Color32::from_rgb(52, 211, 153),
        (ThemeMode::Dark, Category::Business) => Color32::from_rgb(251, 146, 60),
        (ThemeMode::Dark, Category::Finance) => Color32::from_rgb(45, 212, 191),
        (ThemeMode::Dark, Category::HumanResources) => Color32::from_rgb(244, 114, 182),
        (ThemeMode::Dark, Category::External) => Color32::from_rgb(148, 163, 184),
        (ThemeMode::Light, Category::Leadership) => Color32::from_rgb(202, 138, 4),
        (ThemeMode::Light, Category::Executive) => Color32::from_rgb(124, 58, 237),
        (ThemeMode::Light, Category::Technical) => Color32::from_rgb(37, 99, 235),
        (ThemeMode::Light, Category::Operations) => Color32::from_rgb(5, 150, 105),
        (ThemeMode::Light, Category::Business) => Color32::from_rgb(234, 88, 12),
        (ThemeMode::Light, Category::Finance) => Color32::from_rgb(13, 148, 136),
        (ThemeMode::Light, Category::HumanResources) => Color32::from_rgb(219, 39, 119),
        (ThemeMode::Light, Category::External) => Color32::from_rgb(100, 116, 139),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color32,
    pub grid: Color32,
    pub edge: Color32,
    pub edge_emphasis: Color32,
    pub node_stroke: Color32,
    pub label: Color32,
    pub selected_halo: Color32,
    pub hovered_halo: Color32,
    pub tooltip_fill: Color32,
    pub tooltip_text: Color32,
}

pub fn palette(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Dark => Palette {
            background: Color32::from_rgb(19, 23, 29),
            grid: Color32::from_rgba_unmultiplied(60, 70, 80, 70),
            edge: Color32::from_rgb(110, 118, 130),
            edge_emphasis: Color32::from_rgb(241, 146, 94),
            node_stroke: Color32::from_rgba_unmultiplied(15, 15, 15, 190),
            label: Color32::from_gray(238),
            selected_halo: Color32::from_rgb(245, 206, 93),
            hovered_halo: Color32::from_rgb(180, 220, 255),
            tooltip_fill: Color32::from_rgba_unmultiplied(30, 36, 44, 235),
            tooltip_text: Color32::from_gray(240),
        },
        ThemeMode::Light => Palette {
            background: Color32::from_rgb(248, 249, 251),
            grid: Color32::from_rgba_unmultiplied(150, 160, 175, 60),
            edge: Color32::from_rgb(148, 156, 168),
            edge_emphasis: Color32::from_rgb(217, 96, 38),
            node_stroke: Color32::from_rgba_unmultiplied(255, 255, 255, 220),
            label: Color32::from_gray(30),
            selected_halo: Color32::from_rgb(217, 150, 20),
            hovered_halo: Color32::from_rgb(59, 130, 246),
            tooltip_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 240),
            tooltip_text: Color32::from_gray(25),
        },
    }
}
