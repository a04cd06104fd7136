use std::path::PathBuf;

use clap::Parser;
use rolegraph::RoleGraphApp;
use rolegraph::scene::ThemeMode;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON dataset with `nodes` and `edges`; the built-in organization is used when omitted.
    #[arg(long)]
    dataset: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ThemeMode::Dark)]
    theme: ThemeMode,
    #[arg(long, default_value_t = 1440.0)]
    width: f32,
    #[arg(long, default_value_t = 920.0)]
    height: f32,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    eframe::run_native(
        "rolegraph",
        options,
        Box::new(move |cc| {
            Ok(Box::new(RoleGraphApp::new(
                cc,
                args.dataset.clone(),
                args.theme,
            )))
        }),
    )
}
