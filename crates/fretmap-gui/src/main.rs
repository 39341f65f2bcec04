//! fretmap-gui: Fretboard diagram application

mod app;
mod export;
mod panels;

use app::FretmapApp;
use eframe::NativeOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("fretmap_gui=debug".parse().unwrap())
            .add_directive("fretmap_core=debug".parse().unwrap())
            .add_directive("wgpu=warn".parse().unwrap())
            .add_directive("eframe=warn".parse().unwrap()))
        .init();

    tracing::info!("Starting fretmap");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 560.0])
            .with_min_inner_size([820.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fretboard Comparison View",
        options,
        Box::new(|cc| Ok(Box::new(FretmapApp::new(cc)))),
    )
}
