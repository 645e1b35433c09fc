use eframe::{CreationContext, NativeOptions, egui};

use passgen::app::PassGenApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Password Generator",
        native_options,
        Box::new(|_cc: &CreationContext| Ok(Box::new(PassGenApp::default()))),
    )
}
