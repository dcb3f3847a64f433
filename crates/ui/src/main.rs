mod app;

use app::ChessApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 840.0])
            .with_title("Chess"),
        ..Default::default()
    };

    eframe::run_native("Chess", options, Box::new(|_cc| Ok(Box::new(ChessApp::new()))))
}
