mod app;
mod color;
mod ui;

use app::LeaderboardApp;
use cgpa_leaderboard::config::ViewerConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::from_args(std::env::args_os());
    log::debug!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 850.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CGPA Leaderboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LeaderboardApp::new(&config)))),
    )
}
