use eframe::egui;

use cgpa_leaderboard::config::ViewerConfig;
use cgpa_leaderboard::state::AppState;

use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LeaderboardApp {
    pub state: AppState,
}

impl LeaderboardApp {
    /// Load the configured dataset before the first frame.
    pub fn new(config: &ViewerConfig) -> Self {
        let mut state = AppState::default();
        panels::load_into(&mut state, &config.dataset_path);
        Self { state }
    }
}

impl eframe::App for LeaderboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: chart ----
        egui::TopBottomPanel::bottom("chart_panel")
            .default_height(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                plot::chart(ui, &self.state);
            });

        // ---- Central panel: leaderboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::leaderboard(ui, &mut self.state);
        });
    }
}
