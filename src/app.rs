use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GameRecommenderApp {
    pub state: AppState,
}

impl GameRecommenderApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GameRecommenderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and queries ----
        egui::SidePanel::left("query_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: query results ----
        egui::TopBottomPanel::bottom("results_panel")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                results::results_panel(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::score_plot(ui, &self.state);
        });
    }
}
