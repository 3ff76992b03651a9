use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Score plot (central panel)
// ---------------------------------------------------------------------------

/// Scatter of user review (x) against meta score (y), one series per
/// visible platform.
pub fn score_plot(ui: &mut Ui, state: &AppState) {
    let Some(rec) = &state.recommender else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view games  (File → Open…)");
        });
        return;
    };

    let games = rec.all_games();
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let game = &games[idx];
        series
            .entry(game.platform.as_str())
            .or_default()
            .push([game.user_review, f64::from(game.meta_score)]);
    }

    Plot::new("score_plot")
        .legend(Legend::default())
        .x_axis_label("User review")
        .y_axis_label("Meta score")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (platform, points) in series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(platform))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points = Points::new(PlotPoints::from(points))
                    .name(platform)
                    .color(color)
                    .radius(3.0);

                plot_ui.points(points);
            }
        });
}
