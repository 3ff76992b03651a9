use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use game_recommender::data::Game;

use crate::state::{AppState, QueryOutcome};

// ---------------------------------------------------------------------------
// Query results (bottom panel)
// ---------------------------------------------------------------------------

/// Render the outcome of the last query.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        ui.label("Run a query from the left panel.");
        return;
    };

    match outcome {
        QueryOutcome::Games { title, games } => {
            ui.strong(format!("{title}: {} games", games.len()));
            games_table(ui, games);
        }
        QueryOutcome::Years { title, years } => {
            ui.strong(title.as_str());
            let years: Vec<String> = years.iter().map(i32::to_string).collect();
            if years.is_empty() {
                ui.label("none");
            } else {
                ui.label(years.join(", "));
            }
        }
        QueryOutcome::Text { title, text } => {
            ui.strong(title.as_str());
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                ui.label(if text.is_empty() { "none" } else { text.as_str() });
            });
        }
        QueryOutcome::Count { title, count } => {
            ui.strong(title.as_str());
            ui.label(count.to_string());
        }
        QueryOutcome::Groups { title, groups } => {
            ui.strong(title.as_str());
            for (platform, count) in groups {
                let mut text = RichText::new(format!("{platform}: {count}"));
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(platform));
                }
                ui.label(text);
            }
        }
        QueryOutcome::Failed { title, message } => {
            ui.strong(title.as_str());
            ui.label(RichText::new(message).color(Color32::RED));
        }
    }
}

fn games_table(ui: &mut Ui, games: &[Game]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(160.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for label in ["Name", "Platform", "Released", "User", "Meta", "Summary"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, games.len(), |mut row| {
                let game = &games[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(game.name.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(game.platform.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(game.release_date.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", game.user_review));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(game.meta_score.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(game.summary.as_str());
                });
            });
        });
}
