use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::{AppState, Query};

// ---------------------------------------------------------------------------
// Left side panel – platform filter and query widgets
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(rec) = &state.recommender else {
        ui.heading("Games");
        ui.separator();
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let platforms: Vec<String> = rec.platforms().into_iter().map(str::to_string).collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let n_selected = state.filters.len();
            let n_total = platforms.len();
            egui::CollapsingHeader::new(
                RichText::new(format!("Platforms  ({n_selected}/{n_total})")).strong(),
            )
            .default_open(true)
            .show(ui, |ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        state.select_all();
                    }
                    if ui.small_button("None").clicked() {
                        state.select_none();
                    }
                });

                for platform in &platforms {
                    let mut text = RichText::new(platform);
                    if let Some(cm) = &state.color_map {
                        text = text.color(cm.color_for(platform));
                    }

                    let mut checked = state.filters.contains(platform);
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_platform(platform);
                    }
                }
            });

            ui.separator();
            ui.heading("Queries");
            query_widgets(ui, state, &platforms);
        });
}

fn query_widgets(ui: &mut Ui, state: &mut AppState, platforms: &[String]) {
    let mut run = None;

    if ui.button("All games").clicked() {
        run = Some(Query::AllGames);
    }
    if ui.button("Games by platform").clicked() {
        run = Some(Query::ByPlatform);
    }
    ui.separator();

    ui.strong("Released after");
    ui.horizontal(|ui: &mut Ui| {
        ui.add(DatePickerButton::new(&mut state.inputs.released_after).id_salt("released_after"));
        if ui.button("Run").clicked() {
            run = Some(Query::ReleasedAfter);
        }
    });

    ui.strong("Top user rated");
    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::DragValue::new(&mut state.inputs.top_n).prefix("n = "));
        if ui.button("Run").clicked() {
            run = Some(Query::TopUserRated);
        }
    });

    ui.strong("Years with meta score ≥");
    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::DragValue::new(&mut state.inputs.minimal_score).range(0..=100));
        if ui.button("Run").clicked() {
            run = Some(Query::YearsWithTopScoring);
        }
    });

    ui.strong("Names released in");
    ui.horizontal(|ui: &mut Ui| {
        ui.add(egui::DragValue::new(&mut state.inputs.year));
        if ui.button("Run").clicked() {
            run = Some(Query::NamesReleasedIn);
        }
    });
    ui.separator();

    ui.strong("Platform");
    egui::ComboBox::from_id_salt("query_platform")
        .selected_text(state.inputs.platform.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for platform in platforms {
                ui.selectable_value(&mut state.inputs.platform, platform.clone(), platform.as_str());
            }
        });
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Highest user rated").clicked() {
            run = Some(Query::HighestOnPlatform);
        }
        if ui.button("Years active").clicked() {
            run = Some(Query::YearsActive);
        }
    });
    ui.separator();

    ui.strong("Summary keywords");
    ui.horizontal(|ui: &mut Ui| {
        ui.text_edit_singleline(&mut state.inputs.keywords);
        if ui.button("Run").clicked() {
            run = Some(Query::SimilarTo);
        }
    });

    if let Some(query) = run {
        log::debug!("running {query:?}");
        state.run_query(query);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(rec) = &state.recommender {
            let source = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!(
                "{source}: {} games loaded, {} visible",
                rec.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open game dataset")
        .add_filter("Supported files", &["csv", "txt", "json"])
        .add_filter("CSV", &["csv", "txt"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        // Failures are already logged and shown in the status line.
        let _ = state.open(&path);
    }
}
