use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use cgpa_leaderboard::data::aggregate::ChartMode;
use cgpa_leaderboard::data::filter::{Selection, SortKey};
use cgpa_leaderboard::data::loader::load_file;
use cgpa_leaderboard::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset() else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let courses: Vec<String> = dataset.courses.iter().cloned().collect();
    let sections: Vec<String> = dataset.sections.iter().cloned().collect();
    let semesters: Vec<u8> = dataset.semesters.iter().copied().collect();

    let mut criteria = state.criteria.clone();
    let mut min_text = state.min_input.clone();
    let mut max_text = state.max_input.clone();
    let mut chart_mode = state.chart_mode;
    let mut reset = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Search name");
            ui.add(
                egui::TextEdit::singleline(&mut criteria.search)
                    .hint_text("e.g. ann lee")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            selection_combo(ui, "course_filter", "Course", &mut criteria.course, courses);
            selection_combo(ui, "section_filter", "Section", &mut criteria.section, sections);
            selection_combo(ui, "semester_filter", "Semester", &mut criteria.semester, semesters);
            ui.add_space(6.0);

            ui.strong("CGPA range");
            ui.horizontal(|ui: &mut Ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut min_text)
                        .hint_text("0")
                        .desired_width(60.0),
                );
                ui.label("to");
                ui.add(
                    egui::TextEdit::singleline(&mut max_text)
                        .hint_text("10")
                        .desired_width(60.0),
                );
            });
            ui.separator();

            ui.strong("Sort by");
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(criteria.sort.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for key in SortKey::ALL {
                        ui.selectable_value(&mut criteria.sort, key, key.label());
                    }
                });

            ui.strong("Chart by");
            egui::ComboBox::from_id_salt("chart_by")
                .selected_text(chart_mode.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in ChartMode::ALL {
                        ui.selectable_value(&mut chart_mode, mode, mode.label());
                    }
                });
            ui.separator();

            if ui.button("Reset filters").clicked() {
                reset = true;
            }
        });

    if reset {
        state.reset_filters();
        return;
    }
    if criteria != state.criteria {
        state.set_criteria(criteria);
    }
    if min_text != state.min_input || max_text != state.max_input {
        state.set_cgpa_inputs(min_text, max_text);
    }
    if chart_mode != state.chart_mode {
        state.set_chart_mode(chart_mode);
    }
}

/// Single-select combo with an "All" entry followed by `options`.
fn selection_combo<T>(
    ui: &mut Ui,
    id: &str,
    label: &str,
    current: &mut Selection<T>,
    options: Vec<T>,
) where
    T: Clone + PartialEq + ToString,
{
    ui.strong(label);
    let selected_text = match current {
        Selection::All => "All".to_string(),
        Selection::Only(value) => value.to_string(),
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(current, Selection::All, "All");
            for option in options {
                let text = option.to_string();
                ui.selectable_value(current, Selection::Only(option), text);
            }
        });
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

        if let Some(ds) = state.dataset() {
            ui.label(format!(
                "{} students loaded, {} shown",
                ds.len(),
                state.ranked.len()
            ));
            if let Some(name) = state.source.as_ref().and_then(|p| p.file_name()) {
                ui.separator();
                ui.label(RichText::new(name.to_string_lossy()).weak());
            }
        }

        if state.load_error().is_some() {
            ui.separator();
            ui.label(RichText::new("Error loading data").color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open student data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` into the state, or put the state into its error view.
pub fn load_into(state: &mut AppState, path: &Path) {
    match load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Filters: {} courses, {} sections, semesters {:?}",
                dataset.courses.len(),
                dataset.sections.len(),
                dataset.semesters
            );
            state.set_dataset(dataset, Some(path.to_path_buf()));
        }
        Err(e) => {
            log::error!("Error loading {}: {e:#}", path.display());
            state.set_load_error(format!("{e:#}"));
        }
    }
}
