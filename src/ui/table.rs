use eframe::egui::{self, Align, Align2, Color32, FontId, Layout, RichText, Sense, Stroke, Ui};
use egui_extras::{Column, TableBuilder};

use cgpa_leaderboard::data::filter::RankedRecord;
use cgpa_leaderboard::data::model::GpaTier;
use cgpa_leaderboard::state::{AppState, LoadState};

use crate::color;

const ROW_HEIGHT: f32 = 24.0;

// ---------------------------------------------------------------------------
// Leaderboard (central panel)
// ---------------------------------------------------------------------------

/// Render the ranked table with its pagination bar, or the empty/error view.
pub fn leaderboard(ui: &mut Ui, state: &mut AppState) {
    match &state.load {
        LoadState::NotLoaded => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a student CSV to view the leaderboard  (File → Open…)");
            });
            return;
        }
        LoadState::Failed(detail) => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add_space(40.0);
                ui.heading(RichText::new("Error loading data").color(Color32::RED));
                ui.label(RichText::new(detail).weak());
            });
            return;
        }
        LoadState::Loaded(_) => {}
    }

    if state.ranked.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(40.0);
            ui.heading("No students match the current filters.");
        });
        return;
    }

    pagination_bar(ui, state);
    ranked_table(ui, state.page_rows());
}

fn pagination_bar(ui: &mut Ui, state: &mut AppState) {
    let pagination = state.pagination;
    if !pagination.controls_visible() {
        return;
    }
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(pagination.has_prev(), egui::Button::new("◀ Prev"))
            .clicked()
        {
            state.prev_page();
        }
        ui.label(pagination.describe());
        if ui
            .add_enabled(pagination.has_next(), egui::Button::new("Next ▶"))
            .clicked()
        {
            state.next_page();
        }
    });
    ui.separator();
}

fn ranked_table(ui: &mut Ui, rows: &[RankedRecord]) {
    TableBuilder::new(ui)
        .striped(false)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(56.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(60.0))
        .header(ROW_HEIGHT, |mut header| {
            for title in ["Rank", "Name", "Course", "Section", "Semester", "CGPA"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let ranked = &rows[row.index()];
                let rec = &ranked.record;
                let tint = color::row_tint(ranked.rank, GpaTier::for_cgpa(rec.cgpa));

                row.col(|ui: &mut Ui| {
                    paint_tint(ui, tint);
                    rank_cell(ui, ranked.rank);
                });
                for text in [&rec.name, &rec.course, &rec.section] {
                    row.col(|ui: &mut Ui| {
                        paint_tint(ui, tint);
                        ui.label(text.as_str());
                    });
                }
                row.col(|ui: &mut Ui| {
                    paint_tint(ui, tint);
                    ui.label(rec.semester.to_string());
                });
                row.col(|ui: &mut Ui| {
                    paint_tint(ui, tint);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                        ui.label(RichText::new(format!("{:.2}", rec.cgpa)).strong());
                    });
                });
            });
        });
}

fn paint_tint(ui: &mut Ui, tint: Color32) {
    ui.painter().rect_filled(ui.max_rect(), 0.0, tint);
}

/// Medal for the podium, plain number below it.
fn rank_cell(ui: &mut Ui, rank: usize) {
    let Some(fill) = color::medal_color(rank) else {
        ui.label(rank.to_string());
        return;
    };
    let (rect, _) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), Sense::hover());
    let painter = ui.painter();
    painter.circle(rect.center(), 9.0, fill, Stroke::new(1.0, Color32::BLACK));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        rank.to_string(),
        FontId::proportional(12.0),
        Color32::BLACK,
    );
}
