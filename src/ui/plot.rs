use eframe::egui::Ui;
use egui_plot::{AxisHints, Bar, BarChart, GridMark, HPlacement, Legend, Plot};

use cgpa_leaderboard::data::aggregate::ChartSeries;
use cgpa_leaderboard::data::filter::DEFAULT_CGPA_MAX;
use cgpa_leaderboard::state::AppState;

use crate::color;

const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Grouped bar chart (bottom panel)
// ---------------------------------------------------------------------------

/// Render counts (left axis) and average CGPA (right axis, 0-10) per group.
///
/// Both series share one plot, so averages are rescaled onto the count axis
/// and the right-hand axis labels undo that scaling.
pub fn chart(ui: &mut Ui, state: &AppState) {
    let series = &state.chart;
    ui.heading(series.mode.title());

    if state.dataset().is_none() {
        ui.label("No data.");
        return;
    }

    let count_top = (series.max_count().max(1) as f64) * 1.1;
    let avg_scale = count_top / DEFAULT_CGPA_MAX;
    let show_averages = series.averages.is_some();
    let bar_width = if show_averages {
        GROUP_WIDTH / 2.0
    } else {
        GROUP_WIDTH
    };

    let labels = series.labels.clone();
    let x_formatter = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    };

    let mut y_axes = vec![AxisHints::new_y().label("Number of Students")];
    if show_averages {
        y_axes.push(
            AxisHints::new_y()
                .label("Average CGPA")
                .placement(HPlacement::Right)
                .formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
                    let avg = mark.value / avg_scale;
                    if (0.0..=DEFAULT_CGPA_MAX).contains(&avg) {
                        format!("{avg:.1}")
                    } else {
                        String::new()
                    }
                }),
        );
    }

    let count_chart = count_bars(series, bar_width, show_averages);
    let avg_chart = average_bars(series, bar_width, avg_scale);

    Plot::new("cgpa_chart")
        .legend(Legend::default())
        .x_axis_label(series.mode.label())
        .x_axis_formatter(x_formatter)
        .custom_y_axes(y_axes)
        .include_y(0.0)
        .include_y(count_top)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(count_chart);
            if let Some(avg_chart) = avg_chart {
                plot_ui.bar_chart(avg_chart);
            }
        });
}

fn count_bars(series: &ChartSeries, width: f64, shifted: bool) -> BarChart {
    let offset = if shifted { -width / 2.0 } else { 0.0 };
    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(&series.counts)
        .enumerate()
        .map(|(i, (label, &count))| {
            Bar::new(i as f64 + offset, count as f64)
                .width(width)
                .name(label)
        })
        .collect();
    BarChart::new(bars)
        .name("Number of Students")
        .color(color::COUNT_SERIES)
}

fn average_bars(series: &ChartSeries, width: f64, scale: f64) -> Option<BarChart> {
    let averages = series.averages.as_ref()?;
    let bars: Vec<Bar> = series
        .labels
        .iter()
        .zip(averages)
        .enumerate()
        .map(|(i, (label, &avg))| {
            Bar::new(i as f64 + width / 2.0, avg * scale)
                .width(width)
                .name(format!("{label}: {avg:.2}"))
        })
        .collect();
    Some(
        BarChart::new(bars)
            .name("Average CGPA")
            .color(color::AVERAGE_SERIES),
    )
}
