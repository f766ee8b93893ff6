use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color;
use crate::render::{X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Error-rate plot (central panel)
// ---------------------------------------------------------------------------

/// Render the error-rate line chart in the central panel.
pub fn error_rate_plot(ui: &mut Ui, state: &AppState) {
    let series = match &state.series {
        Some(series) => series,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No error-rate series loaded");
            });
            return;
        }
    };

    Plot::new("error_rate_plot")
        .legend(Legend::default())
        .x_axis_label(X_AXIS_LABEL)
        .y_axis_label(Y_AXIS_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = series.points().into();
            plot_ui.line(
                Line::new(points)
                    .name(Y_AXIS_LABEL)
                    .color(color::line_color())
                    .width(1.5),
            );

            if let Some((step, value)) = state.summary.and_then(|s| s.best) {
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[step as f64, value]]))
                        .name(format!("Best ({value:.6})"))
                        .color(color::best_color())
                        .radius(4.0),
                );
            }
        });
}
