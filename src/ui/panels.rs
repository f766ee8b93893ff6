use eframe::egui::Ui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the summary line above the chart.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| match &state.summary {
        Some(summary) => {
            ui.label(summary.to_string());
        }
        None if state.series.is_some() => {
            ui.label("0 steps");
        }
        None => {}
    });
}
