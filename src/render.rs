use std::path::Path;

use anyhow::{Result, anyhow};
use eframe::egui;

use crate::app::ErrorRateApp;
use crate::data::model::ErrorRateSeries;
use crate::state::AppState;

pub const X_AXIS_LABEL: &str = "Step";
pub const Y_AXIS_LABEL: &str = "Error rate";

// ---------------------------------------------------------------------------
// Chart description handed to a sink
// ---------------------------------------------------------------------------

/// Everything needed to draw the chart for one series.
#[derive(Debug, Clone)]
pub struct ChartView {
    pub title: String,
    pub series: ErrorRateSeries,
}

impl ChartView {
    pub fn new(series: ErrorRateSeries) -> Self {
        Self {
            title: "Error Rate".to_string(),
            series,
        }
    }

    /// Name the window after the file the series came from.
    pub fn with_source(mut self, source: &Path) -> Self {
        self.title = format!("Error Rate – {}", source.display());
        self
    }
}

/// Where a chart ends up. The window sink blocks until the user closes it.
pub trait ChartSink {
    fn show(&mut self, view: ChartView) -> Result<()>;
}

/// Draw `view` on `sink`. An empty series is a valid, empty chart.
pub fn render<S: ChartSink + ?Sized>(sink: &mut S, view: ChartView) -> Result<()> {
    if view.series.is_empty() {
        log::warn!("Rendering an empty error-rate series");
    } else {
        log::debug!("Rendering {} points", view.series.len());
    }
    sink.show(view)
}

// ---------------------------------------------------------------------------
// Native window
// ---------------------------------------------------------------------------

pub struct WindowSink {
    pub options: eframe::NativeOptions,
}

impl Default for WindowSink {
    fn default() -> Self {
        Self {
            options: eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([1000.0, 650.0])
                    .with_min_inner_size([500.0, 350.0]),
                ..Default::default()
            },
        }
    }
}

impl ChartSink for WindowSink {
    fn show(&mut self, view: ChartView) -> Result<()> {
        let title = view.title.clone();
        let state = AppState::from_view(view);

        log::info!("Opening chart window \"{title}\"");
        eframe::run_native(
            &title,
            std::mem::take(&mut self.options),
            Box::new(move |_cc| Ok(Box::new(ErrorRateApp::new(state)))),
        )
        .map_err(|e| anyhow!("chart window failed: {e}"))
    }
}
