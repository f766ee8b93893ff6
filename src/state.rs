use crate::data::model::{ErrorRateSeries, SeriesSummary};
use crate::render::ChartView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Series on screen (None until something is loaded).
    pub series: Option<ErrorRateSeries>,

    /// Summary of `series`, computed once.
    pub summary: Option<SeriesSummary>,
}

impl AppState {
    pub fn from_view(view: ChartView) -> Self {
        Self {
            summary: view.series.summary(),
            series: Some(view.series),
        }
    }
}
