/// Data layer: the error-rate series and its loader.
///
/// Architecture:
/// ```text
///   errors.txt  (one float per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → ErrorRateSeries
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ErrorRateSeries │  Vec<f64>, steps 1..=n, summary
///   └────────────────┘
/// ```

pub mod loader;
pub mod model;
