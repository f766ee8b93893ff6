use std::fmt;

// ---------------------------------------------------------------------------
// ErrorRateSeries – the loaded file
// ---------------------------------------------------------------------------

/// Error-rate values in file order. The step of `values[i]` is `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorRateSeries {
    values: Vec<f64>,
}

impl ErrorRateSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 1-based step indices, `1..=len`.
    pub fn steps(&self) -> impl Iterator<Item = usize> + '_ {
        1..=self.values.len()
    }

    /// `[step, value]` pairs in sequence order, ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.steps()
            .zip(self.values.iter())
            .map(|(step, &v)| [step as f64, v])
            .collect()
    }

    /// Summary of the series, `None` when there is nothing to summarise.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = *self.values.first()?;
        let last = *self.values.last()?;

        let best = self
            .values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, &v)| (i + 1, v));

        Some(SeriesSummary {
            steps: self.values.len(),
            first,
            last,
            best,
        })
    }
}

// ---------------------------------------------------------------------------
// SeriesSummary – shown in the top bar and logged on load
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub steps: usize,
    pub first: f64,
    pub last: f64,
    /// `(step, value)` of the lowest error; `None` if every value is NaN.
    pub best: Option<(usize, f64)>,
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps, first {:.6}, last {:.6}",
            self.steps, self.first, self.last
        )?;
        if let Some((step, value)) = self.best {
            write!(f, ", best {value:.6} @ step {step}")?;
        }
        Ok(())
    }
}
