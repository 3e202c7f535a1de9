//! Series Statistics

/// Mean and population standard deviation of a value series
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (sum of squared deviations over N)
    pub std_dev: f64,
}

impl SeriesStats {
    /// Compute stats from a slice of values.
    ///
    /// Returns the zero stats for an empty slice.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let mut m2 = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
        }
        let std_dev = (m2 / n).sqrt();

        Self { mean, std_dev }
    }
}
