//! Window Feature Computation
//!
//! Seven features per window: mean/std of vector magnitude, mean/std of
//! the x-axis angle, the p625 band-power ratio, the dominant frequency,
//! and the fraction of power near the dominant frequency.

use crate::error::FeatureError;
use crate::spectral::{SpectralTransform, Spectrum};
use crate::statistics::SeriesStats;
use crate::window::Window;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEG_PER_RAD: f64 = 180.0 / std::f64::consts::PI;

/// p625 numerator band (Hz)
const P625_BAND: (f64, f64) = (0.6, 2.5);
/// p625 denominator upper edge (Hz)
const P625_REFERENCE_CUTOFF: f64 = 5.0;
/// Bins summed on each side of the dominant bin for fpdf
const FPDF_NEIGHBORS: usize = 2;

/// One row of extracted features, in window order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Zero-based window index
    pub window_index: usize,
    /// Mean vector magnitude
    pub mean_vm: f64,
    /// Population standard deviation of vector magnitude
    pub sd_vm: f64,
    /// Mean x-axis angle (degrees)
    pub mean_angle: f64,
    /// Population standard deviation of the angle series (degrees)
    pub sd_angle: f64,
    /// Ratio of mean spectral magnitude in 0.6-2.5 Hz to that in 0-5 Hz
    pub p625: f64,
    /// Frequency of the strongest spectrum bin (Hz)
    pub dominant_freq: f64,
    /// Fraction of spectral power within two bins of the dominant bin
    pub fpdf: f64,
}

/// Dominant bin of a spectrum, handed from the f6 computation to f7.
/// Local to one window's extraction; never stored across windows.
#[derive(Debug, Clone, Copy)]
struct DominantBin {
    index: usize,
    frequency: f64,
}

/// Computes the seven-feature record for each window
pub struct FeatureExtractor {
    spectral: SpectralTransform,
}

impl FeatureExtractor {
    /// Create an extractor for the given sample rate (Hz)
    pub fn new(sample_rate_hz: f64) -> Self {
        Self {
            spectral: SpectralTransform::new(sample_rate_hz),
        }
    }

    /// Extract all seven features from one window.
    ///
    /// Fails with `FeatureError::DegenerateWindow` when the window is too
    /// short to retain any spectrum bins (fewer than 3 samples); callers
    /// skip such windows rather than fabricate values.
    pub fn extract(&mut self, window: &Window<'_>) -> Result<FeatureRecord, FeatureError> {
        if window.is_empty() {
            return Err(FeatureError::EmptyWindow);
        }

        let vms = window.vector_magnitudes();
        let spectrum = self.spectral.transform(&vms)?;
        if spectrum.is_empty() {
            return Err(FeatureError::DegenerateWindow {
                window_index: window.index(),
                samples: window.len(),
            });
        }

        let vm_stats = SeriesStats::compute(&vms);
        let angles = angle_series(&window.x_values(), &vms);
        let angle_stats = SeriesStats::compute(&angles);

        let p625 = band_power_ratio(&spectrum);
        let dominant = dominant_bin(&spectrum);
        let fpdf = power_near_bin(&spectrum, dominant.index);

        debug!(
            "window {}: {} samples, {} spectrum bins, dominant {:.3} Hz",
            window.index(),
            window.len(),
            spectrum.len(),
            dominant.frequency
        );

        Ok(FeatureRecord {
            window_index: window.index(),
            mean_vm: vm_stats.mean,
            sd_vm: vm_stats.std_dev,
            mean_angle: angle_stats.mean,
            sd_angle: angle_stats.std_dev,
            p625,
            dominant_freq: dominant.frequency,
            fpdf,
        })
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(crate::spectral::DEFAULT_SAMPLE_RATE_HZ)
    }
}

/// Signed angular contribution of the x axis, in degrees, per sample.
///
/// A zero vector magnitude (all three axes zero) makes the ratio 0/0;
/// that sample's angle is defined as 0.0 so the angle mean/std stay
/// finite. The x component is necessarily zero there as well.
fn angle_series(xs: &[f64], vms: &[f64]) -> Vec<f64> {
    xs.iter()
        .zip(vms)
        .map(|(&x, &vm)| {
            if vm == 0.0 {
                debug!("zero vector magnitude, angle treated as 0");
                0.0
            } else {
                (x / vm) * DEG_PER_RAD
            }
        })
        .collect()
}

/// f5: mean magnitude in the 0.6-2.5 Hz band over mean magnitude from the
/// lowest retained frequency up to 5 Hz. Both slices are closed intervals
/// of retained bins; an all-zero spectrum propagates NaN.
fn band_power_ratio(spectrum: &Spectrum) -> f64 {
    let lo = left_inclusive_index(&spectrum.frequencies, P625_BAND.0);
    let hi = right_inclusive_index(&spectrum.frequencies, P625_BAND.1);
    let reference_hi = right_inclusive_index(&spectrum.frequencies, P625_REFERENCE_CUTOFF);

    let numerator = slice_mean(&spectrum.magnitudes[lo..=hi.max(lo)]);
    let denominator = slice_mean(&spectrum.magnitudes[..=reference_hi]);

    numerator / denominator
}

/// f6: bin with the maximum magnitude; ties go to the lowest frequency
fn dominant_bin(spectrum: &Spectrum) -> DominantBin {
    let mut index = 0;
    let mut max = f64::NEG_INFINITY;
    for (i, &m) in spectrum.magnitudes.iter().enumerate() {
        if m > max {
            max = m;
            index = i;
        }
    }
    DominantBin {
        index,
        frequency: spectrum.frequencies[index],
    }
}

/// f7: power in the dominant bin and up to two bins either side, clamped
/// at the spectrum edges, as a fraction of total power
fn power_near_bin(spectrum: &Spectrum, index: usize) -> f64 {
    let lo = index.saturating_sub(FPDF_NEIGHBORS);
    let hi = (index + FPDF_NEIGHBORS).min(spectrum.len() - 1);

    let near: f64 = spectrum.magnitudes[lo..=hi].iter().sum();
    let total: f64 = spectrum.magnitudes.iter().sum();

    near / total
}

/// Left-inclusive closest-index lookup: an exact frequency match wins,
/// otherwise the last index strictly below the target (floor 0). Used for
/// the lower edge of a band so the boundary bin is not double-counted.
fn left_inclusive_index(frequencies: &[f64], target: f64) -> usize {
    let mut i = 0;
    while i < frequencies.len() && frequencies[i] < target {
        i += 1;
    }
    if i == frequencies.len() {
        return frequencies.len() - 1;
    }
    if frequencies[i] == target {
        return i;
    }
    i.saturating_sub(1)
}

/// Right-inclusive closest-index lookup: an exact match wins, otherwise
/// the first index at or above the target, clamped to the last index on
/// overrun and to index 1 minimum when the scan halts at index 0 (keeps
/// upper band edges off the first retained bin).
fn right_inclusive_index(frequencies: &[f64], target: f64) -> usize {
    let mut i = 0;
    while i < frequencies.len() && frequencies[i] < target {
        i += 1;
    }
    if i == frequencies.len() {
        return frequencies.len() - 1;
    }
    if frequencies[i] == target {
        return i;
    }
    i.max(1).min(frequencies.len() - 1)
}

fn slice_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Windower;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use sample_ingest::Sample;

    const TEST_AXIS: [f64; 6] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

    fn spectrum(frequencies: Vec<f64>, magnitudes: Vec<f64>) -> Spectrum {
        Spectrum {
            frequencies,
            magnitudes,
        }
    }

    fn make_samples(values: &[(f64, f64, f64)]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &(x, y, z))| Sample {
                timestamp: Utc.with_ymd_and_hms(2016, 3, 12, 8, 30, 0).unwrap()
                    + chrono::Duration::milliseconds(i as i64 * 33),
                x,
                y,
                z,
            })
            .collect()
    }

    #[test]
    fn test_left_inclusive_exact_match() {
        assert_eq!(left_inclusive_index(&TEST_AXIS, 2.5), 4);
    }

    #[test]
    fn test_left_inclusive_between_bins() {
        assert_eq!(left_inclusive_index(&TEST_AXIS, 2.2), 3);
    }

    #[test]
    fn test_left_inclusive_below_axis_clamps_to_zero() {
        assert_eq!(left_inclusive_index(&TEST_AXIS, 0.1), 0);
    }

    #[test]
    fn test_left_inclusive_above_axis_clamps_to_end() {
        assert_eq!(left_inclusive_index(&TEST_AXIS, 99.0), 5);
    }

    #[test]
    fn test_right_inclusive_exact_match() {
        assert_eq!(right_inclusive_index(&TEST_AXIS, 2.5), 4);
    }

    #[test]
    fn test_right_inclusive_between_bins() {
        assert_eq!(right_inclusive_index(&TEST_AXIS, 2.2), 4);
    }

    #[test]
    fn test_right_inclusive_below_axis_avoids_first_bin() {
        assert_eq!(right_inclusive_index(&TEST_AXIS, 0.1), 1);
    }

    #[test]
    fn test_right_inclusive_above_axis_clamps_to_end() {
        assert_eq!(right_inclusive_index(&TEST_AXIS, 99.0), 5);
    }

    #[test]
    fn test_dominant_bin_tie_breaks_to_first() {
        let s = spectrum(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 5.0, 5.0, 2.0]);
        let dominant = dominant_bin(&s);
        assert_eq!(dominant.index, 1);
        assert_eq!(dominant.frequency, 2.0);
    }

    #[test]
    fn test_power_near_bin_interior() {
        let s = spectrum(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            vec![1.0, 1.0, 1.0, 4.0, 1.0, 1.0, 1.0],
        );
        // Bins 1..=5 sum to 8 of a total 10
        assert!((power_near_bin(&s, 3) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_power_near_bin_clamps_at_edges() {
        let s = spectrum(vec![1.0, 2.0, 3.0], vec![2.0, 1.0, 1.0]);
        // Dominant at 0: only bins 0..=2 exist
        assert!((power_near_bin(&s, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_series_degrees() {
        let angles = angle_series(&[1.0, 0.0], &[2.0, 1.0]);
        assert!((angles[0] - 0.5 * DEG_PER_RAD).abs() < 1e-12);
        assert_eq!(angles[1], 0.0);
    }

    #[test]
    fn test_angle_series_zero_magnitude_is_zero() {
        let angles = angle_series(&[0.0], &[0.0]);
        assert_eq!(angles[0], 0.0);
    }

    #[test]
    fn test_band_power_ratio_flat_spectrum_is_one() {
        // 30 Hz / 450-sample style axis: 0.2, 0.4, ... up to 6.0
        let frequencies: Vec<f64> = (1..=30).map(|i| i as f64 * 0.2).collect();
        let magnitudes = vec![1.0; 30];
        let ratio = band_power_ratio(&spectrum(frequencies, magnitudes));
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_extract_constant_window() {
        let data = make_samples(&vec![(0.0, 0.0, 9.8); 450]);
        let windower = Windower::new(450);
        let window = windower.windows(&data).next().unwrap();

        let mut extractor = FeatureExtractor::new(30.0);
        let record = extractor.extract(&window).unwrap();

        assert_eq!(record.window_index, 0);
        assert!((record.mean_vm - 9.8).abs() < 1e-9);
        assert!(record.sd_vm.abs() < 1e-9);
        assert_eq!(record.mean_angle, 0.0);
        assert_eq!(record.sd_angle, 0.0);
        assert!(record.dominant_freq > 0.0 && record.dominant_freq < 15.0);
        assert!((0.0..=1.0).contains(&record.fpdf) || record.fpdf.is_nan());
    }

    #[test]
    fn test_extract_rejects_degenerate_window() {
        let data = make_samples(&[(1.0, 0.0, 0.0), (2.0, 0.0, 0.0)]);
        let windower = Windower::new(450);
        let window = windower.windows(&data).next().unwrap();

        let mut extractor = FeatureExtractor::new(30.0);
        assert!(matches!(
            extractor.extract(&window),
            Err(FeatureError::DegenerateWindow {
                window_index: 0,
                samples: 2
            })
        ));
    }

    #[test]
    fn test_extract_tone_window_dominant_freq() {
        // 2 Hz oscillation on the x axis around a 9.8 gravity baseline on z
        let values: Vec<(f64, f64, f64)> = (0..450)
            .map(|i| {
                let t = i as f64 / 30.0;
                ((2.0 * std::f64::consts::PI * 2.0 * t).sin(), 0.0, 9.8)
            })
            .collect();
        let data = make_samples(&values);
        let windower = Windower::new(450);
        let window = windower.windows(&data).next().unwrap();

        let mut extractor = FeatureExtractor::new(30.0);
        let record = extractor.extract(&window).unwrap();

        assert!(record.sd_vm > 0.0);
        assert!((0.0..=1.0).contains(&record.fpdf));
        assert!(record.p625.is_finite());
    }

    proptest! {
        #[test]
        fn prop_fpdf_in_unit_interval(
            magnitudes in proptest::collection::vec(0.0f64..1e6, 1..64),
            index in 0usize..64,
        ) {
            prop_assume!(magnitudes.iter().sum::<f64>() > 0.0);
            let index = index % magnitudes.len();
            let frequencies: Vec<f64> =
                (1..=magnitudes.len()).map(|i| i as f64 * 0.2).collect();
            let s = spectrum(frequencies, magnitudes);
            let fraction = power_near_bin(&s, index);
            prop_assert!((0.0..=1.0 + 1e-12).contains(&fraction));
        }

        #[test]
        fn prop_lookups_stay_in_bounds(
            len in 1usize..128,
            target in 0.0f64..20.0,
        ) {
            let frequencies: Vec<f64> = (1..=len).map(|i| i as f64 * 0.2).collect();
            let left = left_inclusive_index(&frequencies, target);
            let right = right_inclusive_index(&frequencies, target);
            prop_assert!(left < len);
            prop_assert!(right < len);
            if len >= 2 && frequencies.iter().all(|&f| f != target) {
                // absent an exact hit, upper edges never land on the
                // first retained bin
                prop_assert!(right >= 1);
            }
        }
    }
}
