//! FFT-based Spectral Transform
//!
//! Converts a window's vector-magnitude series into a scaled one-sided
//! magnitude spectrum with a matching frequency axis. The DC bin and
//! everything at or above the Nyquist frequency are removed before the
//! spectrum reaches feature computation.

use crate::error::FeatureError;
use rustfft::{num_complex::Complex, FftPlanner};

/// Effective sample rate of the recording device (Hz)
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 30.0;

/// One-sided magnitude spectrum of a window
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Strictly increasing frequency axis (Hz), DC and Nyquist excluded
    pub frequencies: Vec<f64>,
    /// Magnitude at the matching frequency index, scaled by 1/sqrt(N)
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Number of retained bins
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// True when no bins survived truncation (windows under 3 samples)
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

/// Computes one-sided magnitude spectra from real-valued series
pub struct SpectralTransform {
    planner: FftPlanner<f64>,
    sample_rate: f64,
}

impl SpectralTransform {
    /// Create a transform for the given sample rate (Hz)
    pub fn new(sample_rate: f64) -> Self {
        Self {
            planner: FftPlanner::new(),
            sample_rate,
        }
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Transform a real-valued series into a `Spectrum`.
    ///
    /// Steps: complex-ify the input, forward FFT, take the modulus of each
    /// coefficient scaled by `1/sqrt(N)` (keeps energy comparable across
    /// window lengths, including the trailing short window), build the
    /// frequency axis `i * rate/N`, keep only bins below Nyquist
    /// (indices `0..ceil(N/2)`), then drop the DC bin.
    ///
    /// rustfft plans mixed-radix FFTs for arbitrary lengths, so a
    /// non-power-of-two `N` needs no padding. An empty series is rejected.
    pub fn transform(&mut self, series: &[f64]) -> Result<Spectrum, FeatureError> {
        if series.is_empty() {
            return Err(FeatureError::EmptyWindow);
        }

        let n = series.len();
        let mut buffer: Vec<Complex<f64>> =
            series.iter().map(|&v| Complex::new(v, 0.0)).collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let scale = 1.0 / (n as f64).sqrt();
        let freq_step = self.sample_rate / n as f64;
        let cutoff = n.div_ceil(2); // first index at or above Nyquist

        // Skip index 0 (DC) and everything from the cutoff up (mirror image)
        let mut frequencies = Vec::with_capacity(cutoff.saturating_sub(1));
        let mut magnitudes = Vec::with_capacity(cutoff.saturating_sub(1));
        for i in 1..cutoff {
            frequencies.push(i as f64 * freq_step);
            magnitudes.push(buffer[i].norm() * scale);
        }

        Ok(Spectrum {
            frequencies,
            magnitudes,
        })
    }
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}
