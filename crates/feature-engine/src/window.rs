//! Fixed-Size Windowing

use sample_ingest::Sample;

/// Canonical window length (450 samples = 15 s at 30 Hz)
pub const DEFAULT_WINDOW_SIZE: usize = 450;

/// Slices a sample sequence into fixed-size, non-overlapping windows
#[derive(Debug, Clone, Copy)]
pub struct Windower {
    window_size: usize,
}

/// One analysis window: a borrowed, contiguous run of samples
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    index: usize,
    samples: &'a [Sample],
}

impl Windower {
    /// Create a windower with the given window length
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "window size must be positive");
        Self { window_size }
    }

    /// Window length in samples
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Iterate non-overlapping windows in start-index order.
    ///
    /// The final window may be shorter than the configured length and is
    /// still emitted. An empty sample slice yields no windows.
    pub fn windows<'a>(&self, samples: &'a [Sample]) -> impl Iterator<Item = Window<'a>> {
        samples
            .chunks(self.window_size)
            .enumerate()
            .map(|(index, chunk)| Window {
                index,
                samples: chunk,
            })
    }
}

impl Default for Windower {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl<'a> Window<'a> {
    /// Zero-based window index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of samples in this window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the window holds no samples (never produced by `Windower`)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples backing this window
    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    /// Vector magnitude of every sample, in order
    pub fn vector_magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::vector_magnitude).collect()
    }

    /// X-axis value of every sample, in order
    pub fn x_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }
}
