//! Feature Engineering Engine
//!
//! Slices validated accelerometer samples into fixed windows and computes
//! seven statistical and frequency-domain features per window.

mod error;
mod features;
mod spectral;
mod statistics;
mod window;

pub use error::FeatureError;
pub use features::{FeatureExtractor, FeatureRecord};
pub use spectral::{SpectralTransform, Spectrum, DEFAULT_SAMPLE_RATE_HZ};
pub use statistics::SeriesStats;
pub use window::{Window, Windower, DEFAULT_WINDOW_SIZE};
