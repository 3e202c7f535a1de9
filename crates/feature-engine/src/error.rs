//! Feature Extraction Error Types

use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, Error)]
pub enum FeatureError {
    /// Zero-length series handed to the spectral transform
    #[error("cannot transform an empty window")]
    EmptyWindow,

    /// Window too short to retain any spectrum bins after DC removal
    /// and Nyquist truncation
    #[error("window {window_index} has {samples} samples, too few for spectral features")]
    DegenerateWindow {
        window_index: usize,
        samples: usize,
    },
}
