//! Validated Accelerometer Sample

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One validated tri-axial accelerometer reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Capture time (UTC)
    pub timestamp: DateTime<Utc>,
    /// X-axis acceleration
    pub x: f64,
    /// Y-axis acceleration
    pub y: f64,
    /// Z-axis acceleration
    pub z: f64,
}

impl Sample {
    /// Euclidean norm of the three axes
    pub fn vector_magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}
