//! Animation configuration.
//!
//! Typically loaded from a JSON file by the application and turned into a
//! [`Pacing`] with [`AnimationConfig::pacing`]:
//!
//! ```json
//! { "pacing": { "constant_speed": { "speed_kmh": 12080.0 } }, "start_delay_ms": 1000.0 }
//! { "pacing": { "segment_duration": { "millis": 100.0 } } }
//! ```

use std::fs;

use serde::{Deserialize, Serialize};

use crate::{AnimateError, AnimateResult, Pacing};

/// How a run is paced, as written in a config file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingConfig {
    ConstantSpeed { speed_kmh: f64 },
    SegmentDuration { millis: f64 },
}

/// Top-level animation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub pacing: PacingConfig,

    /// Host time to wait before the first run starts.  Default: 0.
    #[serde(default)]
    pub start_delay_ms: f64,
}

impl AnimationConfig {
    pub fn from_json_str(text: &str) -> AnimateResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &std::path::Path) -> AnimateResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validate and convert into a [`Pacing`].
    ///
    /// # Errors
    ///
    /// `Config` for a non-positive or non-finite speed, duration, or a
    /// negative start delay.
    pub fn pacing(&self) -> AnimateResult<Pacing> {
        if !(self.start_delay_ms.is_finite() && self.start_delay_ms >= 0.0) {
            return Err(AnimateError::Config(format!(
                "start_delay_ms must be a non-negative number, got {}",
                self.start_delay_ms
            )));
        }
        let pacing = match self.pacing {
            PacingConfig::ConstantSpeed { speed_kmh } => Pacing::constant_kmh(speed_kmh),
            PacingConfig::SegmentDuration { millis }  => Pacing::per_segment_ms(millis),
        };
        pacing.validate().map_err(|e| AnimateError::Config(e.to_string()))
    }
}
