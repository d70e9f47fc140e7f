//! World settings
//!
//! Bounds and spawn parameters, persisted as JSON next to the driver.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Spawn region and derived-attribute parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Window width (spawn x in [-width/2, width/2))
    pub width: f32,
    /// Window height (spawn y in [-height/2, height/2))
    pub height: f32,
    /// Mass per unit of radius
    pub mass_scale_by_radius: f32,
    /// Smallest spawn radius (inclusive)
    pub min_radius: f32,
    /// Largest spawn radius (exclusive)
    pub max_radius: f32,
    /// Capacity reserved when a manager is created
    pub initial_capacity: usize,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            mass_scale_by_radius: MASS_SCALE_BY_RADIUS,
            min_radius: BALL_MIN_RADIUS,
            max_radius: BALL_MAX_RADIUS,
            initial_capacity: INITIAL_CAPACITY,
        }
    }
}

impl WorldSettings {
    /// Check that bounds and ranges describe a non-empty spawn region
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(SimError::InvalidArgument(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        // The span feeds sampling directly, so it must be finite as well
        if !(self.min_radius.is_finite() && self.max_radius.is_finite())
            || self.min_radius >= self.max_radius
            || !(self.max_radius - self.min_radius).is_finite()
        {
            return Err(SimError::InvalidArgument(format!(
                "radius range [{}, {}) is empty or too wide",
                self.min_radius, self.max_radius
            )));
        }
        if !self.mass_scale_by_radius.is_finite() {
            return Err(SimError::InvalidArgument(format!(
                "mass scale must be finite, got {}",
                self.mass_scale_by_radius
            )));
        }
        Ok(())
    }

    /// Half extents of the spawn region
    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Parse and validate settings; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path)
            .map_err(SimError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}
