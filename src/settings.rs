//! Drift settings and preferences
//!
//! Read from LocalStorage on the web, defaults everywhere else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{DriftError, Result};
use crate::sim::bounds::{Bands, TravelBand};

/// Card motion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftSettings {
    /// Card width in CSS pixels
    pub card_width: f32,
    /// Card height in CSS pixels
    pub card_height: f32,
    /// Velocity bound in viewport percent per frame
    pub speed: f32,
    /// Horizontal band for left-side cards
    pub left_band: TravelBand,
    /// Horizontal band for right-side cards
    pub right_band: TravelBand,
    /// Vertical band for all cards
    pub vertical_band: TravelBand,
    /// Left-side spawn x range
    pub left_spawn: TravelBand,
    /// Right-side spawn x range
    pub right_spawn: TravelBand,
    /// Spawn y range
    pub vertical_spawn: TravelBand,
    /// How many recent achievements get a card
    pub recent_limit: usize,

    // === Accessibility ===
    /// Reduced motion (cards hold their spawn positions)
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            speed: SPEED,
            left_band: TravelBand::new(LEFT_MIN, LEFT_MAX),
            right_band: TravelBand::new(RIGHT_MIN, RIGHT_MAX),
            vertical_band: TravelBand::new(TOP_MIN, TOP_MAX),
            left_spawn: TravelBand::new(LEFT_MIN, LEFT_MIN + SPAWN_WIDTH),
            right_spawn: TravelBand::new(RIGHT_SPAWN_MIN, RIGHT_SPAWN_MIN + SPAWN_WIDTH),
            vertical_spawn: TravelBand::new(TOP_MIN, TOP_MAX),
            recent_limit: RECENT_LIMIT,

            reduced_motion: false,
        }
    }
}

impl DriftSettings {
    /// Card extent in pixels
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.card_width, self.card_height)
    }

    /// Travel bands for the boundary reflector
    pub fn bands(&self) -> Bands {
        Bands {
            left: self.left_band,
            right: self.right_band,
            vertical: self.vertical_band,
        }
    }

    /// Speed actually applied during integration (respects reduced_motion)
    pub fn effective_speed_scale(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { 1.0 }
    }

    /// Check ranges; invalid settings are never used for a run
    pub fn validate(&self) -> Result<()> {
        let extent_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(extent_ok(self.card_width) && extent_ok(self.card_height)) {
            return Err(DriftError::Settings(format!(
                "card extent must be positive and finite, got {}x{}",
                self.card_width, self.card_height
            )));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(DriftError::Settings(format!("speed must be >= 0, got {}", self.speed)));
        }
        let bands = [
            ("left_band", self.left_band),
            ("right_band", self.right_band),
            ("vertical_band", self.vertical_band),
            ("left_spawn", self.left_spawn),
            ("right_spawn", self.right_spawn),
            ("vertical_spawn", self.vertical_spawn),
        ];
        for (name, band) in bands {
            if !band.is_valid() {
                return Err(DriftError::Settings(format!(
                    "{} is inverted or not finite: [{}, {}]",
                    name, band.min, band.max
                )));
            }
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "achievement_drift_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Self>(&json) {
                    Ok(settings) => match settings.validate() {
                        Ok(()) => {
                            log::info!("Loaded drift settings from LocalStorage");
                            return settings;
                        }
                        Err(e) => log::warn!("Ignoring stored settings: {}", e),
                    },
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default drift settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DriftSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.extent(), Vec2::new(260.0, 60.0));
        assert_eq!(settings.recent_limit, 8);
        assert_eq!(settings.effective_speed_scale(), 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = DriftSettings::default();
        settings.card_height = 0.0;
        assert!(matches!(settings.validate(), Err(DriftError::Settings(_))));

        let mut settings = DriftSettings::default();
        settings.vertical_band = TravelBand::new(80.0, 10.0);
        assert!(settings.validate().is_err());

        let mut settings = DriftSettings::default();
        settings.speed = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_infinite_extent() {
        let mut settings = DriftSettings::default();
        settings.card_width = f32::INFINITY;
        assert!(matches!(settings.validate(), Err(DriftError::Settings(_))));

        let mut settings = DriftSettings::default();
        settings.card_height = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_reduced_motion_stops_integration() {
        let settings = DriftSettings {
            reduced_motion: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_speed_scale(), 0.0);
    }

    #[test]
    fn test_settings_json_roundtrip_defaults_reduced_motion() {
        let json = serde_json::to_string(&DriftSettings::default()).unwrap();
        let stripped = json.replace(",\"reduced_motion\":false", "");
        let parsed: DriftSettings = serde_json::from_str(&stripped).unwrap();
        assert_eq!(parsed, DriftSettings::default());
    }
}
