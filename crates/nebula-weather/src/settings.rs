//! Tunable blender settings and their validation.

use nebula_config::WeatherConfig;
use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::WeatherError;
use crate::fade::FadeThresholds;
use crate::fog::FogProfiles;

/// Everything the blender needs besides the per-tick inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendSettings {
    pub fade: FadeThresholds,
    pub fog: FogProfiles,
    pub palette: Palette,
    /// Fog is reported enabled when its density exceeds this.
    pub fog_enable_threshold: f32,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            fade: FadeThresholds::default(),
            fog: FogProfiles::default(),
            palette: Palette::default(),
            fog_enable_threshold: 0.01,
        }
    }
}

impl BlendSettings {
    /// Default profiles and palette with the distances from `config`.
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self {
            fade: FadeThresholds {
                cloud_layer: config.cloud_layer_fade_distance_m,
                volumetric_clouds: config.volumetric_clouds_fade_distance_m,
                shadow: config.shadow_fade_distance_m,
            },
            fog_enable_threshold: config.fog_enable_threshold,
            ..Self::default()
        }
    }

    /// Reject settings that would divide by zero or invert a range.
    pub fn validate(&self) -> Result<(), WeatherError> {
        check_distance("cloud_layer", self.fade.cloud_layer)?;
        check_distance("volumetric_clouds", self.fade.volumetric_clouds)?;
        check_distance("shadow", self.fade.shadow)?;

        if self.fade.volumetric_clouds <= self.fade.cloud_layer {
            return Err(WeatherError::ThresholdOrder {
                near: self.fade.cloud_layer,
                far: self.fade.volumetric_clouds,
            });
        }

        for (profile, fog) in self.fog.named() {
            if !(fog.mean_free_path.is_finite() && fog.mean_free_path > 0.0) {
                return Err(WeatherError::InvalidFogProfile {
                    profile,
                    reason: "mean free path must be positive",
                });
            }
            if !(fog.base_height.is_finite() && fog.max_height.is_finite()) {
                return Err(WeatherError::InvalidFogProfile {
                    profile,
                    reason: "heights must be finite",
                });
            }
            if fog.max_height < fog.base_height {
                return Err(WeatherError::InvalidFogProfile {
                    profile,
                    reason: "max height is below base height",
                });
            }
        }

        if !(0.0..=1.0).contains(&self.fog_enable_threshold) {
            return Err(WeatherError::InvalidThreshold {
                name: "fog_enable_threshold",
                value: self.fog_enable_threshold,
            });
        }

        Ok(())
    }
}

fn check_distance(name: &'static str, value: f32) -> Result<(), WeatherError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WeatherError::InvalidDistance { name, value })
    }
}
