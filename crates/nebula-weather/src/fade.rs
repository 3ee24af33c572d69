//! Distance-based cloud fade: clouds thin out as the observer leaves the atmosphere.
//!
//! Two linear horizons attenuate density: the cloud layer disappears first,
//! volumetric clouds later. Coverage is never faded: clouds become thinner,
//! not less frequent.

use serde::{Deserialize, Serialize};

use crate::coverage::clamp01;

/// Distances (meters) at which each cloud representation has fully faded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeThresholds {
    /// Near horizon: cloud-layer opacity reaches zero here.
    pub cloud_layer: f32,
    /// Far horizon: volumetric-cloud opacity reaches zero here.
    pub volumetric_clouds: f32,
    /// Distance at which cloud shadows have fully faded.
    pub shadow: f32,
}

impl Default for FadeThresholds {
    fn default() -> Self {
        Self {
            cloud_layer: 10_000.0,       // 10 km
            volumetric_clouds: 50_000.0, // 50 km
            shadow: 50_000.0,
        }
    }
}

/// Result of fading one density value at one distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFade {
    /// Opacity factor for the cloud layer, `[0, 1]`.
    pub cloud_layer_opacity: f32,
    /// Opacity factor for volumetric clouds, `[0, 1]`.
    pub volumetric_clouds_opacity: f32,
    /// Density scaled by the volumetric opacity.
    pub faded_density: f32,
    /// Density scaled by the cloud-layer opacity.
    pub faded_layer_density: f32,
}

/// `1` at distance 0, falling linearly to `0` at `threshold` and staying there.
pub fn opacity_factor(distance: f32, threshold: f32) -> f32 {
    1.0 - clamp01(distance / threshold)
}

/// Attenuate `density` for an observer at `distance`.
pub fn apply_distance_fade(density: f32, distance: f32, thresholds: &FadeThresholds) -> DistanceFade {
    let cloud_layer_opacity = opacity_factor(distance, thresholds.cloud_layer);
    let volumetric_clouds_opacity = opacity_factor(distance, thresholds.volumetric_clouds);
    let density = clamp01(density);

    DistanceFade {
        cloud_layer_opacity,
        volumetric_clouds_opacity,
        faded_density: density * volumetric_clouds_opacity,
        faded_layer_density: density * cloud_layer_opacity,
    }
}
