//! Volumetric fog parameters derived from the atmospheric sliders.
//!
//! Visibility distance and layer height come from blending four profiles
//! (clear, foggy, mist, hazy). Color is driven separately by dust and sand.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::{Palette, lerp_color};
use crate::coverage::clamp01;
use crate::state::WeatherState;

/// Shortest mean free path ever emitted, in meters.
pub const MIN_MEAN_FREE_PATH: f32 = 1.0;

/// One target fog look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogProfile {
    /// Average unobstructed light travel distance, meters.
    pub mean_free_path: f32,
    /// Height where the fog layer starts, meters.
    pub base_height: f32,
    /// Height where the fog layer ends, meters.
    pub max_height: f32,
}

impl FogProfile {
    pub const fn new(mean_free_path: f32, base_height: f32, max_height: f32) -> Self {
        Self {
            mean_free_path,
            base_height,
            max_height,
        }
    }
}

/// The four profiles blended by [`derive_fog`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogProfiles {
    pub clear: FogProfile,
    pub foggy: FogProfile,
    pub mist: FogProfile,
    pub hazy: FogProfile,
}

impl Default for FogProfiles {
    fn default() -> Self {
        Self {
            clear: FogProfile::new(400.0, 20.0, 250.0),
            foggy: FogProfile::new(5.0, 0.0, 50.0),
            mist: FogProfile::new(50.0, 5.0, 100.0),
            hazy: FogProfile::new(150.0, 10.0, 400.0),
        }
    }
}

impl FogProfiles {
    /// Profiles paired with their names, for validation and diagnostics.
    pub fn named(&self) -> [(&'static str, &FogProfile); 4] {
        [
            ("clear", &self.clear),
            ("foggy", &self.foggy),
            ("mist", &self.mist),
            ("hazy", &self.hazy),
        ]
    }
}

/// Fog output for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogParameters {
    pub mean_free_path: f32,
    pub base_height: f32,
    pub max_height: f32,
    pub albedo: Vec3,
    pub tint: Vec3,
}

/// Blend fog profiles and colors for `state`.
///
/// Weights are not renormalized: when foggy, mist and hazy sum past one the
/// clear profile drops out and the named profiles add up as-is.
pub fn derive_fog(state: &WeatherState, profiles: &FogProfiles, palette: &Palette) -> FogParameters {
    let fx = &state.atmospheric_effects;
    let clear_weight = 1.0 - clamp01(fx.foggy + fx.mist + fx.hazy);

    let weighted = [
        (clear_weight, &profiles.clear),
        (fx.foggy, &profiles.foggy),
        (fx.mist, &profiles.mist),
        (fx.hazy, &profiles.hazy),
    ];

    let mut mean_free_path = 0.0;
    let mut base_height = 0.0;
    let mut max_height = 0.0;
    for (weight, profile) in weighted {
        mean_free_path += weight * profile.mean_free_path;
        base_height += weight * profile.base_height;
        max_height += weight * profile.max_height;
    }

    let mean_free_path = sanitize(mean_free_path).max(MIN_MEAN_FREE_PATH);
    let base_height = sanitize(base_height).max(0.0);
    let max_height = sanitize(max_height).max(base_height);

    let dust = state.atmospheric_effects.dusty + state.severe_weather.sandstorm;

    FogParameters {
        mean_free_path,
        base_height,
        max_height,
        albedo: lerp_color(palette.fog_albedo_clear, palette.fog_albedo_dusty, dust),
        tint: lerp_color(palette.fog_tint_clear, palette.fog_tint_dusty, dust),
    }
}

/// Overall fog thickness in `[0, 1]`, used to switch fog on and off.
pub fn derive_fog_density(state: &WeatherState) -> f32 {
    let fx = &state.atmospheric_effects;
    let precip = &state.precipitation;
    let severe = &state.severe_weather;

    let mut density = fx.foggy * 0.8 + fx.mist * 0.3 + fx.hazy * 0.2;
    density += precip.drizzle * 0.4 + precip.shower * 0.2 + precip.blizzard * 0.6;
    density += severe.sandstorm * 0.7 + severe.stormy * 0.3;

    clamp01(density)
}

fn sanitize(x: f32) -> f32 {
    if x.is_finite() { x } else { 0.0 }
}
