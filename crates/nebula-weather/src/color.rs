//! Color tints, cloud shape factor, and shadow falloff.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::coverage::clamp01;
use crate::state::WeatherState;

/// Endpoint colors for every tint the blender interpolates, linear RGB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fog albedo under clean air.
    pub fog_albedo_clear: Vec3,
    /// Fog albedo when dust or sand saturates the air.
    pub fog_albedo_dusty: Vec3,
    /// Fog tint under clean air.
    pub fog_tint_clear: Vec3,
    /// Fog tint when dust or sand saturates the air.
    pub fog_tint_dusty: Vec3,
    /// Cloud scattering tint in calm weather.
    pub cloud_bright: Vec3,
    /// Cloud scattering tint under thunderstorms and hurricanes.
    pub cloud_dark: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fog_albedo_clear: Vec3::new(0.9, 0.9, 0.92),
            fog_albedo_dusty: Vec3::new(0.7, 0.65, 0.6),
            fog_tint_clear: Vec3::ONE,
            fog_tint_dusty: Vec3::new(0.8, 0.65, 0.45),
            cloud_bright: Vec3::ONE,
            cloud_dark: Vec3::new(0.4, 0.4, 0.45),
        }
    }
}

/// Linear blend between two RGB colors with `t` clamped to `[0, 1]`.
///
/// `t <= 0` returns `a` exactly and `t >= 1` returns `b` exactly.
pub fn lerp_color(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let t = clamp01(t);
    a * (1.0 - t) + b * t
}

/// Cloud silhouette factor: coverage `0..1` remapped to `1..0.5`.
///
/// Higher coverage gives a flatter, denser apparent shape.
pub fn shape_factor(coverage: f32) -> f32 {
    1.0 - 0.5 * clamp01(coverage)
}

/// Cloud scattering tint, darkening with thunderstorms and hurricanes.
pub fn scattering_tint(state: &WeatherState, palette: &Palette) -> Vec3 {
    let darken = state.severe_weather.thunderstorm + state.severe_weather.hurricane;
    lerp_color(palette.cloud_bright, palette.cloud_dark, darken)
}

/// Shadow strength for an observer at `distance`, fading to 0 at `threshold`.
pub fn shadow_multiplier(distance: f32, threshold: f32) -> f32 {
    1.0 - clamp01(distance / threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
    fn blue() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn test_lerp_zero_returns_start_exactly() {
        assert_eq!(lerp_color(red(), blue(), 0.0), red());
        let palette = Palette::default();
        assert_eq!(
            lerp_color(palette.fog_albedo_clear, palette.fog_albedo_dusty, 0.0),
            palette.fog_albedo_clear
        );
    }

    #[test]
    fn test_lerp_one_and_beyond_returns_end_exactly() {
        assert_eq!(lerp_color(red(), blue(), 1.0), blue());
        assert_eq!(lerp_color(red(), blue(), 1.7), blue());
        let palette = Palette::default();
        assert_eq!(
            lerp_color(palette.fog_albedo_clear, palette.fog_albedo_dusty, 2.0),
            palette.fog_albedo_dusty
        );
    }

    #[test]
    fn test_lerp_midpoint_is_mean() {
        let palette = Palette::default();
        let a = palette.fog_tint_clear;
        let b = palette.fog_tint_dusty;
        let mid = lerp_color(a, b, 0.5);
        let mean = (a + b) * 0.5;
        assert!(
            mid.abs_diff_eq(mean, 1e-6),
            "Midpoint {mid:?} should equal mean {mean:?}"
        );
    }

    #[test]
    fn test_lerp_negative_factor_clamps_to_start() {
        assert_eq!(lerp_color(red(), blue(), -0.5), red());
    }

    #[test]
    fn test_shape_factor_range_and_direction() {
        assert_eq!(shape_factor(0.0), 1.0);
        assert_eq!(shape_factor(1.0), 0.5);
        assert!((shape_factor(0.3) - 0.85).abs() < 1e-6);
        assert_eq!(shape_factor(3.0), 0.5);

        let mut prev = shape_factor(0.0);
        for i in 1..=50 {
            let current = shape_factor(i as f32 / 50.0);
            assert!(current <= prev, "Shape factor must not increase with coverage");
            prev = current;
        }
    }

    #[test]
    fn test_scattering_tint_darkens_with_storms() {
        let palette = Palette::default();
        let calm = WeatherState::default();
        assert_eq!(scattering_tint(&calm, &palette), palette.cloud_bright);

        let mut storm = WeatherState::default();
        storm.severe_weather.thunderstorm = 0.6;
        storm.severe_weather.hurricane = 0.6;
        assert_eq!(scattering_tint(&storm, &palette), palette.cloud_dark);
    }

    #[test]
    fn test_shadow_multiplier_falloff() {
        assert_eq!(shadow_multiplier(0.0, 50_000.0), 1.0);
        assert!((shadow_multiplier(25_000.0, 50_000.0) - 0.5).abs() < 1e-6);
        assert_eq!(shadow_multiplier(50_000.0, 50_000.0), 0.0);
        assert_eq!(shadow_multiplier(80_000.0, 50_000.0), 0.0);
    }
}
