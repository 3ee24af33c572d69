//! Cloud coverage and density: fixed-weight sums over the slider groups.
//!
//! Sliders are clamped to `[0, 1]` before weighting and each sum is clamped
//! once at the end, so strong or non-finite inputs saturate.

use crate::state::WeatherState;

/// Coverage weights for the cloud-cover sliders (clear, sparse, cloudy, overcast).
const COVER_COVERAGE: [f32; 4] = [0.0, 0.3, 0.7, 1.0];
/// Coverage weights for stormy, thunderstorm, tornado, hurricane.
const SEVERE_COVERAGE: [f32; 4] = [0.6, 0.7, 0.8, 0.9];
const BLIZZARD_COVERAGE: f32 = 0.5;
const SNOWY_COVERAGE: f32 = 0.3;

/// Density contributed by an unset sky, scaled by `1 - clear`.
const UNCLEAR_DENSITY: f32 = 0.1;
/// Density weights for sparse, cloudy, overcast.
const COVER_DENSITY: [f32; 3] = [0.3, 0.6, 0.9];
/// Density weights for stormy, thunderstorm, tornado, hurricane.
const SEVERE_DENSITY: [f32; 4] = [0.6, 0.7, 0.8, 0.9];
const SHOWER_DENSITY: f32 = 0.3;
const BLIZZARD_DENSITY: f32 = 0.4;

/// Fraction of the sky occluded by cloud, in `[0, 1]`.
pub fn derive_coverage(state: &WeatherState) -> f32 {
    let state = state.saturated();
    let cover = &state.cloud_cover;
    let severe = &state.severe_weather;
    let precip = &state.precipitation;

    let mut coverage = cover.clear * COVER_COVERAGE[0]
        + cover.sparse * COVER_COVERAGE[1]
        + cover.cloudy * COVER_COVERAGE[2]
        + cover.overcast * COVER_COVERAGE[3];

    coverage += severe.stormy * SEVERE_COVERAGE[0]
        + severe.thunderstorm * SEVERE_COVERAGE[1]
        + severe.tornado * SEVERE_COVERAGE[2]
        + severe.hurricane * SEVERE_COVERAGE[3];

    coverage += precip.blizzard * BLIZZARD_COVERAGE + precip.snowy * SNOWY_COVERAGE;

    clamp01(coverage)
}

/// Optical thickness proxy for cloud rendering, in `[0, 1]`.
///
/// An all-zero state still yields [`UNCLEAR_DENSITY`]: an unset sky is never
/// completely empty.
pub fn derive_density(state: &WeatherState) -> f32 {
    let state = state.saturated();
    let cover = &state.cloud_cover;
    let severe = &state.severe_weather;
    let precip = &state.precipitation;

    let mut density = (1.0 - cover.clear) * UNCLEAR_DENSITY
        + cover.sparse * COVER_DENSITY[0]
        + cover.cloudy * COVER_DENSITY[1]
        + cover.overcast * COVER_DENSITY[2];

    density += severe.stormy * SEVERE_DENSITY[0]
        + severe.thunderstorm * SEVERE_DENSITY[1]
        + severe.tornado * SEVERE_DENSITY[2]
        + severe.hurricane * SEVERE_DENSITY[3];

    density += precip.shower * SHOWER_DENSITY + precip.blizzard * BLIZZARD_DENSITY;

    clamp01(density)
}

/// Saturating clamp to `[0, 1]`. NaN maps to 0.
pub(crate) fn clamp01(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CloudCover;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_all_zero_state_has_density_floor_but_no_coverage() {
        let state = WeatherState::default();
        assert_eq!(derive_coverage(&state), 0.0);
        let density = derive_density(&state);
        assert!(density > 0.0, "Unset sky should keep a density floor");
        assert!((density - 0.1).abs() < EPS, "Floor should be 0.1, got {density}");
    }

    #[test]
    fn test_all_one_state_saturates() {
        let state = WeatherState::uniform(1.0);
        assert_eq!(derive_coverage(&state), 1.0);
        assert_eq!(derive_density(&state), 1.0);
    }

    #[test]
    fn test_sparse_only_sky() {
        let state = WeatherState {
            cloud_cover: CloudCover {
                sparse: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!((derive_coverage(&state) - 0.3).abs() < EPS);
        // 0.3 from sparse plus the 0.1 unset-sky floor.
        assert!((derive_density(&state) - 0.4).abs() < EPS);
    }

    #[test]
    fn test_clear_sky_removes_density_floor() {
        let state = WeatherState {
            cloud_cover: CloudCover {
                clear: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(derive_coverage(&state), 0.0);
        assert_eq!(derive_density(&state), 0.0);
    }

    #[test]
    fn test_overcast_gives_full_coverage() {
        let mut state = WeatherState::default();
        state.cloud_cover.overcast = 1.0;
        assert_eq!(derive_coverage(&state), 1.0);
        assert!((derive_density(&state) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_hurricane_is_heaviest_severe_weather() {
        let single = |set: fn(&mut WeatherState)| {
            let mut state = WeatherState::default();
            set(&mut state);
            derive_coverage(&state)
        };
        let stormy = single(|s| s.severe_weather.stormy = 1.0);
        let thunder = single(|s| s.severe_weather.thunderstorm = 1.0);
        let tornado = single(|s| s.severe_weather.tornado = 1.0);
        let hurricane = single(|s| s.severe_weather.hurricane = 1.0);
        assert!(stormy < thunder && thunder < tornado && tornado < hurricane);
        assert!((hurricane - 0.9).abs() < EPS);
    }

    #[test]
    fn test_hurricane_monotonic() {
        let mut base = WeatherState::default();
        base.cloud_cover.sparse = 0.2;
        base.precipitation.shower = 0.3;

        let mut prev_coverage = -1.0_f32;
        let mut prev_density = -1.0_f32;
        for i in 0..=100 {
            let mut state = base;
            state.severe_weather.hurricane = i as f32 / 100.0;
            let coverage = derive_coverage(&state);
            let density = derive_density(&state);
            assert!(
                coverage >= prev_coverage,
                "Coverage decreased at hurricane={}: {prev_coverage} -> {coverage}",
                state.severe_weather.hurricane
            );
            assert!(
                density >= prev_density,
                "Density decreased at hurricane={}: {prev_density} -> {density}",
                state.severe_weather.hurricane
            );
            prev_coverage = coverage;
            prev_density = density;
        }
    }

    #[test]
    fn test_snow_adds_coverage_but_only_blizzard_adds_density() {
        let mut snowy = WeatherState::default();
        snowy.cloud_cover.clear = 1.0;
        snowy.precipitation.snowy = 1.0;
        assert!((derive_coverage(&snowy) - 0.3).abs() < EPS);
        assert_eq!(derive_density(&snowy), 0.0);

        let mut blizzard = snowy;
        blizzard.precipitation.snowy = 0.0;
        blizzard.precipitation.blizzard = 1.0;
        assert!((derive_coverage(&blizzard) - 0.5).abs() < EPS);
        assert!((derive_density(&blizzard) - 0.4).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let mut state = WeatherState::default();
        state.cloud_cover.clear = 5.0;
        assert_eq!(derive_density(&state), 0.0);

        state.cloud_cover.overcast = 40.0;
        assert_eq!(derive_coverage(&state), 1.0);
    }

    #[test]
    fn test_infinite_slider_saturates_instead_of_zeroing() {
        let mut state = WeatherState::default();
        state.cloud_cover.clear = f32::INFINITY;
        state.severe_weather.hurricane = 1.0;
        assert!(
            (derive_coverage(&state) - 0.9).abs() < EPS,
            "Expected 0.9, got {}",
            derive_coverage(&state)
        );

        let state = WeatherState::uniform(f32::INFINITY);
        assert_eq!(derive_coverage(&state), 1.0);
        assert_eq!(derive_density(&state), 1.0);
    }

    #[test]
    fn test_nan_slider_counts_as_zero() {
        let mut state = WeatherState::default();
        state.cloud_cover.overcast = 1.0;
        state.severe_weather.tornado = f32::NAN;
        assert_eq!(derive_coverage(&state), 1.0);
    }

    #[test]
    fn test_clamp01_handles_nan() {
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(-3.0), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
    }
}
