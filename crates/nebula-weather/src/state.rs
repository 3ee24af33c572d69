//! Authored weather sliders: four independent groups of intensities.
//!
//! Every slider is nominally in `[0.0, 1.0]`. Groups are not normalized against
//! each other, and the four cloud-cover sliders are independent weights rather
//! than a distribution: nothing here rescales them to sum to one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coverage::clamp01;
use crate::error::WeatherError;

/// How much of the sky is covered by clouds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudCover {
    /// No clouds in the sky.
    pub clear: f32,
    /// Few, scattered clouds.
    pub sparse: f32,
    /// Many clouds, but not fully covered.
    pub cloudy: f32,
    /// Sky completely covered.
    pub overcast: f32,
}

/// Falling water and snow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precipitation {
    /// Light rain with small droplets.
    pub drizzle: f32,
    /// Short, heavy bursts of rain.
    pub shower: f32,
    /// Mix of rain and snow.
    pub sleet: f32,
    /// Snowfall.
    pub snowy: f32,
    /// Severe snowstorm with strong winds.
    pub blizzard: f32,
}

/// Storm systems and wind-driven events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SevereWeather {
    /// General stormy conditions.
    pub stormy: f32,
    /// Storm with thunder and lightning.
    pub thunderstorm: f32,
    /// Rotating column of air in contact with the ground.
    pub tornado: f32,
    /// Large storm system with strong winds and rain.
    pub hurricane: f32,
    /// Strong wind carrying sand and dust.
    pub sandstorm: f32,
}

/// Visibility-reducing effects near the ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphericEffects {
    /// Thick cloud near the ground.
    pub foggy: f32,
    /// Thin, light fog.
    pub mist: f32,
    /// Fine particles in the air.
    pub hazy: f32,
    /// Airborne dust.
    pub dusty: f32,
    /// Strong winds without precipitation.
    pub windy: f32,
}

/// The full set of weather sliders read by the blender each tick.
///
/// Owned by the authoring side; the blender only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherState {
    pub cloud_cover: CloudCover,
    pub precipitation: Precipitation,
    pub severe_weather: SevereWeather,
    pub atmospheric_effects: AtmosphericEffects,
}

impl WeatherState {
    /// A state with every slider set to `value`.
    pub fn uniform(value: f32) -> Self {
        Self {
            cloud_cover: CloudCover {
                clear: value,
                sparse: value,
                cloudy: value,
                overcast: value,
            },
            precipitation: Precipitation {
                drizzle: value,
                shower: value,
                sleet: value,
                snowy: value,
                blizzard: value,
            },
            severe_weather: SevereWeather {
                stormy: value,
                thunderstorm: value,
                tornado: value,
                hurricane: value,
                sandstorm: value,
            },
            atmospheric_effects: AtmosphericEffects {
                foggy: value,
                mist: value,
                hazy: value,
                dusty: value,
                windy: value,
            },
        }
    }

    /// Copy with every slider clamped to `[0, 1]`; NaN becomes 0.
    pub fn saturated(&self) -> Self {
        let c = &self.cloud_cover;
        let p = &self.precipitation;
        let s = &self.severe_weather;
        let a = &self.atmospheric_effects;
        Self {
            cloud_cover: CloudCover {
                clear: clamp01(c.clear),
                sparse: clamp01(c.sparse),
                cloudy: clamp01(c.cloudy),
                overcast: clamp01(c.overcast),
            },
            precipitation: Precipitation {
                drizzle: clamp01(p.drizzle),
                shower: clamp01(p.shower),
                sleet: clamp01(p.sleet),
                snowy: clamp01(p.snowy),
                blizzard: clamp01(p.blizzard),
            },
            severe_weather: SevereWeather {
                stormy: clamp01(s.stormy),
                thunderstorm: clamp01(s.thunderstorm),
                tornado: clamp01(s.tornado),
                hurricane: clamp01(s.hurricane),
                sandstorm: clamp01(s.sandstorm),
            },
            atmospheric_effects: AtmosphericEffects {
                foggy: clamp01(a.foggy),
                mist: clamp01(a.mist),
                hazy: clamp01(a.hazy),
                dusty: clamp01(a.dusty),
                windy: clamp01(a.windy),
            },
        }
    }
}

/// Named starting points for authoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherPreset {
    Clear,
    PartlyCloudy,
    Overcast,
    Drizzle,
    Thunderstorm,
    Hurricane,
    Blizzard,
    Foggy,
    Sandstorm,
}

impl WeatherPreset {
    /// Every preset, in declaration order.
    pub const ALL: [WeatherPreset; 9] = [
        WeatherPreset::Clear,
        WeatherPreset::PartlyCloudy,
        WeatherPreset::Overcast,
        WeatherPreset::Drizzle,
        WeatherPreset::Thunderstorm,
        WeatherPreset::Hurricane,
        WeatherPreset::Blizzard,
        WeatherPreset::Foggy,
        WeatherPreset::Sandstorm,
    ];

    /// Canonical snake_case name, as stored in `config.ron`.
    pub fn name(self) -> &'static str {
        match self {
            WeatherPreset::Clear => "clear",
            WeatherPreset::PartlyCloudy => "partly_cloudy",
            WeatherPreset::Overcast => "overcast",
            WeatherPreset::Drizzle => "drizzle",
            WeatherPreset::Thunderstorm => "thunderstorm",
            WeatherPreset::Hurricane => "hurricane",
            WeatherPreset::Blizzard => "blizzard",
            WeatherPreset::Foggy => "foggy",
            WeatherPreset::Sandstorm => "sandstorm",
        }
    }

    /// The slider values this preset stands for.
    pub fn state(self) -> WeatherState {
        let mut state = WeatherState::default();
        match self {
            WeatherPreset::Clear => {
                state.cloud_cover.clear = 1.0;
            }
            WeatherPreset::PartlyCloudy => {
                state.cloud_cover.clear = 0.4;
                state.cloud_cover.sparse = 0.6;
            }
            WeatherPreset::Overcast => {
                state.cloud_cover.overcast = 1.0;
                state.atmospheric_effects.mist = 0.2;
            }
            WeatherPreset::Drizzle => {
                state.cloud_cover.cloudy = 0.8;
                state.precipitation.drizzle = 0.7;
                state.atmospheric_effects.mist = 0.4;
            }
            WeatherPreset::Thunderstorm => {
                state.cloud_cover.overcast = 0.8;
                state.precipitation.shower = 0.9;
                state.severe_weather.stormy = 0.6;
                state.severe_weather.thunderstorm = 1.0;
                state.atmospheric_effects.windy = 0.5;
            }
            WeatherPreset::Hurricane => {
                state.cloud_cover.overcast = 1.0;
                state.precipitation.shower = 1.0;
                state.severe_weather.hurricane = 1.0;
                state.atmospheric_effects.windy = 1.0;
            }
            WeatherPreset::Blizzard => {
                state.cloud_cover.overcast = 0.7;
                state.precipitation.snowy = 0.6;
                state.precipitation.blizzard = 1.0;
                state.atmospheric_effects.windy = 0.8;
            }
            WeatherPreset::Foggy => {
                state.cloud_cover.cloudy = 0.3;
                state.atmospheric_effects.foggy = 1.0;
            }
            WeatherPreset::Sandstorm => {
                state.cloud_cover.sparse = 0.3;
                state.severe_weather.sandstorm = 1.0;
                state.atmospheric_effects.dusty = 0.6;
                state.atmospheric_effects.windy = 1.0;
            }
        }
        state
    }
}

impl fmt::Display for WeatherPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherPreset {
    type Err = WeatherError;

    /// Accepts snake_case, kebab-case and any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| WeatherError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_all_zero() {
        assert_eq!(WeatherState::default(), WeatherState::uniform(0.0));
    }

    #[test]
    fn test_saturated_clamps_every_slider() {
        assert_eq!(WeatherState::uniform(f32::INFINITY).saturated(), WeatherState::uniform(1.0));
        assert_eq!(WeatherState::uniform(-2.0).saturated(), WeatherState::uniform(0.0));
        assert_eq!(WeatherState::uniform(f32::NAN).saturated(), WeatherState::uniform(0.0));
        assert_eq!(WeatherState::uniform(0.4).saturated(), WeatherState::uniform(0.4));
    }

    #[test]
    fn test_preset_names_parse_back() {
        for preset in WeatherPreset::ALL {
            let parsed: WeatherPreset = preset.name().parse().unwrap();
            assert_eq!(parsed, preset);
        }
    }

    #[test]
    fn test_preset_parse_accepts_kebab_and_upper_case() {
        assert_eq!(
            "Partly-Cloudy".parse::<WeatherPreset>().unwrap(),
            WeatherPreset::PartlyCloudy
        );
        assert_eq!(
            " SANDSTORM ".parse::<WeatherPreset>().unwrap(),
            WeatherPreset::Sandstorm
        );
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let err = "acid_rain".parse::<WeatherPreset>().unwrap_err();
        assert!(matches!(err, WeatherError::UnknownPreset(ref name) if name == "acid_rain"));
    }

    #[test]
    fn test_preset_sliders_stay_in_unit_range() {
        for preset in WeatherPreset::ALL {
            let state = preset.state();
            let json = serde_json::to_value(state).unwrap();
            for group in json.as_object().unwrap().values() {
                for (slider, value) in group.as_object().unwrap() {
                    let v = value.as_f64().unwrap();
                    assert!(
                        (0.0..=1.0).contains(&v),
                        "{preset}: slider {slider} out of range: {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_cloud_cover_is_not_renormalized() {
        // Authoring may leave the cover sliders summing past 1.
        let state: WeatherState =
            ron::from_str("(cloud_cover: (clear: 1.0, overcast: 1.0))").unwrap();
        assert_eq!(state.cloud_cover.clear, 1.0);
        assert_eq!(state.cloud_cover.overcast, 1.0);
        assert_eq!(state.cloud_cover.sparse, 0.0);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let state: WeatherState = ron::from_str("(severe_weather: (hurricane: 0.5))").unwrap();
        assert_eq!(state.severe_weather.hurricane, 0.5);
        assert_eq!(state.precipitation, Precipitation::default());
    }
}
