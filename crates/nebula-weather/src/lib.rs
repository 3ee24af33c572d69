//! Weather blending: turns authored weather sliders and the observer's distance
//! into fog, cloud, color, and shadow parameters for the renderer.
//!
//! [`WeatherBlender::evaluate`] is the single entry point. It is pure and cheap,
//! intended to run once per frame; [`WeatherBlender::update`] additionally
//! pushes the result into a [`RenderParameterSink`].

mod blender;
mod camera;
mod color;
mod coverage;
mod error;
mod fade;
mod fog;
mod params;
mod settings;
mod sink;
mod state;

pub use blender::WeatherBlender;
pub use camera::{CameraSample, DEFAULT_MIN_OBSERVER_DISTANCE};
pub use color::{Palette, lerp_color, scattering_tint, shadow_multiplier, shape_factor};
pub use coverage::{derive_coverage, derive_density};
pub use error::WeatherError;
pub use fade::{DistanceFade, FadeThresholds, apply_distance_fade, opacity_factor};
pub use fog::{
    FogParameters, FogProfile, FogProfiles, MIN_MEAN_FREE_PATH, derive_fog, derive_fog_density,
};
pub use params::{RenderParameters, WeatherUniform};
pub use settings::BlendSettings;
pub use sink::{NullSink, ParameterName, ParameterValue, RecordingSink, RenderParameterSink};
pub use state::{
    AtmosphericEffects, CloudCover, Precipitation, SevereWeather, WeatherPreset, WeatherState,
};
