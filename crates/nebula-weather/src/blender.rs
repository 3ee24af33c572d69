//! The weather blender: weather sliders plus observer distance in, renderer
//! parameters out.

use crate::camera::CameraSample;
use crate::color::{scattering_tint, shadow_multiplier, shape_factor};
use crate::coverage::{derive_coverage, derive_density};
use crate::error::WeatherError;
use crate::fade::apply_distance_fade;
use crate::fog::{derive_fog, derive_fog_density};
use crate::params::RenderParameters;
use crate::settings::BlendSettings;
use crate::sink::RenderParameterSink;
use crate::state::WeatherState;

/// Maps a [`WeatherState`] and a [`CameraSample`] to [`RenderParameters`].
///
/// Evaluation is pure. The last output is kept only so callers can inspect
/// it; it never feeds back into the next evaluation.
#[derive(Debug, Clone)]
pub struct WeatherBlender {
    settings: BlendSettings,
    last_output: Option<RenderParameters>,
}

impl WeatherBlender {
    /// Build a blender, rejecting settings that would make evaluation ill-defined.
    pub fn new(settings: BlendSettings) -> Result<Self, WeatherError> {
        settings.validate()?;
        tracing::debug!(
            cloud_layer_fade_m = settings.fade.cloud_layer,
            volumetric_fade_m = settings.fade.volumetric_clouds,
            shadow_fade_m = settings.fade.shadow,
            "Weather blender ready"
        );
        Ok(Self {
            settings,
            last_output: None,
        })
    }

    pub fn settings(&self) -> &BlendSettings {
        &self.settings
    }

    /// Compute all renderer parameters for one tick.
    pub fn evaluate(&self, state: &WeatherState, camera: CameraSample) -> RenderParameters {
        let settings = &self.settings;
        let distance = camera.distance();

        let coverage = derive_coverage(state);
        let density = derive_density(state);
        let fade = apply_distance_fade(density, distance, &settings.fade);

        let fog = derive_fog(state, &settings.fog, &settings.palette);
        let fog_density = derive_fog_density(state);

        let params = RenderParameters {
            fog_enabled: fog_density > settings.fog_enable_threshold,
            fog_density,
            fog_mean_free_path: fog.mean_free_path,
            fog_base_height: fog.base_height,
            fog_max_height: fog.max_height,
            fog_albedo: fog.albedo,
            fog_tint: fog.tint,
            cloud_coverage: coverage,
            cloud_density: density,
            cloud_density_faded: fade.faded_density,
            cloud_layer_density_faded: fade.faded_layer_density,
            cloud_layer_opacity: fade.cloud_layer_opacity,
            volumetric_clouds_opacity: fade.volumetric_clouds_opacity,
            cloud_shape_factor: shape_factor(coverage),
            cloud_scattering_tint: scattering_tint(state, &settings.palette),
            shadow_multiplier: shadow_multiplier(distance, settings.fade.shadow),
        };

        tracing::trace!(
            distance,
            coverage,
            density,
            faded_density = params.cloud_density_faded,
            "Evaluated weather"
        );

        params
    }

    /// Evaluate, push the result into `sink`, and remember it.
    ///
    /// Meant to be called once per frame; there is no change detection.
    pub fn update(
        &mut self,
        state: &WeatherState,
        camera: CameraSample,
        sink: &mut dyn RenderParameterSink,
    ) -> &RenderParameters {
        let params = self.evaluate(state, camera);
        params.apply(sink);
        self.last_output.insert(params)
    }

    /// The parameters produced by the most recent [`Self::update`].
    pub fn last_output(&self) -> Option<&RenderParameters> {
        self.last_output.as_ref()
    }
}
