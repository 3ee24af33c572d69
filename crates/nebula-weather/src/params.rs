//! Evaluated renderer parameters and their GPU packing.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::sink::{ParameterName, RenderParameterSink};

/// One tick's worth of renderer parameters. Recomputed from scratch every
/// evaluation; carries no identity beyond that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    /// Whether volumetric fog should be drawn at all.
    pub fog_enabled: bool,
    /// Overall fog thickness, `[0, 1]`.
    pub fog_density: f32,
    /// Meters, at least [`crate::fog::MIN_MEAN_FREE_PATH`].
    pub fog_mean_free_path: f32,
    pub fog_base_height: f32,
    pub fog_max_height: f32,
    pub fog_albedo: Vec3,
    pub fog_tint: Vec3,
    /// `[0, 1]`, never faded.
    pub cloud_coverage: f32,
    /// `[0, 1]`, before distance fade.
    pub cloud_density: f32,
    /// Volumetric cloud density after the far fade.
    pub cloud_density_faded: f32,
    /// Cloud layer density after the near fade.
    pub cloud_layer_density_faded: f32,
    pub cloud_layer_opacity: f32,
    pub volumetric_clouds_opacity: f32,
    /// `[0.5, 1]`.
    pub cloud_shape_factor: f32,
    pub cloud_scattering_tint: Vec3,
    /// `[0, 1]`.
    pub shadow_multiplier: f32,
}

impl RenderParameters {
    /// Push every field into `sink` by name.
    pub fn apply(&self, sink: &mut dyn RenderParameterSink) {
        sink.set_toggle(ParameterName::FogEnabled, self.fog_enabled);
        sink.set_scalar(ParameterName::FogDensity, self.fog_density);
        sink.set_scalar(ParameterName::FogMeanFreePath, self.fog_mean_free_path);
        sink.set_scalar(ParameterName::FogBaseHeight, self.fog_base_height);
        sink.set_scalar(ParameterName::FogMaxHeight, self.fog_max_height);
        sink.set_color(ParameterName::FogAlbedo, self.fog_albedo);
        sink.set_color(ParameterName::FogTint, self.fog_tint);

        sink.set_scalar(ParameterName::CloudCoverage, self.cloud_coverage);
        sink.set_scalar(ParameterName::CloudDensity, self.cloud_density);
        sink.set_scalar(ParameterName::CloudDensityFaded, self.cloud_density_faded);
        sink.set_scalar(
            ParameterName::CloudLayerDensityFaded,
            self.cloud_layer_density_faded,
        );
        sink.set_scalar(ParameterName::CloudLayerOpacity, self.cloud_layer_opacity);
        sink.set_scalar(
            ParameterName::VolumetricCloudsOpacity,
            self.volumetric_clouds_opacity,
        );
        sink.set_scalar(ParameterName::CloudShapeFactor, self.cloud_shape_factor);
        sink.set_color(ParameterName::CloudScatteringTint, self.cloud_scattering_tint);
        sink.set_scalar(ParameterName::ShadowMultiplier, self.shadow_multiplier);
    }
}

/// GPU-side weather uniform. Matches a WGSL struct of five `vec4<f32>`.
///
/// Each RGB color shares its 16-byte slot with one scalar.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct WeatherUniform {
    /// Fog albedo RGB. (offset 0)
    pub fog_albedo: [f32; 3],
    /// Fog mean free path. (offset 12)
    pub fog_mean_free_path: f32,
    /// Fog tint RGB. (offset 16)
    pub fog_tint: [f32; 3],
    /// Fog layer base height. (offset 28)
    pub fog_base_height: f32,
    /// Cloud scattering tint RGB. (offset 32)
    pub cloud_scattering_tint: [f32; 3],
    /// Fog layer max height. (offset 44)
    pub fog_max_height: f32,
    /// (offset 48)
    pub cloud_coverage: f32,
    /// (offset 52)
    pub cloud_density_faded: f32,
    /// (offset 56)
    pub cloud_layer_density_faded: f32,
    /// (offset 60)
    pub cloud_shape_factor: f32,
    /// (offset 64)
    pub shadow_multiplier: f32,
    /// Zero when fog is disabled. (offset 68)
    pub fog_density: f32,
    /// Padding to 16-byte alignment. (offset 72)
    pub _padding: [f32; 2],
}

static_assertions::assert_eq_size!(WeatherUniform, [u8; 80]);

impl WeatherUniform {
    pub fn from_params(params: &RenderParameters) -> Self {
        Self {
            fog_albedo: params.fog_albedo.to_array(),
            fog_mean_free_path: params.fog_mean_free_path,
            fog_tint: params.fog_tint.to_array(),
            fog_base_height: params.fog_base_height,
            cloud_scattering_tint: params.cloud_scattering_tint.to_array(),
            fog_max_height: params.fog_max_height,
            cloud_coverage: params.cloud_coverage,
            cloud_density_faded: params.cloud_density_faded,
            cloud_layer_density_faded: params.cloud_layer_density_faded,
            cloud_shape_factor: params.cloud_shape_factor,
            shadow_multiplier: params.shadow_multiplier,
            fog_density: if params.fog_enabled {
                params.fog_density
            } else {
                0.0
            },
            _padding: [0.0; 2],
        }
    }
}
