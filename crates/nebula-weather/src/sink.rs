//! The renderer-facing side: named parameters and the sink that receives them.

use glam::Vec3;
use rustc_hash::FxHashMap;

/// Every parameter the blender emits, with a stable dotted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    FogEnabled,
    FogDensity,
    FogMeanFreePath,
    FogBaseHeight,
    FogMaxHeight,
    FogAlbedo,
    FogTint,
    CloudCoverage,
    CloudDensity,
    CloudDensityFaded,
    CloudLayerDensityFaded,
    CloudLayerOpacity,
    VolumetricCloudsOpacity,
    CloudShapeFactor,
    CloudScatteringTint,
    ShadowMultiplier,
}

impl ParameterName {
    pub const ALL: [ParameterName; 16] = [
        ParameterName::FogEnabled,
        ParameterName::FogDensity,
        ParameterName::FogMeanFreePath,
        ParameterName::FogBaseHeight,
        ParameterName::FogMaxHeight,
        ParameterName::FogAlbedo,
        ParameterName::FogTint,
        ParameterName::CloudCoverage,
        ParameterName::CloudDensity,
        ParameterName::CloudDensityFaded,
        ParameterName::CloudLayerDensityFaded,
        ParameterName::CloudLayerOpacity,
        ParameterName::VolumetricCloudsOpacity,
        ParameterName::CloudShapeFactor,
        ParameterName::CloudScatteringTint,
        ParameterName::ShadowMultiplier,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterName::FogEnabled => "fog.enabled",
            ParameterName::FogDensity => "fog.density",
            ParameterName::FogMeanFreePath => "fog.mean_free_path",
            ParameterName::FogBaseHeight => "fog.base_height",
            ParameterName::FogMaxHeight => "fog.max_height",
            ParameterName::FogAlbedo => "fog.albedo",
            ParameterName::FogTint => "fog.tint",
            ParameterName::CloudCoverage => "clouds.coverage",
            ParameterName::CloudDensity => "clouds.density",
            ParameterName::CloudDensityFaded => "clouds.density_faded",
            ParameterName::CloudLayerDensityFaded => "cloud_layer.density_faded",
            ParameterName::CloudLayerOpacity => "cloud_layer.opacity",
            ParameterName::VolumetricCloudsOpacity => "clouds.opacity",
            ParameterName::CloudShapeFactor => "clouds.shape_factor",
            ParameterName::CloudScatteringTint => "clouds.scattering_tint",
            ParameterName::ShadowMultiplier => "clouds.shadow_multiplier",
        }
    }
}

/// Receives evaluated parameters and forwards them to a renderer.
///
/// Implementations may ignore values (no renderer attached yet) or buffer
/// them; the blender never asks whether the sink is ready.
pub trait RenderParameterSink {
    fn set_scalar(&mut self, name: ParameterName, value: f32);
    fn set_color(&mut self, name: ParameterName, value: Vec3);
    fn set_toggle(&mut self, name: ParameterName, enabled: bool);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderParameterSink for NullSink {
    fn set_scalar(&mut self, _name: ParameterName, _value: f32) {}
    fn set_color(&mut self, _name: ParameterName, _value: Vec3) {}
    fn set_toggle(&mut self, _name: ParameterName, _enabled: bool) {}
}

/// A value captured by [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Scalar(f32),
    Color(Vec3),
    Toggle(bool),
}

/// Sink that keeps the most recent value written under each name.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    values: FxHashMap<ParameterName, ParameterValue>,
    writes: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: ParameterName) -> Option<ParameterValue> {
        self.values.get(&name).copied()
    }

    pub fn scalar(&self, name: ParameterName) -> Option<f32> {
        match self.get(name)? {
            ParameterValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn color(&self, name: ParameterName) -> Option<Vec3> {
        match self.get(name)? {
            ParameterValue::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn toggle(&self, name: ParameterName) -> Option<bool> {
        match self.get(name)? {
            ParameterValue::Toggle(b) => Some(b),
            _ => None,
        }
    }

    /// Number of distinct parameters recorded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total writes received, including overwrites.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn record(&mut self, name: ParameterName, value: ParameterValue) {
        self.values.insert(name, value);
        self.writes += 1;
    }
}

impl RenderParameterSink for RecordingSink {
    fn set_scalar(&mut self, name: ParameterName, value: f32) {
        self.record(name, ParameterValue::Scalar(value));
    }

    fn set_color(&mut self, name: ParameterName, value: Vec3) {
        self.record(name, ParameterValue::Color(value));
    }

    fn set_toggle(&mut self, name: ParameterName, enabled: bool) {
        self.record(name, ParameterValue::Toggle(enabled));
    }
}
