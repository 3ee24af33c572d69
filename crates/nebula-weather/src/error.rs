//! Weather error types.

/// Errors raised while building a blender or resolving authoring input.
///
/// Evaluation itself never fails; these only surface at setup time.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WeatherError {
    /// A fade distance was zero, negative, or not finite.
    #[error("{name} must be a positive finite distance, got {value}")]
    InvalidDistance { name: &'static str, value: f32 },

    /// The volumetric-cloud horizon must lie beyond the cloud-layer horizon.
    #[error("volumetric cloud fade distance ({far}) must exceed cloud layer fade distance ({near})")]
    ThresholdOrder { near: f32, far: f32 },

    /// A fog profile had a non-positive mean free path or inverted heights.
    #[error("fog profile `{profile}` is invalid: {reason}")]
    InvalidFogProfile {
        profile: &'static str,
        reason: &'static str,
    },

    /// A unit-range threshold fell outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    /// No preset with this name exists.
    #[error("unknown weather preset: {0}")]
    UnknownPreset(String),
}
