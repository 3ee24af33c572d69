//! Observer distance sampled once per tick.

use glam::Vec3;

/// Floor applied to camera distances derived from world positions, in meters.
pub const DEFAULT_MIN_OBSERVER_DISTANCE: f32 = 100.0;

/// Distance of the observing camera from the reference origin, in meters.
///
/// Always non-negative. The caller builds one per tick and hands it to the
/// blender; nothing is looked up globally.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraSample {
    distance: f32,
}

impl CameraSample {
    /// Wrap a raw distance. Negative and NaN input saturate to zero.
    pub fn new(distance: f32) -> Self {
        // `max` returns the non-NaN operand.
        Self {
            distance: distance.max(0.0),
        }
    }

    /// Wrap a raw distance, never reporting less than `min_distance`.
    ///
    /// An observer at the origin still reads as standing on the surface.
    pub fn floored(distance: f32, min_distance: f32) -> Self {
        Self::new(distance.max(min_distance))
    }

    /// Sample from a camera position relative to the planet centre, floored
    /// like [`Self::floored`].
    pub fn from_position(position: Vec3, min_distance: f32) -> Self {
        Self::floored(position.length(), min_distance)
    }

    /// Distance in meters.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}
