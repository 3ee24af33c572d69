//! A sink that reports parameters as structured tracing events.

use glam::Vec3;
use nebula_weather::{ParameterName, RenderParameterSink};
use tracing::debug;

/// Logs each parameter at debug level, tagged with the current frame.
#[derive(Debug, Default)]
pub struct TracingSink {
    frame: u64,
    distance: f32,
}

impl TracingSink {
    /// Start a new frame observed from `distance` meters.
    pub fn begin_frame(&mut self, distance: f32) {
        self.frame += 1;
        self.distance = distance;
    }
}

impl RenderParameterSink for TracingSink {
    fn set_scalar(&mut self, name: ParameterName, value: f32) {
        debug!(
            frame = self.frame,
            distance = self.distance,
            parameter = name.as_str(),
            value
        );
    }

    fn set_color(&mut self, name: ParameterName, value: Vec3) {
        debug!(
            frame = self.frame,
            distance = self.distance,
            parameter = name.as_str(),
            r = value.x,
            g = value.y,
            b = value.z
        );
    }

    fn set_toggle(&mut self, name: ParameterName, enabled: bool) {
        debug!(
            frame = self.frame,
            distance = self.distance,
            parameter = name.as_str(),
            enabled
        );
    }
}
