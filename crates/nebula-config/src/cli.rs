//! Command-line argument parsing for the weather tools.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Nebula weather command-line arguments.
///
/// Config overrides take precedence over `config.ron`; the observer flags
/// only affect the current run.
#[derive(Parser, Debug, Default)]
#[command(name = "nebula-weather", about = "Nebula weather blending")]
pub struct CliArgs {
    /// Weather preset to evaluate (e.g. clear, overcast, thunderstorm).
    #[arg(long)]
    pub preset: Option<String>,

    /// Distance in meters at which the cloud layer has faded out.
    #[arg(long)]
    pub cloud_layer_fade: Option<f32>,

    /// Distance in meters at which volumetric clouds have faded out.
    #[arg(long)]
    pub volumetric_fade: Option<f32>,

    /// Distance in meters at which cloud shadows have faded out.
    #[arg(long)]
    pub shadow_fade: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Observer distance from the planet surface, in meters.
    #[arg(long, default_value_t = 0.0)]
    pub distance: f32,

    /// Evaluate this many evenly spaced distances up to the volumetric fade distance.
    #[arg(long)]
    pub ascent_steps: Option<u32>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref preset) = args.preset {
            self.weather.preset = preset.clone();
        }
        if let Some(d) = args.cloud_layer_fade {
            self.weather.cloud_layer_fade_distance_m = d;
        }
        if let Some(d) = args.volumetric_fade {
            self.weather.volumetric_clouds_fade_distance_m = d;
        }
        if let Some(d) = args.shadow_fade {
            self.weather.shadow_fade_distance_m = d;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
