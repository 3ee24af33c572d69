//! Weather blending demo.
//!
//! Loads `config.ron`, applies CLI overrides, evaluates the configured preset,
//! and logs every renderer parameter. With `--ascent-steps` it walks the
//! observer from the surface out past the volumetric cloud horizon.
//!
//! Run with `cargo run -p nebula-weather-demo -- --preset thunderstorm --ascent-steps 10`.

mod tracing_sink;

use std::process::ExitCode;

use clap::Parser;
use nebula_config::{CliArgs, Config, default_config_dir};
use nebula_weather::{BlendSettings, CameraSample, WeatherBlender, WeatherPreset};
use tracing::{error, info};

use crate::tracing_sink::TracingSink;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let (config, config_dir) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            // Logging is not up yet.
            eprintln!("nebula-weather: {e}");
            return ExitCode::FAILURE;
        }
    };

    nebula_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &CliArgs) -> Result<(Config, std::path::PathBuf), nebula_config::ConfigError> {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    Ok((config, config_dir))
}

fn run(args: &CliArgs, config: &Config) -> Result<(), nebula_weather::WeatherError> {
    let preset: WeatherPreset = config.weather.preset.parse()?;
    let state = preset.state();

    let mut blender = WeatherBlender::new(BlendSettings::from_config(&config.weather))?;
    let mut sink = TracingSink::default();

    info!("Preset: {preset}");

    let horizon = blender.settings().fade.volumetric_clouds;
    for camera in observer_samples(args, config.weather.min_observer_distance_m, horizon) {
        let distance = camera.distance();
        sink.begin_frame(distance);
        let params = blender.update(&state, camera, &mut sink);
        info!(
            "distance={:.0}m coverage={:.3} density={:.3} faded={:.3} layer={:.3} shadow={:.3}",
            distance,
            params.cloud_coverage,
            params.cloud_density,
            params.cloud_density_faded,
            params.cloud_layer_density_faded,
            params.shadow_multiplier,
        );
    }

    Ok(())
}

/// Observer positions for this run, all floored at `min_distance`.
///
/// With `--ascent-steps` the distances are evenly spaced from the surface to
/// just past `horizon`; otherwise `--distance` is used alone.
fn observer_samples(args: &CliArgs, min_distance: f32, horizon: f32) -> Vec<CameraSample> {
    let distances = match args.ascent_steps {
        Some(steps) if steps > 0 => {
            let end = horizon * 1.1;
            (0..=steps)
                .map(|i| end * i as f32 / steps as f32)
                .collect()
        }
        _ => vec![args.distance],
    };
    distances
        .into_iter()
        .map(|d| CameraSample::floored(d, min_distance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances(samples: &[CameraSample]) -> Vec<f32> {
        samples.iter().map(|s| s.distance()).collect()
    }

    #[test]
    fn test_ascent_starts_at_floor_and_passes_horizon() {
        let args = CliArgs {
            ascent_steps: Some(10),
            ..CliArgs::default()
        };
        let d = distances(&observer_samples(&args, 100.0, 50_000.0));
        assert_eq!(d.len(), 11);
        assert_eq!(d[0], 100.0);
        assert!(d[10] > 50_000.0);
        assert!(d.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_single_distance_respects_floor() {
        let config = Config::default();
        let args = CliArgs {
            distance: 0.0,
            ..CliArgs::default()
        };
        let d = distances(&observer_samples(
            &args,
            config.weather.min_observer_distance_m,
            50_000.0,
        ));
        assert_eq!(d, vec![config.weather.min_observer_distance_m]);
    }

    #[test]
    fn test_single_distance_above_floor_is_kept() {
        let args = CliArgs {
            distance: 12_000.0,
            ..CliArgs::default()
        };
        let d = distances(&observer_samples(&args, 100.0, 50_000.0));
        assert_eq!(d, vec![12_000.0]);
    }

    #[test]
    fn test_run_with_default_config() {
        let config = Config::default();
        let args = CliArgs {
            ascent_steps: Some(3),
            ..CliArgs::default()
        };
        assert!(run(&args, &config).is_ok());
    }

    #[test]
    fn test_run_rejects_unknown_preset() {
        let mut config = Config::default();
        config.weather.preset = "meteor_shower".to_string();
        assert!(run(&CliArgs::default(), &config).is_err());
    }

    #[test]
    fn test_run_rejects_inverted_horizons() {
        let mut config = Config::default();
        config.weather.volumetric_clouds_fade_distance_m = 1_000.0;
        assert!(run(&CliArgs::default(), &config).is_err());
    }
}
