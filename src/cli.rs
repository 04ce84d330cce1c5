use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Launch flags shared by the chart writer and the viewer.
#[derive(Args, Debug, Clone, Default)]
pub struct LaunchArgs {
    /// Firing angle in degrees [default: 45]
    #[arg(allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Muzzle velocity in m/s [default: 380]
    #[arg(short, long)]
    pub velocity: Option<f64>,

    /// Gravitational acceleration in m/s^2 [default: 9.81]
    #[arg(short, long)]
    pub gravity: Option<f64>,

    /// Sampling interval in seconds [default: 0.01]
    #[arg(short = 't', long)]
    pub time_step: Option<f64>,

    /// TOML config file with [launch] and [chart] tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl LaunchArgs {
    /// Loads the config file, if any, then lays command-line values over it.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::default(),
        };

        let launch = &mut config.launch;
        if let Some(angle) = self.angle {
            launch.angle_deg = angle;
        }
        if let Some(velocity) = self.velocity {
            launch.muzzle_velocity_mps = velocity;
        }
        if let Some(gravity) = self.gravity {
            launch.gravity_mps2 = gravity;
        }
        if let Some(time_step) = self.time_step {
            launch.time_step_s = time_step;
        }

        debug!(?config.launch, "resolved launch parameters");
        Ok(config)
    }
}

pub const DEFAULT_LOG_DIRECTIVES: &str = "bullet_trajectory=info,trajectory_viewer=info";

/// `RUST_LOG`-style directives when given and parseable, otherwise
/// [`DEFAULT_LOG_DIRECTIVES`].
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

pub fn init_logging() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn no_flags_reproduce_the_reference_launch() {
        let config = LaunchArgs::default().resolve().expect("defaults resolve");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = LaunchArgs {
            angle: Some(60.0),
            velocity: Some(250.0),
            gravity: None,
            time_step: Some(0.05),
            config: None,
        };
        let launch = args.resolve().expect("flags resolve").launch;

        assert_eq!(launch.angle_deg, 60.0);
        assert_eq!(launch.muzzle_velocity_mps, 250.0);
        assert_eq!(launch.gravity_mps2, 9.81);
        assert_eq!(launch.time_step_s, 0.05);
    }

    #[test]
    fn rust_log_can_raise_the_crate_to_debug() {
        let filter = log_filter(Some("bullet_trajectory=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_or_blank_rust_log_falls_back_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let args = LaunchArgs {
            config: Some(PathBuf::from("/nonexistent/trajectory.toml")),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }
}
