pub mod cli;
pub mod config;
pub mod core;

pub use config::Config;
pub use crate::core::ballistics::{
    FlightSummary, LaunchParameters, TrajectoryError, TrajectoryResult, TrajectorySample,
    flight_summary, sample_trajectory,
};
