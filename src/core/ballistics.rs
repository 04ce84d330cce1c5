use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_MUZZLE_VELOCITY_MPS: f64 = 380.0; // 9x19mm out of a Beretta M9
pub const DEFAULT_TIME_STEP_S: f64 = 0.01;

/// Upper bound on the number of samples a single call may allocate.
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("Invalid {name} ({value}): {reason}.")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error(
        "Trajectory would need {requested:.0} samples (limit {limit}). Use a larger time step."
    )]
    TooManySamples { requested: f64, limit: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    pub angle_deg: f64,
    pub muzzle_velocity_mps: f64,
    pub gravity_mps2: f64,
    pub time_step_s: f64,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_DEG)
    }
}

impl LaunchParameters {
    pub fn new(angle_deg: f64) -> Self {
        Self {
            angle_deg,
            muzzle_velocity_mps: DEFAULT_MUZZLE_VELOCITY_MPS,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            time_step_s: DEFAULT_TIME_STEP_S,
        }
    }

    pub fn with_muzzle_velocity(mut self, muzzle_velocity_mps: f64) -> Self {
        self.muzzle_velocity_mps = muzzle_velocity_mps;
        self
    }

    pub fn with_gravity(mut self, gravity_mps2: f64) -> Self {
        self.gravity_mps2 = gravity_mps2;
        self
    }

    pub fn with_time_step(mut self, time_step_s: f64) -> Self {
        self.time_step_s = time_step_s;
        self
    }

    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if !self.angle_deg.is_finite() {
            return Err(TrajectoryError::InvalidParameter {
                name: "angle",
                value: self.angle_deg,
                reason: "must be a finite number",
            });
        }
        require_positive("muzzle velocity", self.muzzle_velocity_mps)?;
        require_positive("gravity", self.gravity_mps2)?;
        require_positive("time step", self.time_step_s)?;
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), TrajectoryError> {
    if !value.is_finite() {
        return Err(TrajectoryError::InvalidParameter {
            name,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(TrajectoryError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

/// A single point of the sampled arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub t_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Index-aligned time, distance and height series for one launch.
///
/// Sample `i` is `(times()[i], x_positions()[i], y_positions()[i])`. The
/// series are fixed once sampled; an empty result means the launch never
/// left the ground (no upward velocity).
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryResult {
    times: Vec<f64>,
    x_positions: Vec<f64>,
    y_positions: Vec<f64>,
    flight_time_s: f64,
}

impl TrajectoryResult {
    fn empty(flight_time_s: f64) -> Self {
        Self {
            times: Vec::new(),
            x_positions: Vec::new(),
            y_positions: Vec::new(),
            flight_time_s,
        }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn x_positions(&self) -> &[f64] {
        &self.x_positions
    }

    pub fn y_positions(&self) -> &[f64] {
        &self.y_positions
    }

    /// Analytic time of flight `2 * vy / g`. Non-positive for degenerate launches.
    pub fn flight_time(&self) -> f64 {
        self.flight_time_s
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn sample(&self, index: usize) -> Option<TrajectorySample> {
        Some(TrajectorySample {
            t_s: *self.times.get(index)?,
            x_m: self.x_positions[index],
            y_m: self.y_positions[index],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = TrajectorySample> + '_ {
        self.times
            .iter()
            .zip(&self.x_positions)
            .zip(&self.y_positions)
            .map(|((&t_s, &x_m), &y_m)| TrajectorySample { t_s, x_m, y_m })
    }

    /// `(x, y)` pairs in sample order, as handed to a line plot.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x_positions
            .iter()
            .copied()
            .zip(self.y_positions.iter().copied())
            .collect()
    }

    pub fn max_height(&self) -> f64 {
        self.y_positions.iter().fold(0.0f64, |acc, &y| acc.max(y))
    }

    /// Sample with the greatest height, if any.
    pub fn apex(&self) -> Option<TrajectorySample> {
        let (index, _) = self
            .y_positions
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))?;
        self.sample(index)
    }
}

/// Closed-form quantities of a drag-free launch back to launch height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSummary {
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub flight_time_s: f64,
    pub apex_time_s: f64,
    pub apex_height_m: f64,
    pub range_m: f64,
}

impl FlightSummary {
    pub fn is_degenerate(&self) -> bool {
        self.flight_time_s <= 0.0
    }
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.muzzle_velocity_mps * theta.cos();
    let vy = params.muzzle_velocity_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(params: LaunchParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

// sin(180 deg) evaluates to ~1.2e-16 rather than zero, so a vertical component
// that small relative to the muzzle velocity counts as no upward motion.
fn launches_upward(params: LaunchParameters, vy: f64) -> bool {
    vy > params.muzzle_velocity_mps * f64::EPSILON
}

pub fn flight_summary(params: LaunchParameters) -> Result<FlightSummary, TrajectoryError> {
    params.validate()?;

    let (vx, vy) = velocity_components(params);
    let g = params.gravity_mps2;
    if !launches_upward(params, vy) {
        return Ok(FlightSummary {
            vx_mps: vx,
            vy_mps: vy,
            flight_time_s: 0.0,
            apex_time_s: 0.0,
            apex_height_m: 0.0,
            range_m: 0.0,
        });
    }

    let flight_time_s = 2.0 * vy / g;
    Ok(FlightSummary {
        vx_mps: vx,
        vy_mps: vy,
        flight_time_s,
        apex_time_s: flight_time_s / 2.0,
        apex_height_m: (vy * vy) / (2.0 * g),
        range_m: vx * flight_time_s,
    })
}

/// Samples the drag-free arc at `t = 0, dt, 2dt, ...` while `t < T`.
///
/// `T = 2 * vy / g` is never sampled itself, so the last point sits up to one
/// time step short of landing. Launches without upward velocity return an
/// empty result rather than an error.
pub fn sample_trajectory(params: LaunchParameters) -> Result<TrajectoryResult, TrajectoryError> {
    params.validate()?;

    let (vx, vy) = velocity_components(params);
    let g = params.gravity_mps2;
    let dt = params.time_step_s;
    let flight_time_s = 2.0 * vy / g;

    if !launches_upward(params, vy) {
        debug!(
            angle_deg = params.angle_deg,
            flight_time_s, "no upward velocity, trajectory is empty"
        );
        return Ok(TrajectoryResult::empty(flight_time_s.min(0.0)));
    }

    let requested = (flight_time_s / dt).ceil();
    if requested > MAX_SAMPLES as f64 {
        return Err(TrajectoryError::TooManySamples {
            requested,
            limit: MAX_SAMPLES,
        });
    }

    let capacity = requested as usize;
    let mut times = Vec::with_capacity(capacity);
    let mut x_positions = Vec::with_capacity(capacity);
    let mut y_positions = Vec::with_capacity(capacity);

    for i in 0..capacity {
        let t = i as f64 * dt;
        if t >= flight_time_s {
            break;
        }
        times.push(t);
        x_positions.push(vx * t);
        y_positions.push((vy * t) - (0.5 * g * t * t));
    }

    debug!(
        angle_deg = params.angle_deg,
        flight_time_s,
        samples = times.len(),
        "sampled trajectory"
    );

    Ok(TrajectoryResult {
        times,
        x_positions,
        y_positions,
        flight_time_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn defaults_match_handgun_round() {
        let params = LaunchParameters::default();
        assert_eq!(params.angle_deg, 45.0);
        assert_eq!(params.muzzle_velocity_mps, 380.0);
        assert_eq!(params.gravity_mps2, 9.81);
        assert_eq!(params.time_step_s, 0.01);
    }

    #[test]
    fn default_shot_flies_for_about_55_seconds() {
        let result = sample_trajectory(LaunchParameters::default()).expect("valid launch");

        assert_close(result.flight_time(), 54.7810, 0.001);
        assert_eq!(result.len(), 5479);
        assert_eq!(result.times()[0], 0.0);
        assert_eq!(result.y_positions()[0], 0.0);
        assert!(*result.times().last().unwrap() < result.flight_time());
    }

    #[test]
    fn sample_times_are_multiples_of_the_step() {
        let params = LaunchParameters::new(30.0).with_time_step(0.25);
        let result = sample_trajectory(params).expect("valid launch");

        for (i, t) in result.times().iter().enumerate() {
            assert_eq!(*t, i as f64 * 0.25);
        }
    }

    #[test]
    fn positions_follow_closed_form() {
        let params = LaunchParameters::new(60.0)
            .with_muzzle_velocity(50.0)
            .with_gravity(3.7)
            .with_time_step(0.1);
        let result = sample_trajectory(params).expect("valid launch");

        for sample in result.samples() {
            let (x, y) = position_at_time(params, sample.t_s);
            assert_eq!(sample.x_m, x);
            assert_eq!(sample.y_m, y);
        }
    }

    #[test]
    fn heights_stay_above_launch_level() {
        let result = sample_trajectory(LaunchParameters::new(12.5)).expect("valid launch");
        assert!(result.y_positions().iter().all(|y| *y >= 0.0));
    }

    #[test]
    fn flat_and_backward_launches_are_empty() {
        for angle in [0.0, 180.0, 200.0, -30.0, 360.0] {
            let result = sample_trajectory(LaunchParameters::new(angle)).expect("valid launch");
            assert!(result.is_empty(), "angle {angle} should not fly");
            assert!(result.flight_time() <= 0.0);
            assert!(result.apex().is_none());
        }
    }

    #[test]
    fn vertical_shot_has_no_horizontal_travel() {
        let result = sample_trajectory(LaunchParameters::new(90.0)).expect("valid launch");
        assert!(!result.is_empty());
        assert!(result.x_positions().iter().all(|x| x.abs() < 1e-9));
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let err = sample_trajectory(LaunchParameters::new(45.0).with_muzzle_velocity(0.0))
            .expect_err("zero velocity should fail");
        assert!(err.to_string().contains("muzzle velocity"));

        let err = sample_trajectory(LaunchParameters::new(45.0).with_gravity(-9.81))
            .expect_err("negative gravity should fail");
        assert!(matches!(
            err,
            TrajectoryError::InvalidParameter {
                name: "gravity",
                ..
            }
        ));

        let err = sample_trajectory(LaunchParameters::new(45.0).with_time_step(0.0))
            .expect_err("zero step should fail");
        assert!(err.to_string().contains("time step"));
    }

    #[test]
    fn invalid_parameter_message_separates_value_and_reason() {
        let err = sample_trajectory(LaunchParameters::new(45.0).with_gravity(0.0))
            .expect_err("zero gravity should fail");
        assert_eq!(err.to_string(), "Invalid gravity (0): must be greater than zero.");
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(sample_trajectory(LaunchParameters::new(f64::NAN)).is_err());
        assert!(
            sample_trajectory(LaunchParameters::new(45.0).with_time_step(f64::INFINITY)).is_err()
        );
    }

    #[test]
    fn refuses_absurd_sample_counts() {
        let err = sample_trajectory(LaunchParameters::new(45.0).with_time_step(1e-9))
            .expect_err("too many samples");
        assert!(matches!(err, TrajectoryError::TooManySamples { .. }));
    }

    #[test]
    fn summary_matches_textbook_values() {
        let summary = flight_summary(LaunchParameters::default()).expect("valid launch");

        assert_close(summary.flight_time_s, 54.7810, 0.001);
        assert_close(summary.apex_time_s, 27.3905, 0.001);
        assert_close(summary.apex_height_m, 3679.918, 0.01);
        assert_close(summary.range_m, 14719.673, 0.01);
        assert!(!summary.is_degenerate());
    }

    #[test]
    fn summary_of_flat_launch_is_degenerate() {
        let summary = flight_summary(LaunchParameters::new(0.0)).expect("valid launch");
        assert!(summary.is_degenerate());
        assert_eq!(summary.range_m, 0.0);
    }

    #[test]
    fn sampled_apex_is_near_half_flight_time() {
        let params = LaunchParameters::default();
        let result = sample_trajectory(params).expect("valid launch");
        let summary = flight_summary(params).expect("valid launch");
        let apex = result.apex().expect("non-empty");

        assert_close(apex.t_s, summary.apex_time_s, params.time_step_s);
        assert_close(apex.y_m, summary.apex_height_m, 0.01);
    }
}
