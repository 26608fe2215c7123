//! Keyframed trajectories of sources and microphone arrays.
//!
//! A trajectory is an ordered list of waypoints. Between two waypoints the
//! position moves linearly and the orientation follows the shortest arc
//! (SLERP). Queries outside `[t_first, t_last)` yield `None`; there is no
//! extrapolation.

pub mod spline;

use alloc::format;
use alloc::vec::Vec;

use nalgebra::{UnitQuaternion, Vector3};

use crate::error::{Error, Result};
use crate::utils::linspace;
use crate::utils::rotation::{from_xyzw, slerp, to_xyzw};

use spline::CubicSpline;

/// Number of values in a trajectory row: `t, x, y, z, qx, qy, qz, qw`.
pub const ROW_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Time in seconds.
    pub time: f64,

    /// Position in world coordinates (m).
    pub position: Vector3<f64>,

    /// Orientation of the moving frame relative to the world frame.
    pub orientation: UnitQuaternion<f64>,
}

impl Waypoint {
    pub fn new(time: f64, position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            time,
            position,
            orientation,
        }
    }

    /// Waypoint with identity orientation.
    pub fn at(time: f64, position: [f64; 3]) -> Self {
        Self::new(time, Vector3::from(position), UnitQuaternion::identity())
    }

    /// Parses a `[t, x, y, z, qx, qy, qz, qw]` row.
    pub fn from_row(row: &[f64; ROW_LENGTH]) -> Result<Self> {
        let orientation = from_xyzw([row[4], row[5], row[6], row[7]]).ok_or_else(|| {
            Error::InvalidTrajectory(format!("zero or non-finite quaternion at t = {}", row[0]))
        })?;

        Ok(Self::new(
            row[0],
            Vector3::new(row[1], row[2], row[3]),
            orientation,
        ))
    }

    pub fn to_row(&self) -> [f64; ROW_LENGTH] {
        let [qx, qy, qz, qw] = to_xyzw(&self.orientation);
        [
            self.time,
            self.position.x,
            self.position.y,
            self.position.z,
            qx,
            qy,
            qz,
            qw,
        ]
    }
}

/// Position and orientation of a moving frame at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// World coordinates of a point given in the moving frame.
    #[inline]
    pub fn transform_point(&self, offset: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.orientation.transform_vector(offset)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    waypoints: Vec<Waypoint>,
}

impl Trajectory {
    /// Validates and takes ownership of the waypoints.
    ///
    /// At least two waypoints with finite, strictly increasing times and
    /// finite positions are required. Orientations are renormalized.
    pub fn new(mut waypoints: Vec<Waypoint>) -> Result<Self> {
        validate(&waypoints)?;

        for waypoint in waypoints.iter_mut() {
            waypoint.orientation = UnitQuaternion::new_normalize(waypoint.orientation.into_inner());
        }

        Ok(Self { waypoints })
    }

    /// Builds a trajectory from `[t, x, y, z, qx, qy, qz, qw]` rows.
    pub fn from_rows(rows: &[[f64; ROW_LENGTH]]) -> Result<Self> {
        let waypoints = rows
            .iter()
            .map(Waypoint::from_row)
            .collect::<Result<Vec<_>>>()?;

        Self::new(waypoints)
    }

    pub fn to_rows(&self) -> Vec<[f64; ROW_LENGTH]> {
        self.waypoints.iter().map(Waypoint::to_row).collect()
    }

    /// Fixed position with identity orientation from `start` to `end`.
    pub fn stationary(position: [f64; 3], start: f64, end: f64) -> Result<Self> {
        Self::new(alloc::vec![Waypoint::at(start, position), Waypoint::at(end, position)])
    }

    /// Constant velocity from `from` at `start` to `to` at `end`.
    pub fn linear(from: [f64; 3], to: [f64; 3], start: f64, end: f64) -> Result<Self> {
        Self::new(alloc::vec![Waypoint::at(start, from), Waypoint::at(end, to)])
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn start_time(&self) -> f64 {
        self.waypoints[0].time
    }

    pub fn end_time(&self) -> f64 {
        self.waypoints[self.waypoints.len() - 1].time
    }

    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Consecutive waypoint pairs in time order.
    pub fn segments(&self) -> impl Iterator<Item = (&Waypoint, &Waypoint)> {
        self.waypoints.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Index of the segment `[t0, t1)` containing `time`.
    #[inline]
    pub fn segment_index(&self, time: f64) -> Option<usize> {
        let upper = self.waypoints.partition_point(|waypoint| waypoint.time <= time);

        if upper == 0 || upper == self.waypoints.len() {
            None
        } else {
            Some(upper - 1)
        }
    }

    /// Interpolated pose at `time`, `None` outside `[start_time, end_time)`.
    pub fn get_position(&self, time: f64) -> Option<Pose> {
        let index = self.segment_index(time)?;
        let a = &self.waypoints[index];
        let b = &self.waypoints[index + 1];
        let alpha = (time - a.time) / (b.time - a.time);

        Some(Pose {
            position: a.position.lerp(&b.position, alpha),
            orientation: slerp(&a.orientation, &b.orientation, alpha),
        })
    }

    /// Resamples onto `num_points` uniformly spaced times, replacing the waypoints.
    ///
    /// Positions follow a natural cubic spline through the current waypoints,
    /// orientations are interpolated with SLERP.
    pub fn interpolate(&mut self, num_points: usize) -> Result<()> {
        if num_points < 2 {
            return Err(Error::InvalidTrajectory(format!(
                "cannot resample onto {num_points} points"
            )));
        }

        let knots: Vec<f64> = self.waypoints.iter().map(|w| w.time).collect();
        let axes: [Vec<f64>; 3] = core::array::from_fn(|axis| {
            self.waypoints.iter().map(|w| w.position[axis]).collect()
        });
        let splines: [CubicSpline; 3] =
            core::array::from_fn(|axis| CubicSpline::new(&knots, &axes[axis]));

        let times = linspace(self.start_time(), self.end_time(), num_points);
        let last_orientation = self.waypoints[self.waypoints.len() - 1].orientation;

        let waypoints: Vec<Waypoint> = times
            .iter()
            .map(|&time| {
                let position = Vector3::new(
                    splines[0].evaluate(time),
                    splines[1].evaluate(time),
                    splines[2].evaluate(time),
                );
                let orientation = self
                    .get_position(time)
                    .map_or(last_orientation, |pose| pose.orientation);

                Waypoint::new(time, position, orientation)
            })
            .collect();

        validate(&waypoints)?;
        self.waypoints = waypoints;

        Ok(())
    }
}

fn validate(waypoints: &[Waypoint]) -> Result<()> {
    if waypoints.len() < 2 {
        return Err(Error::InvalidTrajectory(format!(
            "{} waypoint(s), at least 2 required",
            waypoints.len()
        )));
    }

    for waypoint in waypoints {
        if !waypoint.time.is_finite() || !waypoint.position.iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidTrajectory(format!(
                "non-finite waypoint at t = {}",
                waypoint.time
            )));
        }
    }

    for pair in waypoints.windows(2) {
        if pair[1].time <= pair[0].time {
            return Err(Error::InvalidTrajectory(format!(
                "time {} does not follow {}",
                pair[1].time, pair[0].time
            )));
        }
    }

    Ok(())
}
