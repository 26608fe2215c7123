//! Retarded-time solver.
//!
//! Finds when, and where, a source moving along a piecewise-linear
//! trajectory emitted the sound that reaches a receiver at a given time.
//!
//! On a segment starting at `t0` in `p0` with constant velocity `v`, the
//! emission time `t_e = t0 + s` satisfies
//!
//! ```text
//! |p_r - (p0 + v s)| = c (t_r - t0 - s)
//! ```
//!
//! Squaring gives `A s² + B s + C = 0` with
//!
//! ```text
//! A = v·v - c²
//! B = 2 (c² τ - d0·v)
//! C = d0·d0 - (c τ)²
//! ```
//!
//! where `d0 = p_r - p0` and `τ = t_r - t0`.

use nalgebra::Vector3;
#[allow(unused_imports)]
use num_traits::float::Float;

use crate::error::{Error, Result};
use crate::trajectory::Trajectory;

/// Tolerance below which `A`, `B`, `C` and the discriminant count as zero.
pub const EMISSION_EPSILON: f64 = 1.0e-12;

/// Emission event of the sound received at a given time and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    /// Emission time in s.
    pub time: f64,

    /// Source position at emission time.
    pub position: Vector3<f64>,
}

/// Solves for the emission of the sound reaching `receiver` at `time_receiver`.
///
/// Segments are scanned in time order and the first one holding a causal
/// root wins. Returns `Ok(None)` when no segment does. If none does but a
/// segment was degenerate (the source rests on the sound-speed sphere
/// through the receiver event for all times), `Error::DegenerateEmission` is
/// returned so the caller can decide how to recover.
pub fn emission_time(
    receiver: &Vector3<f64>,
    time_receiver: f64,
    trajectory: &Trajectory,
    sound_speed: f64,
) -> Result<Option<Emission>> {
    let c2 = sound_speed * sound_speed;
    let mut degenerate = false;

    for (a, b) in trajectory.segments() {
        let t0 = a.time;
        let t1 = b.time;

        if t0 > time_receiver {
            break;
        }

        let velocity = (b.position - a.position) / (t1 - t0);
        let d0 = receiver - a.position;
        let tau = time_receiver - t0;

        let qa = velocity.dot(&velocity) - c2;
        let qb = 2.0 * (c2 * tau - d0.dot(&velocity));
        let qc = d0.dot(&d0) - c2 * tau * tau;

        let root = match solve_quadratic(qa, qb, qc) {
            Roots::Some(s) => s,
            Roots::None => continue,
            Roots::Infinite => {
                degenerate = true;
                continue;
            }
        };

        let time = t0 + root;

        if t0 <= time && time < t1 && time <= time_receiver {
            return Ok(Some(Emission {
                time,
                position: a.position + velocity * root,
            }));
        }
    }

    if degenerate {
        Err(Error::DegenerateEmission {
            time: time_receiver,
        })
    } else {
        Ok(None)
    }
}

/// Candidate root of a segment equation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Roots {
    None,
    Some(f64),
    Infinite,
}

/// Smallest real root of `a s² + b s + c`, falling back to the linear case.
#[inline]
fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    if a.abs() < EMISSION_EPSILON {
        if b.abs() < EMISSION_EPSILON {
            if c.abs() < EMISSION_EPSILON {
                Roots::Infinite
            } else {
                Roots::None
            }
        } else {
            Roots::Some(-c / b)
        }
    } else {
        let delta = b * b - 4.0 * a * c;

        if delta.abs() < EMISSION_EPSILON {
            Roots::Some(-b / (2.0 * a))
        } else if delta < 0.0 {
            Roots::None
        } else {
            let sqrt_delta = delta.sqrt();
            let r0 = (-b - sqrt_delta) / (2.0 * a);
            let r1 = (-b + sqrt_delta) / (2.0 * a);
            Roots::Some(r0.min(r1))
        }
    }
}

/// Amplitude decay of a point source (spherical spreading).
///
/// Callers must keep `distance` away from zero.
#[inline]
pub fn geometric_attenuation(distance: f64) -> f64 {
    1.0 / distance
}
