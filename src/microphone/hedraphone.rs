//! Hedraphone: a faceted housing carrying one top board and a ring of tilted
//! side boards, each board holding a center capsule surrounded by a ring of
//! capsules.
//!
//! Side boards are the top board pattern turned 180° about z, pushed out by
//! `spacing` along x, tilted by `sideboard_angle` about y, pushed out again
//! and finally rotated about z to their slot.

use alloc::string::String;
use alloc::vec::Vec;

use nalgebra::Vector3;
#[allow(unused_imports)]
use num_traits::float::Float;

use super::{Channel, MicrophoneArray};
use crate::error::Result;
use crate::utils::random::Random;
use crate::utils::rotation::from_euler_zyx_degrees;

/// Random mounting tolerances applied to each board before assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    /// Maximum rotation about each axis in degrees.
    pub angle: f64,

    /// Maximum displacement along each axis in m.
    pub position: f64,

    /// Seed of the generator drawing the tolerances.
    pub seed: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hedraphone {
    /// Number of side boards, also the number of ring capsules per board.
    pub num_external_mics: usize,

    /// Radius of the capsule ring on each board in m.
    pub radius_mics: f64,

    /// Tilt of the side boards in degrees.
    pub sideboard_angle: f64,

    /// Distance from the housing axis to the side board hinge in m.
    pub spacing: f64,

    pub jitter: Option<Jitter>,
}

impl Default for Hedraphone {
    fn default() -> Self {
        Self {
            num_external_mics: 6,
            radius_mics: 0.012,
            sideboard_angle: 30.0,
            spacing: 0.0,
            jitter: None,
        }
    }
}

impl Hedraphone {
    /// Pentagonal housing, 12 mm capsule ring.
    pub fn v1() -> Self {
        Self {
            num_external_mics: 5,
            radius_mics: 0.012,
            sideboard_angle: 63.43,
            spacing: 0.022,
            jitter: None,
        }
    }

    /// Pentagonal housing, 14 mm capsule ring.
    pub fn v2() -> Self {
        Self {
            radius_mics: 0.014,
            ..Self::v1()
        }
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = Some(jitter);
        self
    }

    /// Number of capsules: `(n + 1)` boards of `(n + 1)` capsules.
    pub fn channel_count(&self) -> usize {
        (self.num_external_mics + 1) * (self.num_external_mics + 1)
    }

    /// Capsule offsets in the housing frame, top board first.
    pub fn offsets(&self) -> Vec<Vector3<f64>> {
        let n = self.num_external_mics;
        let mut random = self.jitter.map(|jitter| Random::new(jitter.seed));
        let mut offsets = Vec::with_capacity(self.channel_count());

        offsets.extend(self.board(random.as_mut()));

        let flip = from_euler_zyx_degrees(180.0, 0.0, 0.0);
        let tilt = from_euler_zyx_degrees(0.0, self.sideboard_angle, 0.0);
        let shift = Vector3::new(self.spacing, 0.0, 0.0);

        for i in 0..n {
            let slot = from_euler_zyx_degrees((i as f64) * 360.0 / (n as f64), 0.0, 0.0);

            offsets.extend(
                self.board(random.as_mut())
                    .into_iter()
                    .map(|mic| slot * (tilt * (flip * mic + shift) + shift)),
            );
        }

        offsets
    }

    pub fn build(
        &self,
        sample_rate: u32,
        sample_width: u16,
        output: impl Into<String>,
    ) -> Result<MicrophoneArray> {
        let channels = self
            .offsets()
            .into_iter()
            .map(|offset| Channel::new(offset, nalgebra::UnitQuaternion::identity()))
            .collect();

        MicrophoneArray::new(channels, sample_rate, sample_width, output)
    }

    /// Center capsule plus ring, with the board tolerances applied.
    fn board(&self, random: Option<&mut Random>) -> Vec<Vector3<f64>> {
        let n = self.num_external_mics;
        let mut mics = Vec::with_capacity(n + 1);
        mics.push(Vector3::zeros());

        for i in 0..n {
            let angle = (core::f64::consts::TAU * (i as f64) - core::f64::consts::PI) / (n as f64);
            mics.push(Vector3::new(
                self.radius_mics * angle.cos(),
                self.radius_mics * angle.sin(),
                0.0,
            ));
        }

        if let (Some(random), Some(jitter)) = (random, self.jitter) {
            let angle_x = random.get_uniform(-jitter.angle, jitter.angle);
            let angle_y = random.get_uniform(-jitter.angle, jitter.angle);
            let angle_z = random.get_uniform(-jitter.angle, jitter.angle);
            let rotation = from_euler_zyx_degrees(angle_z, angle_y, angle_x);

            let displacement = Vector3::new(
                random.get_uniform(-jitter.position, jitter.position),
                random.get_uniform(-jitter.position, jitter.position),
                random.get_uniform(-jitter.position, jitter.position),
            );

            for mic in mics.iter_mut() {
                *mic = rotation * *mic + displacement;
            }
        }

        mics
    }
}
