#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod absorption;
pub mod acoustics;
pub mod air;
pub mod emission;
pub mod error;
pub mod microphone;
pub mod simulation;
pub mod source;
pub mod trajectory;
pub mod utils;

pub use air::Air;
pub use emission::{emission_time, geometric_attenuation, Emission};
pub use error::{Error, Result};
pub use microphone::{Channel, MicrophoneArray};
pub use simulation::{Recording, Simulation, SimulationConfig, SimulationState};
pub use source::Source;
pub use trajectory::{Pose, Trajectory, Waypoint};
