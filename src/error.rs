//! Error type shared by all modules.

use alloc::string::String;

use thiserror::Error;

/// Result type for simulation operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while configuring or running a simulation.
///
/// Configuration problems are reported before the sample loop starts.
/// [`Error::DegenerateEmission`] is the only kind produced inside the loop;
/// the engine recovers from it locally.
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than two waypoints, non-increasing or non-finite times, or a zero quaternion.
    #[error("invalid trajectory: {0}")]
    InvalidTrajectory(String),

    /// Source stationary on the sound-speed sphere through the receiver event.
    #[error("degenerate emission for receiver time {time} s: infinitely many solutions")]
    DegenerateEmission { time: f64 },

    /// Non-positive absolute temperature or pressure, or negative humidity.
    #[error("invalid atmosphere: {0}")]
    InvalidAtmosphere(String),

    /// Empty channel list, zero sample rate or unsupported sample width.
    #[error("invalid microphone array: {0}")]
    InvalidMicrophoneArray(String),

    /// Normal matrix of the absorption filter basis cannot be inverted.
    #[error("absorption filter basis is singular for {bands} bands at {sample_rate} Hz")]
    SingularBasis { bands: usize, sample_rate: f64 },

    /// `run` was called without any registered microphone.
    #[error("no microphone registered")]
    NoMicrophones,

    /// Operation not allowed in the current engine state.
    #[error("simulation is {0}")]
    InvalidState(&'static str),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "std")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}
