//! Sound sources.
//!
//! A source only answers one question: what is the emitted signal amplitude
//! at a given time. Sampled sources interpolate linearly between samples.

pub mod sample_buffer;
pub mod sine_wave;
pub mod white_noise;

use core::fmt::Debug;

use dyn_clone::DynClone;

pub use sample_buffer::SampleBuffer;
pub use sine_wave::SineWave;
pub use white_noise::WhiteNoise;

pub trait Source: DynClone + Debug + Send + Sync {
    /// Signal amplitude emitted at `time` seconds. Defined for `time >= 0.0`.
    fn get_sample(&self, time: f64) -> f64;
}

dyn_clone::clone_trait_object!(Source);
