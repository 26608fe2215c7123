//! Uniform white noise of finite duration.

use alloc::vec::Vec;

use super::{SampleBuffer, Source};
use crate::utils::random::Random;

#[derive(Debug, Clone)]
pub struct WhiteNoise {
    buffer: SampleBuffer,
}

impl WhiteNoise {
    /// Draws `duration * sample_rate` samples in `[-amplitude, amplitude)` from `seed`.
    pub fn new(duration: f64, sample_rate: f64, amplitude: f64, seed: u32) -> Self {
        let mut random = Random::new(seed);
        let length = (duration * sample_rate) as usize;
        let samples: Vec<f64> = (0..length)
            .map(|_| amplitude * random.get_uniform(-1.0, 1.0))
            .collect();

        Self {
            buffer: SampleBuffer::new(samples, sample_rate, false),
        }
    }

    pub fn samples(&self) -> &[f64] {
        self.buffer.samples()
    }

    pub fn sample_rate(&self) -> f64 {
        self.buffer.sample_rate()
    }
}

impl Source for WhiteNoise {
    #[inline]
    fn get_sample(&self, time: f64) -> f64 {
        self.buffer.get_sample(time)
    }
}
