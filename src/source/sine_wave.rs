//! Analytic sine tone.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::Source;

#[derive(Debug, Clone, Copy)]
pub struct SineWave {
    /// Frequency in Hz.
    pub frequency: f64,

    /// Peak amplitude.
    pub amplitude: f64,
}

impl SineWave {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

impl Source for SineWave {
    #[inline]
    fn get_sample(&self, time: f64) -> f64 {
        self.amplitude * (core::f64::consts::TAU * self.frequency * time).sin()
    }
}
