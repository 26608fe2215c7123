//! Pre-decoded mono signal.

use alloc::vec::Vec;

use super::Source;
use crate::utils::{db_to_gain, interpolate, interpolate_wrap};

#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: f64,
    looping: bool,
}

impl SampleBuffer {
    /// Wraps `samples` recorded at `sample_rate` Hz. Looping sources repeat forever.
    pub fn new(samples: Vec<f64>, sample_rate: f64, looping: bool) -> Self {
        Self {
            samples,
            sample_rate,
            looping,
        }
    }

    /// Applies a gain in dB to the stored samples.
    pub fn with_gain_db(mut self, gain_db: f64) -> Self {
        if gain_db != 0.0 {
            let gain = db_to_gain(gain_db);
            for sample in self.samples.iter_mut() {
                *sample *= gain;
            }
        }
        self
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Length of one pass through the buffer in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }
}

impl Source for SampleBuffer {
    #[inline]
    fn get_sample(&self, time: f64) -> f64 {
        let index = time * self.sample_rate;

        if self.looping {
            interpolate_wrap(&self.samples, index)
        } else {
            interpolate(&self.samples, index)
        }
    }
}
