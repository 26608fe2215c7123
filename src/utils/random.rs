//! Seedable linear congruential generator.
//!
//! Noise sources and jittered array geometries draw from their own generator
//! so that a run is reproducible for a given seed.

#[derive(Debug, Clone)]
pub struct Random {
    state: u32,
}

impl Default for Random {
    fn default() -> Self {
        Self::new(0x21)
    }
}

impl Random {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0.0, 1.0)`.
    #[inline]
    pub fn get_float(&mut self) -> f64 {
        self.get_word() as f64 / 4294967296.0
    }

    /// Uniform value in `[low, high)`.
    #[inline]
    pub fn get_uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.get_float()
    }
}
