//! Delay line.
//!
//! Fixed-capacity ring buffer holding the most recent samples of one
//! propagation path, newest first, so it can be convolved with a FIR filter
//! of the same length.

use num_traits::Float;

#[derive(Debug, Clone)]
pub struct DelayLine<T, const LENGTH: usize> {
    write_ptr: usize,
    line: [T; LENGTH],
}

impl<T, const LENGTH: usize> Default for DelayLine<T, LENGTH>
where
    T: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const LENGTH: usize> DelayLine<T, LENGTH>
where
    T: Float,
{
    pub fn new() -> Self {
        Self {
            write_ptr: 0,
            line: [T::zero(); LENGTH],
        }
    }

    /// Clears the history.
    pub fn reset(&mut self) {
        self.line = [T::zero(); LENGTH];
        self.write_ptr = 0;
    }

    pub fn capacity(&self) -> usize {
        LENGTH
    }

    #[inline]
    pub fn write(&mut self, sample: T) {
        self.line[self.write_ptr] = sample;
        self.write_ptr = (self.write_ptr + LENGTH - 1) % LENGTH;
    }

    /// Returns the sample written `delay` writes ago, `0` being the newest one.
    #[inline]
    pub fn read_with_delay(&self, delay: usize) -> T {
        self.line[(self.write_ptr + 1 + delay) % LENGTH]
    }

    /// Dot product of the line contents (newest first) with `taps`.
    #[inline]
    pub fn convolve(&self, taps: &[T; LENGTH]) -> T {
        taps.iter()
            .enumerate()
            .fold(T::zero(), |acc, (delay, &tap)| {
                acc + tap * self.read_with_delay(delay)
            })
    }
}
