//! Utility functions.
//!
//! Small numerical helpers shared by the trajectory, source and simulation
//! modules.

pub mod delay_line;
pub mod random;
pub mod rotation;

use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Linear read at a fractional `index`. Returns `0.0` once `index` reaches the last sample.
#[inline]
pub fn interpolate(table: &[f64], index: f64) -> f64 {
    if table.len() < 2 || index < 0.0 {
        return 0.0;
    }

    let index_integral = index as usize;

    if index_integral >= table.len() - 1 {
        return 0.0;
    }

    let index_fractional = index - (index_integral as f64);
    let a = table[index_integral];
    let b = table[index_integral + 1];

    crossfade(a, b, index_fractional)
}

/// Linear read at a fractional `index`, wrapping around the end of the table.
#[inline]
pub fn interpolate_wrap(table: &[f64], index: f64) -> f64 {
    if table.is_empty() || index < 0.0 {
        return 0.0;
    }

    let index_integral = index as usize;
    let index_fractional = index - (index_integral as f64);
    let a = table[index_integral % table.len()];
    let b = table[(index_integral + 1) % table.len()];

    crossfade(a, b, index_fractional)
}

#[inline]
pub fn crossfade(a: f64, b: f64, fade: f64) -> f64 {
    a + (b - a) * fade
}

/// `num` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => alloc::vec![start],
        _ => {
            let step = (end - start) / ((num - 1) as f64);
            (0..num)
                .map(|n| if n == num - 1 { end } else { start + step * (n as f64) })
                .collect()
        }
    }
}

/// Converts decibels to a linear amplitude ratio.
#[inline]
pub fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Scales a normalized sample to a signed integer of `bits` width (1 to 32), saturating.
#[inline]
pub fn to_pcm(sample: f64, bits: u16) -> i32 {
    let bits = bits.clamp(1, 32);
    let full_scale = ((1i64 << (bits - 1)) - 1) as f64;
    let scaled = (sample * full_scale).clamp(-full_scale - 1.0, full_scale);

    scaled as i32
}
