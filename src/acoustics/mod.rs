//! Free-field acoustics helpers.
//!
//! Closed-form relations for inspecting rendered signals. The engine itself
//! never calls them; Doppler shift and delay emerge from the retarded-time
//! solver.

pub mod doppler;

/// Wavelength in m of a tone of `frequency` Hz travelling at `sound_speed` m/s.
#[inline]
pub fn wavelength(frequency: f64, sound_speed: f64) -> f64 {
    sound_speed / frequency
}

/// Angular frequency in rad/s.
#[inline]
pub fn angular_frequency(frequency: f64) -> f64 {
    core::f64::consts::TAU * frequency
}
