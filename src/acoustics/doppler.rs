//! Doppler shift of a source and receiver moving on a common line.
//!
//! Velocities are radial components in m/s. A source velocity is positive
//! when the source moves away from the receiver. A receiver velocity is
//! positive when the receiver moves towards the source.

/// Frequency heard by the receiver for a tone emitted at `frequency` Hz.
#[inline]
pub fn frequency(
    frequency: f64,
    velocity_source: f64,
    velocity_receiver: f64,
    sound_speed: f64,
) -> f64 {
    (sound_speed + velocity_receiver) / (sound_speed + velocity_source) * frequency
}

/// Speed of a source passing a receiver at rest, from the frequency `f1`
/// heard while it recedes and `f2` heard while it approaches.
#[inline]
pub fn velocity(f1: f64, f2: f64, sound_speed: f64) -> f64 {
    sound_speed * (f2 - f1) / (f2 + f1)
}
