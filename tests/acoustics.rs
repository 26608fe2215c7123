//! Tests for the acoustics helpers

use dynamic_sound::acoustics::{angular_frequency, doppler, wavelength};
use dynamic_sound::air::SOUND_SPEED;

#[test]
fn doppler_shift() {
    let approaching = doppler::frequency(200.0, -50.0, 0.0, SOUND_SPEED);
    let receding = doppler::frequency(200.0, 50.0, 0.0, SOUND_SPEED);

    assert!((approaching - 234.1).abs() < 0.05);
    assert!((receding - 174.57).abs() < 0.05);
    assert_eq!(doppler::frequency(200.0, 0.0, 0.0, SOUND_SPEED), 200.0);

    // Source and receiver travelling together.
    assert_eq!(doppler::frequency(200.0, 10.0, 10.0, SOUND_SPEED), 200.0);
    assert!(doppler::frequency(200.0, 0.0, 20.0, SOUND_SPEED) > 200.0);
}

#[test]
fn doppler_velocity() {
    let approaching = doppler::frequency(440.0, -30.0, 0.0, SOUND_SPEED);
    let receding = doppler::frequency(440.0, 30.0, 0.0, SOUND_SPEED);

    assert!((doppler::velocity(receding, approaching, SOUND_SPEED) - 30.0).abs() < 1.0e-9);
    assert_eq!(doppler::velocity(440.0, 440.0, SOUND_SPEED), 0.0);
}

#[test]
fn wave_quantities() {
    assert!((wavelength(343.2, SOUND_SPEED) - 1.0).abs() < 1.0e-15);
    assert!((angular_frequency(1.0) - std::f64::consts::TAU).abs() < 1.0e-15);
}
