//! Tests for the atmosphere model

use dynamic_sound::air::{iso9613, Air, SOUND_SPEED};
use dynamic_sound::Error;

fn assert_relative(actual: f64, expected: f64, tolerance: f64) {
    let error = ((actual - expected) / expected).abs();
    assert!(
        error < tolerance,
        "{actual} differs from {expected} by {:.3} %",
        error * 100.0
    );
}

#[test]
fn sound_speed_at_reference_temperature() {
    let air = Air::default();

    assert!((air.sound_speed() - SOUND_SPEED).abs() < 1.0e-9);
}

#[test]
fn sound_speed_rises_with_temperature() {
    let cold = Air::new(-10.0, 1.0, 50.0).unwrap();
    let warm = Air::new(35.0, 1.0, 50.0).unwrap();

    assert!(cold.sound_speed() < SOUND_SPEED);
    assert!(warm.sound_speed() > SOUND_SPEED);
    assert_relative(cold.sound_speed(), 325.17, 1.0e-3);
}

#[test]
fn absorption_reference_values() {
    let air = Air::default();

    // dB/km at 20 °C, 50 %, 1 atm
    let table = [
        (500.0, 2.728),
        (1000.0, 4.665),
        (2000.0, 9.887),
        (4000.0, 29.67),
        (8000.0, 105.3),
    ];

    for (frequency, expected) in table {
        assert_relative(air.absorption_coefficient(frequency) * 1000.0, expected, 0.01);
    }
}

#[test]
fn absorption_dry_cold_air() {
    let air = Air::new(0.0, 1.0, 10.0).unwrap();

    assert_relative(air.absorption_coefficient(1000.0) * 1000.0, 14.05, 0.02);
}

#[test]
fn absorption_grows_with_frequency() {
    let air = Air::default();
    let frequencies: Vec<f64> = (1..=24).map(|k| 1000.0 * k as f64).collect();
    let coefficients = air.absorption_coefficients(&frequencies);

    assert_eq!(air.absorption_coefficient(0.0), 0.0);

    for pair in coefficients.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn batch_matches_single_frequency() {
    let air = Air::new(12.0, 0.9, 80.0).unwrap();
    let frequencies = [63.0, 250.0, 1000.0, 4000.0, 16000.0];
    let coefficients = air.absorption_coefficients(&frequencies);

    for (frequency, coefficient) in frequencies.iter().zip(coefficients) {
        assert_relative(coefficient, air.absorption_coefficient(*frequency), 1.0e-12);
    }
}

#[test]
fn relaxation_frequencies_reference() {
    let (fr_oxygen, fr_nitrogen) = iso9613::relaxation_frequencies(293.15, 101.325, 50.0);

    assert_relative(fr_oxygen, 35_414.0, 0.01);
    assert_relative(fr_nitrogen, 331.85, 0.01);
}

#[test]
fn invalid_atmosphere() {
    assert!(matches!(
        Air::new(-274.0, 1.0, 50.0),
        Err(Error::InvalidAtmosphere(_))
    ));
    assert!(matches!(
        Air::new(20.0, 0.0, 50.0),
        Err(Error::InvalidAtmosphere(_))
    ));
    assert!(matches!(
        Air::new(20.0, 1.0, -1.0),
        Err(Error::InvalidAtmosphere(_))
    ));
    assert!(matches!(
        Air::new(f64::NAN, 1.0, 50.0),
        Err(Error::InvalidAtmosphere(_))
    ));

    let mut air = Air::default();
    assert!(air.set_pressure(-1.0).is_err());
    assert_eq!(air.pressure(), 1.0);
}
