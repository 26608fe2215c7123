//! Tests for the utility functions

use dynamic_sound::utils::delay_line::DelayLine;
use dynamic_sound::utils::random::Random;
use dynamic_sound::utils::*;

#[test]
fn delay_line_newest_first() {
    let mut line = DelayLine::<f64, 4>::new();

    for sample in [1.0, 2.0, 3.0] {
        line.write(sample);
    }

    assert_eq!(line.read_with_delay(0), 3.0);
    assert_eq!(line.read_with_delay(1), 2.0);
    assert_eq!(line.read_with_delay(2), 1.0);
    assert_eq!(line.read_with_delay(3), 0.0);

    line.write(4.0);
    line.write(5.0);
    assert_eq!(line.read_with_delay(3), 2.0);
    assert_eq!(line.convolve(&[1.0, 10.0, 100.0, 1000.0]), 5.0 + 40.0 + 300.0 + 2000.0);

    line.reset();
    assert_eq!(line.convolve(&[1.0; 4]), 0.0);
}

#[test]
fn linear_interpolation() {
    let table = [0.0, 2.0, 4.0];

    assert_eq!(interpolate(&table, 0.25), 0.5);
    assert_eq!(interpolate(&table, 1.5), 3.0);
    assert_eq!(interpolate(&table, 2.0), 0.0);
    assert_eq!(interpolate(&table, -0.5), 0.0);
    assert_eq!(interpolate_wrap(&table, 2.5), 2.0);
}

#[test]
fn evenly_spaced() {
    let values = linspace(0.0, 1.0, 11);

    assert_eq!(values.len(), 11);
    assert_eq!(values[0], 0.0);
    assert_eq!(values[10], 1.0);
    assert!((values[3] - 0.3).abs() < 1.0e-15);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
}

#[test]
fn pcm_conversion() {
    assert_eq!(to_pcm(0.0, 16), 0);
    assert_eq!(to_pcm(1.0, 16), 32767);
    assert_eq!(to_pcm(-1.0, 16), -32767);
    assert_eq!(to_pcm(2.0, 16), 32767);
    assert_eq!(to_pcm(-2.0, 16), -32768);
    assert_eq!(to_pcm(0.5, 8), 63);
    assert_eq!(to_pcm(1.0, 32), i32::MAX);
}

#[test]
fn pcm_width_out_of_range() {
    assert_eq!(to_pcm(0.5, 0), 0);
    assert_eq!(to_pcm(1.0, 64), i32::MAX);
}

#[test]
fn decibels() {
    assert!((db_to_gain(-20.0) - 0.1).abs() < 1.0e-15);
    assert!((db_to_gain(6.0) - 1.9953).abs() < 1.0e-4);
}

#[test]
fn random_is_seeded() {
    let mut a = Random::new(5);
    let mut b = Random::default();
    b.seed(5);

    for _ in 0..100 {
        let value = a.get_float();
        assert_eq!(value, b.get_float());
        assert!((0.0..1.0).contains(&value));
    }
}
