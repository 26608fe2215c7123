//! Tests for the absorption filter synthesis


use std::sync::Arc;

use dynamic_sound::absorption::*;
use dynamic_sound::Air;

const SAMPLE_RATE: f64 = 8000.0;

fn filter(sample_rate: f64) -> AbsorptionFilter {
    let cache = BasisCache::new();
    let basis = cache
        .get(&frequency_bands(sample_rate, DEFAULT_NUM_BANDS), sample_rate)
        .unwrap();

    AbsorptionFilter::new(basis, &Air::default())
}

fn band_energy(taps: &[f64], low: f64, high: f64) -> f64 {
    (0..=40)
        .map(|k| low + (high - low) * k as f64 / 40.0)
        .map(|frequency| frequency_response(taps, frequency, SAMPLE_RATE).powi(2))
        .sum()
}

#[test]
fn frequency_grid() {
    let bands = frequency_bands(48000.0, 20);

    assert_eq!(bands.len(), 20);
    assert_eq!(bands[0], 0.0);
    assert_eq!(bands[19], 24000.0);
}

#[test]
fn taps_are_symmetric() {
    let mut filter = filter(SAMPLE_RATE);
    let mut taps = [0.0; NUM_TAPS];

    filter.design(50.0, &mut taps);

    for k in 0..NUM_TAPS {
        assert_eq!(taps[k], taps[NUM_TAPS - 1 - k]);
    }
}

#[test]
fn design_is_idempotent() {
    let mut filter = filter(SAMPLE_RATE);
    let mut first = [0.0; NUM_TAPS];
    let mut second = [0.0; NUM_TAPS];

    filter.design(123.0, &mut first);
    filter.design(7.0, &mut second);
    filter.design(123.0, &mut second);

    assert_eq!(first, second);
}

#[test]
fn response_follows_absorption() {
    let air = Air::default();
    let mut filter = filter(SAMPLE_RATE);
    let mut taps = [0.0; NUM_TAPS];

    for distance in [1.0, 10.0, 100.0] {
        filter.design(distance, &mut taps);

        for frequency in [0.0, 1000.0, 2000.0, 3000.0] {
            let expected = 10.0_f64.powf(-air.absorption_coefficient(frequency) * distance / 20.0);
            let actual = frequency_response(&taps, frequency, SAMPLE_RATE);

            assert!(
                (actual - expected).abs() < 0.01,
                "{distance} m, {frequency} Hz: {actual} instead of {expected}"
            );
        }
    }
}

#[test]
fn high_band_decays_with_distance() {
    let mut filter = filter(SAMPLE_RATE);
    let mut taps = [0.0; NUM_TAPS];
    let mut wav_data = Vec::new();
    let mut previous = f64::INFINITY;

    for distance in [1.0, 10.0, 100.0, 1000.0] {
        filter.design(distance, &mut taps);
        let energy = band_energy(&taps, 2000.0, 4000.0);

        assert!(energy < previous, "{distance} m: {energy} >= {previous}");
        previous = energy;

        wav_data.extend_from_slice(&taps);
    }

    wav_writer::write("absorption/impulse_responses.wav", &wav_data, SAMPLE_RATE as u32).ok();
}

#[test]
fn dc_gain_below_unity() {
    let mut filter = filter(SAMPLE_RATE);
    let mut taps = [0.0; NUM_TAPS];

    filter.design(10.0, &mut taps);
    let dc: f64 = taps.iter().sum();

    assert!(dc < 1.0);
    assert!((dc - 0.9995).abs() < 1.0e-3);
    assert!((frequency_response(&taps, 2000.0, SAMPLE_RATE) - 0.9886).abs() < 1.0e-3);
}

#[test]
fn cache_reuses_bases() {
    let cache = BasisCache::new();
    let bands = frequency_bands(SAMPLE_RATE, DEFAULT_NUM_BANDS);

    assert!(cache.is_empty());

    let a = cache.get(&bands, SAMPLE_RATE).unwrap();
    let b = cache.get(&bands, SAMPLE_RATE).unwrap();

    assert_eq!(cache.len(), 1);
    assert!(Arc::ptr_eq(&a, &b));

    let c = cache
        .get(&frequency_bands(48000.0, DEFAULT_NUM_BANDS), 48000.0)
        .unwrap();

    assert_eq!(cache.len(), 2);
    assert!(!Arc::ptr_eq(&a, &c));

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn too_few_bands() {
    let bands = frequency_bands(SAMPLE_RATE, 5);

    assert!(matches!(
        CosineBasis::new(&bands, SAMPLE_RATE),
        Err(dynamic_sound::Error::SingularBasis { bands: 5, .. })
    ));
    assert!(BasisCache::new().get(&bands, SAMPLE_RATE).is_err());
}
