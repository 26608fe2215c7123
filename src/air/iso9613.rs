//! Atmospheric absorption of sound after ISO 9613-1:1993.
//!
//! Temperatures are absolute (K), pressures in kPa, relative humidity in
//! percent. Coefficients are returned in dB/m.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::{REFERENCE_PRESSURE, REFERENCE_TEMPERATURE, SOUND_SPEED, TRIPLE_TEMPERATURE};

#[inline]
pub fn sound_speed(temperature: f64) -> f64 {
    SOUND_SPEED * (temperature / REFERENCE_TEMPERATURE).sqrt()
}

/// Saturation vapour pressure (ISO 9613-1: B.2, B.3).
#[inline]
pub fn saturation_pressure(temperature: f64) -> f64 {
    let exponent = -6.8346 * (TRIPLE_TEMPERATURE / temperature).powf(1.261) + 4.6151;
    REFERENCE_PRESSURE * 10.0_f64.powf(exponent)
}

/// Molar concentration of water vapour in percent (ISO 9613-1: B.1).
#[inline]
pub fn molar_concentration_water_vapour(
    relative_humidity: f64,
    saturation_pressure: f64,
    pressure: f64,
) -> f64 {
    relative_humidity * saturation_pressure / pressure
}

/// Oxygen relaxation frequency (ISO 9613-1: 3).
#[inline]
pub fn relaxation_frequency_oxygen(pressure: f64, h: f64) -> f64 {
    pressure / REFERENCE_PRESSURE * (24.0 + 4.04e4 * h * (0.02 + h) / (0.391 + h))
}

/// Nitrogen relaxation frequency (ISO 9613-1: 4).
#[inline]
pub fn relaxation_frequency_nitrogen(pressure: f64, temperature: f64, h: f64) -> f64 {
    let t = temperature / REFERENCE_TEMPERATURE;
    pressure / REFERENCE_PRESSURE
        * t.powf(-0.5)
        * (9.0 + 280.0 * h * (-4.170 * (t.powf(-1.0 / 3.0) - 1.0)).exp())
}

/// Relaxation frequencies `(oxygen, nitrogen)` for the given state.
pub fn relaxation_frequencies(temperature: f64, pressure: f64, relative_humidity: f64) -> (f64, f64) {
    let p_sat = saturation_pressure(temperature);
    let h = molar_concentration_water_vapour(relative_humidity, p_sat, pressure);

    (
        relaxation_frequency_oxygen(pressure, h),
        relaxation_frequency_nitrogen(pressure, temperature, h),
    )
}

/// Pure-tone attenuation coefficient (ISO 9613-1: 5) given the relaxation frequencies.
#[inline]
pub fn attenuation_coefficient_with(
    frequency: f64,
    temperature: f64,
    pressure: f64,
    fr_oxygen: f64,
    fr_nitrogen: f64,
) -> f64 {
    let t = temperature / REFERENCE_TEMPERATURE;
    let f2 = frequency * frequency;

    let classical = 1.84e-11 * (pressure / REFERENCE_PRESSURE).powf(-1.0) * t.sqrt();
    let oxygen = 0.01275 * (-2239.1 / temperature).exp() / (fr_oxygen + f2 / fr_oxygen);
    let nitrogen = 0.1068 * (-3352.0 / temperature).exp() / (fr_nitrogen + f2 / fr_nitrogen);

    8.686 * f2 * (classical + t.powf(-2.5) * (oxygen + nitrogen))
}

/// Pure-tone attenuation coefficient in dB/m.
pub fn attenuation_coefficient(
    frequency: f64,
    temperature: f64,
    pressure: f64,
    relative_humidity: f64,
) -> f64 {
    let (fr_oxygen, fr_nitrogen) = relaxation_frequencies(temperature, pressure, relative_humidity);
    attenuation_coefficient_with(frequency, temperature, pressure, fr_oxygen, fr_nitrogen)
}
