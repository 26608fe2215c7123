//! Atmosphere state and the quantities derived from it.

pub mod iso9613;

use alloc::format;
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Speed of sound in m/s at [`REFERENCE_TEMPERATURE`].
pub const SOUND_SPEED: f64 = 343.2;

/// Reference temperature in K (20 °C).
pub const REFERENCE_TEMPERATURE: f64 = 293.15;

/// Reference pressure in kPa (1 atm).
pub const REFERENCE_PRESSURE: f64 = 101.325;

/// Triple point isotherm temperature in K (0.01 °C).
pub const TRIPLE_TEMPERATURE: f64 = 273.16;

/// Offset between degrees Celsius and Kelvin.
pub const ZERO_CELSIUS: f64 = 273.15;

/// Atmosphere the sound propagates through.
#[derive(Debug, Clone, PartialEq)]
pub struct Air {
    /// Temperature in °C. Must be above absolute zero.
    temperature: f64,

    /// Static pressure in atm. Must be positive.
    pressure: f64,

    /// Relative humidity in percent, usually `0.0` to `100.0`.
    relative_humidity: f64,
}

impl Default for Air {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            pressure: 1.0,
            relative_humidity: 50.0,
        }
    }
}

impl Air {
    pub fn new(temperature: f64, pressure: f64, relative_humidity: f64) -> Result<Self> {
        let mut air = Self::default();
        air.set_temperature(temperature)?;
        air.set_pressure(pressure)?;
        air.set_relative_humidity(relative_humidity)?;

        Ok(air)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        if !temperature.is_finite() || temperature + ZERO_CELSIUS <= 0.0 {
            return Err(Error::InvalidAtmosphere(format!(
                "temperature {temperature} °C is not above absolute zero"
            )));
        }
        self.temperature = temperature;

        Ok(())
    }

    pub fn set_pressure(&mut self, pressure: f64) -> Result<()> {
        if !pressure.is_finite() || pressure <= 0.0 {
            return Err(Error::InvalidAtmosphere(format!(
                "pressure {pressure} atm is not positive"
            )));
        }
        self.pressure = pressure;

        Ok(())
    }

    pub fn set_relative_humidity(&mut self, relative_humidity: f64) -> Result<()> {
        if !relative_humidity.is_finite() || relative_humidity < 0.0 {
            return Err(Error::InvalidAtmosphere(format!(
                "relative humidity {relative_humidity} % is negative"
            )));
        }
        self.relative_humidity = relative_humidity;

        Ok(())
    }

    /// Absolute temperature in K.
    #[inline]
    pub fn temperature_kelvin(&self) -> f64 {
        self.temperature + ZERO_CELSIUS
    }

    /// Pressure in kPa.
    #[inline]
    pub fn pressure_kpa(&self) -> f64 {
        self.pressure * REFERENCE_PRESSURE
    }

    /// Speed of sound in m/s.
    pub fn sound_speed(&self) -> f64 {
        iso9613::sound_speed(self.temperature_kelvin())
    }

    /// Absorption in dB/m for a single frequency in Hz.
    pub fn absorption_coefficient(&self, frequency: f64) -> f64 {
        iso9613::attenuation_coefficient(
            frequency,
            self.temperature_kelvin(),
            self.pressure_kpa(),
            self.relative_humidity,
        )
    }

    /// Absorption in dB/m for each frequency in Hz.
    pub fn absorption_coefficients(&self, frequencies: &[f64]) -> Vec<f64> {
        let temperature = self.temperature_kelvin();
        let pressure = self.pressure_kpa();
        let (fr_oxygen, fr_nitrogen) =
            iso9613::relaxation_frequencies(temperature, pressure, self.relative_humidity);

        frequencies
            .iter()
            .map(|&frequency| {
                iso9613::attenuation_coefficient_with(
                    frequency,
                    temperature,
                    pressure,
                    fr_oxygen,
                    fr_nitrogen,
                )
            })
            .collect()
    }
}
