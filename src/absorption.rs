//! Atmospheric absorption filters.
//!
//! The loss along a propagation path is a smooth low-pass curve that
//! depends on distance. It is approximated by a short symmetric (linear
//! phase) FIR filter, refitted whenever the distance changes.
//!
//! A symmetric filter of order `2M` has the zero-phase response
//!
//! ```text
//! H(ω) = c0 + 2 Σ cj cos(ω j),  j = 1..M
//! ```
//!
//! so the half coefficients `c` are the least-squares solution of `A c = g`
//! over a grid of frequency bands, with `A[i, 0] = 1` and
//! `A[i, j] = 2 cos(ωi j)`. The pseudo-inverse `(AᵀA)⁻¹Aᵀ` only depends on
//! the grid and the sample rate and is cached in a [`BasisCache`].

use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use nalgebra::DMatrix;
#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Mutex;

use crate::air::Air;
use crate::error::{Error, Result};
use crate::utils::{db_to_gain, linspace};

/// Order of the absorption filter.
pub const FILTER_ORDER: usize = 10;

/// Number of taps of the absorption filter.
pub const NUM_TAPS: usize = FILTER_ORDER + 1;

/// Default number of frequency bands the response is fitted on.
pub const DEFAULT_NUM_BANDS: usize = 20;

const HALF_ORDER: usize = FILTER_ORDER / 2;

/// `num_bands` frequencies from DC to Nyquist, both included.
pub fn frequency_bands(sample_rate: f64, num_bands: usize) -> Vec<f64> {
    linspace(0.0, sample_rate / 2.0, num_bands)
}

/// Least-squares projection onto the cosine basis of a symmetric FIR filter.
#[derive(Debug, Clone)]
pub struct CosineBasis {
    frequencies: Vec<f64>,
    sample_rate: f64,

    // (HALF_ORDER + 1) x bands
    pseudo_inverse: DMatrix<f64>,
}

impl CosineBasis {
    pub fn new(frequencies: &[f64], sample_rate: f64) -> Result<Self> {
        let singular = || Error::SingularBasis {
            bands: frequencies.len(),
            sample_rate,
        };

        if frequencies.len() <= HALF_ORDER || !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(singular());
        }

        let basis = DMatrix::from_fn(frequencies.len(), HALF_ORDER + 1, |i, j| {
            if j == 0 {
                1.0
            } else {
                let omega = core::f64::consts::TAU * frequencies[i] / sample_rate;
                2.0 * (omega * j as f64).cos()
            }
        });

        let normal = basis.transpose() * &basis;
        let inverse = normal.try_inverse().ok_or_else(singular)?;

        Ok(Self {
            frequencies: frequencies.to_vec(),
            sample_rate,
            pseudo_inverse: inverse * basis.transpose(),
        })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Fits symmetric taps to the linear `gains`, one per band.
    #[inline]
    pub fn fit(&self, gains: &[f64], taps: &mut [f64; NUM_TAPS]) {
        for j in 0..=HALF_ORDER {
            let coefficient: f64 = gains
                .iter()
                .enumerate()
                .map(|(i, gain)| self.pseudo_inverse[(j, i)] * gain)
                .sum();

            taps[HALF_ORDER + j] = coefficient;
            taps[HALF_ORDER - j] = coefficient;
        }
    }
}

type BasisKey = (u64, Vec<u64>);

/// Memoized [`CosineBasis`] per `(frequencies, sample_rate)` pair.
#[derive(Debug, Default)]
pub struct BasisCache {
    entries: Mutex<BTreeMap<BasisKey, Arc<CosineBasis>>>,
}

impl BasisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached basis for the pair, building it on first use.
    pub fn get(&self, frequencies: &[f64], sample_rate: f64) -> Result<Arc<CosineBasis>> {
        let key = (
            sample_rate.to_bits(),
            frequencies.iter().map(|f| f.to_bits()).collect(),
        );
        let mut entries = self.entries.lock();

        if let Some(basis) = entries.get(&key) {
            return Ok(Arc::clone(basis));
        }

        let basis = Arc::new(CosineBasis::new(frequencies, sample_rate)?);
        entries.insert(key, Arc::clone(&basis));

        Ok(basis)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Absorption filter designer for one atmosphere and frequency grid.
#[derive(Debug, Clone)]
pub struct AbsorptionFilter {
    basis: Arc<CosineBasis>,

    // dB/m per band
    coefficients: Vec<f64>,

    gains: Vec<f64>,
}

impl AbsorptionFilter {
    pub fn new(basis: Arc<CosineBasis>, air: &Air) -> Self {
        let coefficients = air.absorption_coefficients(basis.frequencies());
        let gains = vec![0.0; coefficients.len()];

        Self {
            basis,
            coefficients,
            gains,
        }
    }

    /// Absorption coefficients in dB/m, one per band.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn basis(&self) -> &CosineBasis {
        &self.basis
    }

    /// Writes the filter for a path of `distance` m into `taps`.
    #[inline]
    pub fn design(&mut self, distance: f64, taps: &mut [f64; NUM_TAPS]) {
        for (gain, coefficient) in self.gains.iter_mut().zip(self.coefficients.iter()) {
            *gain = db_to_gain(-coefficient * distance);
        }

        self.basis.fit(&self.gains, taps);
    }
}

/// Magnitude response of `taps` at `frequency`.
pub fn frequency_response(taps: &[f64], frequency: f64, sample_rate: f64) -> f64 {
    let omega = core::f64::consts::TAU * frequency / sample_rate;
    let (re, im) = taps
        .iter()
        .enumerate()
        .fold((0.0_f64, 0.0_f64), |(re, im), (k, tap)| {
            let phase = omega * k as f64;
            (re + tap * phase.cos(), im - tap * phase.sin())
        });

    re.hypot(im)
}
