//! Microphone arrays.
//!
//! An array is a rigid set of channels attached to a moving frame. Each
//! channel has an offset and an orientation relative to that frame. The
//! array also carries the parameters of the recording it produces.

pub mod hedraphone;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use nalgebra::{UnitQuaternion, Vector3};

use crate::error::{Error, Result};

pub use hedraphone::Hedraphone;

/// One capsule of an array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// Offset from the array origin in the array frame (m).
    pub offset: Vector3<f64>,

    /// Orientation relative to the array frame.
    pub orientation: UnitQuaternion<f64>,
}

impl Channel {
    pub fn new(offset: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            offset,
            orientation,
        }
    }

    /// Omnidirectional capsule at `offset`.
    pub fn at(offset: [f64; 3]) -> Self {
        Self::new(Vector3::from(offset), UnitQuaternion::identity())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MicrophoneArray {
    channels: Vec<Channel>,
    sample_rate: u32,
    sample_width: u16,
    output: String,
}

impl MicrophoneArray {
    /// `sample_width` is in bytes per sample (1 to 4), `output` names the recording target.
    pub fn new(
        channels: Vec<Channel>,
        sample_rate: u32,
        sample_width: u16,
        output: impl Into<String>,
    ) -> Result<Self> {
        if channels.is_empty() {
            return Err(Error::InvalidMicrophoneArray("no channels".into()));
        }

        if sample_rate == 0 {
            return Err(Error::InvalidMicrophoneArray("sample rate is zero".into()));
        }

        if !(1..=4).contains(&sample_width) {
            return Err(Error::InvalidMicrophoneArray(format!(
                "unsupported sample width of {sample_width} bytes"
            )));
        }

        if !channels
            .iter()
            .all(|channel| channel.offset.iter().all(|v| v.is_finite()))
        {
            return Err(Error::InvalidMicrophoneArray("non-finite channel offset".into()));
        }

        Ok(Self {
            channels,
            sample_rate,
            sample_width,
            output: output.into(),
        })
    }

    /// Single omnidirectional channel at the array origin.
    pub fn omni(sample_rate: u32, sample_width: u16, output: impl Into<String>) -> Result<Self> {
        Self::new(
            alloc::vec![Channel::at([0.0, 0.0, 0.0])],
            sample_rate,
            sample_width,
            output,
        )
    }

    /// Channels without orientation, one per offset.
    pub fn from_offsets(
        offsets: &[[f64; 3]],
        sample_rate: u32,
        sample_width: u16,
        output: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            offsets.iter().map(|&offset| Channel::at(offset)).collect(),
            sample_rate,
            sample_width,
            output,
        )
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes per sample.
    pub fn sample_width(&self) -> u16 {
        self.sample_width
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.sample_width * 8
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}
