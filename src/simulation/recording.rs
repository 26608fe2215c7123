//! Rendered multichannel output of one microphone array.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use crate::error::Result;
use crate::utils::to_pcm;

/// Interleaved normalized samples plus the format they are written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    samples: Vec<f64>,
    channels: usize,
    sample_rate: u32,
    sample_width: u16,
    output: String,
}

impl Recording {
    /// Silent recording of `frames` frames. `sample_width` is clamped to 1 to 4 bytes.
    pub fn new(
        frames: usize,
        channels: usize,
        sample_rate: u32,
        sample_width: u16,
        output: impl Into<String>,
    ) -> Self {
        let channels = channels.max(1);

        Self {
            samples: vec![0.0; frames * channels],
            channels,
            sample_rate,
            sample_width: sample_width.clamp(1, 4),
            output: output.into(),
        }
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels
    }

    pub fn channel_count(&self) -> usize {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes per sample.
    pub fn sample_width(&self) -> u16 {
        self.sample_width
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// All samples, frame after frame.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn frame(&self, index: usize) -> &[f64] {
        &self.samples[index * self.channels..(index + 1) * self.channels]
    }

    pub fn frame_mut(&mut self, index: usize) -> &mut [f64] {
        &mut self.samples[index * self.channels..(index + 1) * self.channels]
    }

    /// Samples of a single channel.
    pub fn channel(&self, channel: usize) -> impl Iterator<Item = f64> + '_ {
        self.samples
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
    }

    /// Interleaved signed integers at full scale for the sample width.
    pub fn to_pcm(&self) -> Vec<i32> {
        let bits = self.sample_width * 8;
        self.samples.iter().map(|&sample| to_pcm(sample, bits)).collect()
    }

    /// Writes an integer PCM WAV file, creating parent directories as needed.
    #[cfg(feature = "std")]
    pub fn write_wav(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let spec = hound::WavSpec {
            channels: self.channels as u16,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_width * 8,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec)?;

        for sample in self.to_pcm() {
            writer.write_sample(sample)?;
        }

        writer.finalize()?;

        Ok(())
    }

    /// Writes the recording to the output target of its microphone array.
    #[cfg(feature = "std")]
    pub fn save(&self) -> Result<()> {
        self.write_wav(&self.output)
    }
}
