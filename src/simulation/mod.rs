//! Simulation engine.
//!
//! For every output sample of every microphone array, every channel and
//! every source, the engine finds the emission event of the sound reaching
//! the channel, attenuates the emitted sample by spherical spreading,
//! filters it through the atmospheric absorption of the current path length
//! and accumulates the result. Sources superpose, so simple reflections are
//! modeled by adding mirrored image sources.
//!
//! Each `(channel, source)` pair keeps its own delay line and filter, so the
//! absorption filter of one path never smears samples of another.

pub mod recording;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use log::{debug, info};
use nalgebra::Vector3;

use crate::absorption::{frequency_bands, AbsorptionFilter, BasisCache, DEFAULT_NUM_BANDS, NUM_TAPS};
use crate::air::Air;
use crate::emission::{emission_time, geometric_attenuation, Emission};
use crate::error::{Error, Result};
use crate::microphone::MicrophoneArray;
use crate::source::Source;
use crate::trajectory::Trajectory;
use crate::utils::delay_line::DelayLine;

pub use recording::Recording;

/// Engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of frequency bands the absorption filter is fitted on, from DC
    /// to Nyquist. Must be at least `6`. Default is `20`.
    pub num_bands: usize,

    /// Path lengths below this value in m contribute silence instead of an
    /// unbounded spreading gain. Default is `0.001`.
    pub min_distance: f64,

    /// Interval in seconds of simulated time between progress messages.
    /// Default is `1.0`.
    pub progress_interval: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_bands: DEFAULT_NUM_BANDS,
            min_distance: 1.0e-3,
            progress_interval: 1.0,
        }
    }
}

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Accepting microphones, sources and environment changes.
    Configured,

    /// Sample loop in progress.
    Running,

    /// Last run rendered (and, for [`Simulation::run`], wrote) every recording.
    Complete,

    /// Last run stopped on an error.
    Failed,
}

impl SimulationState {
    fn as_str(self) -> &'static str {
        match self {
            SimulationState::Configured => "configured",
            SimulationState::Running => "running",
            SimulationState::Complete => "complete",
            SimulationState::Failed => "failed",
        }
    }
}

/// Delay line and current absorption filter of one source-to-channel path.
#[derive(Debug, Clone, Default)]
struct PropagationPath {
    delay_line: DelayLine<f64, NUM_TAPS>,
    taps: [f64; NUM_TAPS],
}

impl PropagationPath {
    #[inline]
    fn process(&mut self, sample: f64) -> f64 {
        self.delay_line.write(sample);
        self.delay_line.convolve(&self.taps)
    }
}

/// Renders what registered microphone arrays hear from registered sources.
#[derive(Debug)]
pub struct Simulation {
    air: Air,
    config: SimulationConfig,
    microphones: Vec<(Trajectory, MicrophoneArray)>,
    sources: Vec<(Trajectory, Box<dyn Source>)>,
    basis_cache: BasisCache,
    state: SimulationState,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Air::default())
    }
}

impl Simulation {
    /// Empty scene in `air` with the default settings.
    pub fn new(air: Air) -> Self {
        Self::with_config(air, SimulationConfig::default())
    }

    /// Empty scene in `air` with custom settings.
    pub fn with_config(air: Air, config: SimulationConfig) -> Self {
        Self {
            air,
            config,
            microphones: Vec::new(),
            sources: Vec::new(),
            basis_cache: BasisCache::new(),
            state: SimulationState::Configured,
        }
    }

    /// Lifecycle state. Any change to the scene returns it to `Configured`.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn air(&self) -> &Air {
        &self.air
    }

    /// Replaces the atmosphere.
    pub fn set_air(&mut self, air: Air) {
        self.air = air;
        self.state = SimulationState::Configured;
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replaces the engine settings.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config;
        self.state = SimulationState::Configured;
    }

    /// Cache of absorption filter bases, shared by all runs of this engine.
    pub fn basis_cache(&self) -> &BasisCache {
        &self.basis_cache
    }

    /// Registers a microphone array moving along `trajectory`.
    ///
    /// The recording spans the duration of `trajectory`.
    pub fn add_microphone(&mut self, trajectory: Trajectory, microphone: MicrophoneArray) {
        self.microphones.push((trajectory, microphone));
        self.state = SimulationState::Configured;
    }

    /// Registers a source moving along `trajectory`.
    pub fn add_source(&mut self, trajectory: Trajectory, source: impl Source + 'static) {
        self.add_boxed_source(trajectory, Box::new(source));
    }

    /// Registers an already boxed source, e.g. a clone shared with image sources.
    pub fn add_boxed_source(&mut self, trajectory: Trajectory, source: Box<dyn Source>) {
        self.sources.push((trajectory, source));
        self.state = SimulationState::Configured;
    }

    /// Microphone arrays in registration order.
    pub fn microphones(&self) -> &[(Trajectory, MicrophoneArray)] {
        &self.microphones
    }

    /// Sources in registration order.
    pub fn sources(&self) -> &[(Trajectory, Box<dyn Source>)] {
        &self.sources
    }

    /// Renders one recording per microphone array, in registration order.
    pub fn render(&mut self) -> Result<Vec<Recording>> {
        if self.state == SimulationState::Running {
            return Err(Error::InvalidState(self.state.as_str()));
        }

        self.state = SimulationState::Running;

        match self.render_all() {
            Ok(recordings) => {
                self.state = SimulationState::Complete;
                Ok(recordings)
            }
            Err(error) => {
                self.state = SimulationState::Failed;
                Err(error)
            }
        }
    }

    /// Renders and writes every recording to its microphone array output.
    #[cfg(feature = "std")]
    pub fn run(&mut self) -> Result<Vec<Recording>> {
        let recordings = self.render()?;

        for recording in recordings.iter() {
            if let Err(error) = recording.save() {
                self.state = SimulationState::Failed;
                return Err(error);
            }
            info!("Wrote {}", recording.output());
        }

        Ok(recordings)
    }

    fn render_all(&self) -> Result<Vec<Recording>> {
        if self.microphones.is_empty() {
            return Err(Error::NoMicrophones);
        }

        if !self.config.min_distance.is_finite() || self.config.min_distance <= 0.0 {
            return Err(Error::InvalidState("configured with a non-positive minimum distance"));
        }

        // Fail on any configuration problem before the first sample.
        let filters = self
            .microphones
            .iter()
            .map(|(_, microphone)| self.absorption_filter(microphone))
            .collect::<Result<Vec<_>>>()?;

        let sound_speed = self.air.sound_speed();

        info!(
            "Rendering {} microphone array(s), {} source(s), c = {:.2} m/s",
            self.microphones.len(),
            self.sources.len(),
            sound_speed
        );

        self.microphones
            .iter()
            .zip(filters)
            .map(|((trajectory, microphone), filter)| {
                self.render_microphone(trajectory, microphone, filter, sound_speed)
            })
            .collect()
    }

    fn absorption_filter(&self, microphone: &MicrophoneArray) -> Result<AbsorptionFilter> {
        let sample_rate = microphone.sample_rate() as f64;
        let frequencies = frequency_bands(sample_rate, self.config.num_bands);
        let basis = self.basis_cache.get(&frequencies, sample_rate)?;

        Ok(AbsorptionFilter::new(basis, &self.air))
    }

    fn render_microphone(
        &self,
        trajectory: &Trajectory,
        microphone: &MicrophoneArray,
        mut filter: AbsorptionFilter,
        sound_speed: f64,
    ) -> Result<Recording> {
        let sample_rate = microphone.sample_rate() as f64;
        let frames = (sample_rate * trajectory.duration()) as usize;
        let channels = microphone.channel_count();
        let num_sources = self.sources.len();
        let progress_step = ((self.config.progress_interval * sample_rate) as usize).max(1);

        info!(
            "Rendering {} ({} channel(s), {} frame(s) at {} Hz)",
            microphone.output(),
            channels,
            frames,
            microphone.sample_rate()
        );

        let mut recording = Recording::new(
            frames,
            channels,
            microphone.sample_rate(),
            microphone.sample_width(),
            microphone.output(),
        );
        let mut paths = vec![PropagationPath::default(); channels * num_sources];

        for frame in 0..frames {
            let time = trajectory.start_time() + (frame as f64) / sample_rate;
            let Some(pose) = trajectory.get_position(time) else {
                continue;
            };
            let out = recording.frame_mut(frame);

            for (channel_index, channel) in microphone.channels().iter().enumerate() {
                let receiver = pose.transform_point(&channel.offset);

                for (source_index, (source_trajectory, source)) in self.sources.iter().enumerate() {
                    let path = &mut paths[channel_index * num_sources + source_index];
                    let emission = self.emission(&receiver, time, source_trajectory, sound_speed);

                    let sample = match emission {
                        Some(emission) => {
                            let distance = (receiver - emission.position).norm();

                            if distance < self.config.min_distance {
                                debug!(
                                    "Source {source_index} within {distance} m of channel {channel_index} at t = {time} s"
                                );
                                0.0
                            } else {
                                filter.design(distance, &mut path.taps);
                                source.get_sample(emission.time) * geometric_attenuation(distance)
                            }
                        }
                        None => 0.0,
                    };

                    out[channel_index] += path.process(sample);
                }
            }

            if frame % progress_step == 0 {
                debug!(
                    "{}: {:.1} s / {:.1} s",
                    microphone.output(),
                    (frame as f64) / sample_rate,
                    trajectory.duration()
                );
            }
        }

        info!("Rendered {}", microphone.output());

        Ok(recording)
    }

    /// Emission event, with degenerate geometries recovered as silence.
    #[inline]
    fn emission(
        &self,
        receiver: &Vector3<f64>,
        time: f64,
        trajectory: &Trajectory,
        sound_speed: f64,
    ) -> Option<Emission> {
        match emission_time(receiver, time, trajectory, sound_speed) {
            Ok(emission) => emission,
            Err(error) => {
                debug!("{error}, contributing silence");
                None
            }
        }
    }
}
