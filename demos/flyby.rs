//! Tone passing a microphone at walking height, with a ground reflection.
//!
//! Writes `out/flyby.wav`.

use simple_logger::SimpleLogger;

use dynamic_sound::microphone::Hedraphone;
use dynamic_sound::source::{SineWave, WhiteNoise};
use dynamic_sound::{Air, MicrophoneArray, Simulation, Trajectory};

const SAMPLE_RATE: u32 = 48000;
const DURATION: f64 = 8.0;

fn main() -> dynamic_sound::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .ok();

    let mut simulation = Simulation::new(Air::new(15.0, 1.0, 70.0)?);

    simulation.add_microphone(
        Trajectory::stationary([0.0, 0.0, 1.5], 0.0, DURATION)?,
        MicrophoneArray::omni(SAMPLE_RATE, 2, "out/flyby.wav")?,
    );
    simulation.add_microphone(
        Trajectory::stationary([0.0, 0.0, 1.5], 0.0, DURATION)?,
        Hedraphone::v2().build(SAMPLE_RATE, 3, "out/flyby_hedraphone.wav")?,
    );

    // 30 m/s along y, 5 m from the microphone. The mirrored path below the
    // ground plane stands in for the reflection.
    let from = [5.0, -120.0, 2.0];
    let to = [5.0, 120.0, 2.0];
    let direct = Trajectory::linear(from, to, 0.0, DURATION)?;
    let image = Trajectory::linear(
        [from[0], from[1], -from[2]],
        [to[0], to[1], -to[2]],
        0.0,
        DURATION,
    )?;

    let engine = SineWave::new(440.0, 2.0);
    let rumble = WhiteNoise::new(DURATION, SAMPLE_RATE as f64, 0.5, 1);

    simulation.add_source(direct.clone(), engine);
    simulation.add_source(direct, rumble.clone());
    simulation.add_source(image.clone(), engine);
    simulation.add_source(image, rumble);

    simulation.run()?;

    Ok(())
}
