//! Tests for microphone arrays

use dynamic_sound::microphone::hedraphone::{Hedraphone, Jitter};
use dynamic_sound::microphone::{Channel, MicrophoneArray};
use dynamic_sound::Error;

#[test]
fn omni_array() {
    let array = MicrophoneArray::omni(48000, 3, "out/omni.wav").unwrap();

    assert_eq!(array.channel_count(), 1);
    assert_eq!(array.bits_per_sample(), 24);
    assert_eq!(array.output(), "out/omni.wav");
    assert_eq!(array.channels()[0], Channel::at([0.0; 3]));
}

#[test]
fn invalid_arrays() {
    assert!(matches!(
        MicrophoneArray::new(Vec::new(), 48000, 2, "x.wav"),
        Err(Error::InvalidMicrophoneArray(_))
    ));
    assert!(matches!(
        MicrophoneArray::omni(0, 2, "x.wav"),
        Err(Error::InvalidMicrophoneArray(_))
    ));
    assert!(matches!(
        MicrophoneArray::omni(48000, 5, "x.wav"),
        Err(Error::InvalidMicrophoneArray(_))
    ));
    assert!(matches!(
        MicrophoneArray::from_offsets(&[[0.0, f64::INFINITY, 0.0]], 48000, 2, "x.wav"),
        Err(Error::InvalidMicrophoneArray(_))
    ));
}

#[test]
fn hedraphone_channel_count() {
    let array = Hedraphone::v2().build(48000, 2, "out/hedraphone.wav").unwrap();

    assert_eq!(array.channel_count(), 36);
    assert_eq!(Hedraphone::default().channel_count(), 49);
}

#[test]
fn hedraphone_top_board() {
    let hedraphone = Hedraphone::v1();
    let offsets = hedraphone.offsets();

    assert_eq!(offsets[0].norm(), 0.0);

    for offset in &offsets[1..6] {
        assert!((offset.norm() - hedraphone.radius_mics).abs() < 1.0e-12);
        assert_eq!(offset.z, 0.0);
    }
}

#[test]
fn hedraphone_side_boards() {
    let hedraphone = Hedraphone::v2();
    let offsets = hedraphone.offsets();
    let bound = 2.0 * hedraphone.spacing + hedraphone.radius_mics + 1.0e-9;

    assert!(offsets.iter().all(|offset| offset.norm() < bound));

    // Tilted boards sit below the top board.
    for board in offsets[6..].chunks(6) {
        assert!(board[0].z < 0.0);
    }

    // Boards are copies of each other turned about z.
    let centers: Vec<f64> = offsets[6..].chunks(6).map(|board| board[0].norm()).collect();
    for center in &centers {
        assert!((center - centers[0]).abs() < 1.0e-12);
    }
}

#[test]
fn hedraphone_jitter() {
    let jitter = Jitter {
        angle: 2.0,
        position: 0.001,
        seed: 42,
    };

    let nominal = Hedraphone::v2().offsets();
    let a = Hedraphone::v2().with_jitter(jitter).offsets();
    let b = Hedraphone::v2().with_jitter(jitter).offsets();

    assert_eq!(a, b);
    assert_ne!(a, nominal);

    for (jittered, nominal) in a.iter().zip(nominal.iter()) {
        assert!((jittered - nominal).norm() < 0.005);
    }
}
