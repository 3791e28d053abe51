//! Tone synthesis for the draw sound effects.
//!
//! Everything here is plain sample math; `audio` turns the encoded WAV bytes
//! into raylib sounds.

use std::f32::consts::TAU;
use crate::constants::*;

/// Sine tone whose gain decays exponentially from `gain` to `RELEASE_GAIN`.
pub fn tone(frequency: f32, duration: f32, gain: f32) -> Vec<f32> {
    let count = (duration * SAMPLE_RATE as f32).round() as usize;
    let ratio = RELEASE_GAIN / gain;
    (0..count)
        .map(|n| {
            let t = n as f32 / SAMPLE_RATE as f32;
            let envelope = gain * ratio.powf(t / duration);
            envelope * (TAU * frequency * t).sin()
        })
        .collect()
}

/// The four ascending winner notes mixed into one buffer.
pub fn fanfare() -> Vec<f32> {
    let last_onset = FANFARE_NOTE_SPACING * (FANFARE_NOTES.len() - 1) as f32;
    let total = ((last_onset + FANFARE_NOTE_DURATION) * SAMPLE_RATE as f32).round() as usize;
    let mut mix = vec![0.0; total];

    for (i, frequency) in FANFARE_NOTES.iter().enumerate() {
        let offset = (FANFARE_NOTE_SPACING * i as f32 * SAMPLE_RATE as f32).round() as usize;
        let note = tone(*frequency, FANFARE_NOTE_DURATION, FANFARE_GAIN);
        for (slot, sample) in mix[offset..].iter_mut().zip(note) {
            *slot += sample;
        }
    }
    mix
}

/// One tick at exactly the pitch and length the engine asked for.
pub fn tick(frequency: f32, duration: f32) -> Vec<f32> {
    tone(frequency, duration, TICK_GAIN)
}

/// 16-bit mono PCM WAV container around `samples` (clamped to [-1, 1]).
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());          // fmt chunk size
    bytes.extend_from_slice(&1u16.to_le_bytes());           // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes());           // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    bytes.extend_from_slice(&2u16.to_le_bytes());           // block align
    bytes.extend_from_slice(&16u16.to_le_bytes());          // bits per sample

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        bytes.extend_from_slice(&pcm.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{interval_for_progress, tick_duration, tick_frequency};

    #[test]
    fn test_tone_length_and_envelope() {
        let samples = tone(440.0, 0.5, 0.2);
        assert_eq!(samples.len(), 22_050);
        let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!(peak <= 0.2 + 1e-6);

        // Tail is quieter than the head
        let head = samples[..1000].iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        let tail = samples[samples.len() - 1000..].iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!(tail < head * 0.2, "head {} tail {}", head, tail);
    }

    #[test]
    fn test_fanfare_spans_all_notes() {
        let samples = fanfare();
        let expected = ((0.15 * 3.0 + 0.3) * SAMPLE_RATE as f32).round() as usize;
        assert_eq!(samples.len(), expected);
        // Last note still sounding past the third onset
        let last_onset = (0.45 * SAMPLE_RATE as f32) as usize;
        assert!(samples[last_onset + 10..last_onset + 200].iter().any(|s| s.abs() > 0.01));
    }

    // Frequency from the spacing of rising zero crossings, interpolated
    // between samples.
    fn estimate_frequency(samples: &[f32]) -> f32 {
        let mut crossings = Vec::new();
        for n in 1..samples.len() {
            let (a, b) = (samples[n - 1], samples[n]);
            if a < 0.0 && b >= 0.0 {
                crossings.push((n - 1) as f32 + a / (a - b));
            }
        }
        let cycles = (crossings.len() - 1) as f32;
        let span = crossings[crossings.len() - 1] - crossings[0];
        cycles * SAMPLE_RATE as f32 / span
    }

    #[test]
    fn test_tick_matches_engine_pitch_and_length() {
        for step in 1..=1000 {
            let interval = interval_for_progress(step as f64 / 1000.0);
            let frequency = tick_frequency(interval);
            let duration = tick_duration(interval);
            let samples = tick(frequency, duration);

            let expected_len = (duration * SAMPLE_RATE as f32).round() as usize;
            assert_eq!(samples.len(), expected_len);

            let played = estimate_frequency(&samples);
            assert!(
                (played - frequency).abs() < 1.0,
                "tick at {} Hz played as {} Hz",
                frequency,
                played
            );
        }
    }

    #[test]
    fn test_wav_header() {
        let bytes = encode_wav(&[0.0, 1.0, -1.0, 2.0], 8000);
        assert_eq!(bytes.len(), 44 + 8);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), 44);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        assert_eq!(u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]), 8000);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]), 8);

        // Out-of-range samples are clamped
        assert_eq!(i16::from_le_bytes([bytes[46], bytes[47]]), i16::MAX);
        assert_eq!(i16::from_le_bytes([bytes[50], bytes[51]]), i16::MAX);
    }
}
