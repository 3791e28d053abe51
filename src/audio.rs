use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use raylib::prelude::*;
use crate::constants::*;
use crate::synth;

/// Fire-and-forget sound effects used by the selection engine.
pub trait Sfx {
    fn tick(&mut self, frequency: f32, duration: f32);
    fn fanfare(&mut self);
}

pub struct Silent;

impl Sfx for Silent {
    fn tick(&mut self, _frequency: f32, _duration: f32) {}
    fn fanfare(&mut self) {}
}

// Set once the process has tried to open the audio device
static DEVICE_OPENED: AtomicBool = AtomicBool::new(false);

struct Voices {
    audio: &'static RaylibAudio,
    ticks: VecDeque<Sound<'static>>,
    fanfare: Sound<'static>,
}

impl Voices {
    fn load(audio: &'static RaylibAudio) -> Result<Self, String> {
        let fanfare = load_sound(audio, &synth::encode_wav(&synth::fanfare(), SAMPLE_RATE))?;
        Ok(Self { audio, ticks: VecDeque::with_capacity(TICK_VOICES), fanfare })
    }

    /// Renders and plays one tick. The oldest voices are released once more
    /// than `TICK_VOICES` are alive, so overlapping ticks finish cleanly.
    fn play_tick(&mut self, frequency: f32, duration: f32) -> Result<(), String> {
        let wav = synth::encode_wav(&synth::tick(frequency, duration), SAMPLE_RATE);
        let sound = load_sound(self.audio, &wav)?;
        sound.play();
        if self.ticks.len() == TICK_VOICES {
            self.ticks.pop_front();
        }
        self.ticks.push_back(sound);
        Ok(())
    }
}

fn load_sound(audio: &'static RaylibAudio, wav: &[u8]) -> Result<Sound<'static>, String> {
    let wave = audio
        .new_wave_from_memory(".wav", wav)
        .map_err(|e| format!("Failed to decode tone: {}", e))?;
    audio
        .new_sound_from_wave(&wave)
        .map_err(|e| format!("Failed to create sound: {}", e))
}

// The device is leaked: it lives until the process exits and is never closed.
fn open_device() -> Result<Voices, String> {
    if DEVICE_OPENED.swap(true, Ordering::SeqCst) {
        return Err("audio device already opened by this process".to_string());
    }
    let audio = RaylibAudio::init_audio_device()
        .map_err(|e| format!("Failed to open audio device: {}", e))?;
    if !audio.is_audio_device_ready() {
        return Err("audio device not ready".to_string());
    }
    let audio: &'static RaylibAudio = Box::leak(Box::new(audio));
    Voices::load(audio)
}

enum Device {
    Pending,
    Ready(Voices),
    Unavailable,
}

/// Opens the audio device on the first sound and plays tones from then on.
/// Any failure turns the board silent for the rest of the session.
pub struct SoundBoard {
    device: Device,
}

impl SoundBoard {
    pub fn new(muted: bool) -> Self {
        let device = if muted { Device::Unavailable } else { Device::Pending };
        Self { device }
    }

    fn voices(&mut self) -> Option<&mut Voices> {
        if let Device::Pending = self.device {
            self.device = match open_device() {
                Ok(voices) => {
                    log::info!("Audio ready");
                    Device::Ready(voices)
                }
                Err(e) => {
                    log::warn!("Sound disabled: {}", e);
                    Device::Unavailable
                }
            };
        }
        match &mut self.device {
            Device::Ready(voices) => Some(voices),
            _ => None,
        }
    }
}

impl Sfx for SoundBoard {
    fn tick(&mut self, frequency: f32, duration: f32) {
        if let Some(voices) = self.voices() {
            if let Err(e) = voices.play_tick(frequency, duration) {
                log::debug!("Tick skipped: {}", e);
            }
        }
    }

    fn fanfare(&mut self) {
        if let Some(voices) = self.voices() {
            voices.fanfare.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_board_never_opens_device() {
        let mut board = SoundBoard::new(true);
        board.tick(600.0, 0.05);
        board.fanfare();
        assert!(board.voices().is_none());
        assert!(!DEVICE_OPENED.load(Ordering::SeqCst));
    }
}
