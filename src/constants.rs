pub const RENDER_WIDTH: i32 = 1280;           // Initial window width
pub const RENDER_HEIGHT: i32 = 800;           // Initial window height
pub const FPS: u32 = 60;                      // Target frames per second

pub const ANIMATION_DURATION: f32 = 10.0;     // Default draw duration (seconds)
pub const MIN_INTERVAL_MS: f64 = 30.0;        // Fastest gap between name updates
pub const MAX_INTERVAL_MS: f64 = 300.0;       // Slowest gap between name updates

pub const BOX_WIDTH: f32 = 600.0;             // Draw box size (pixels)
pub const BOX_HEIGHT: f32 = 400.0;
pub const SIDEBAR_MIN_WIDTH: f32 = 320.0;     // Editor panel takes a quarter of the window, at least this
pub const SIDEBAR_SLIDE_DURATION: f32 = 0.3;  // Editor panel open/close animation (seconds)
pub const PULSE_PERIOD: f32 = 2.0;            // Winner pulse cycle (seconds)

pub const SAMPLE_RATE: u32 = 44_100;          // Synthesized audio sample rate (Hz)
pub const TICK_BASE_FREQUENCY: f32 = 400.0;   // Tick pitch at the slowest interval
pub const TICK_FREQUENCY_SPAN: f32 = 600.0;   // Added pitch at the fastest interval
pub const TICK_VOICES: usize = 4;             // Tick sounds kept alive so overlapping ticks finish
pub const TICK_GAIN: f32 = 0.1;
pub const FANFARE_NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.5]; // C5, E5, G5, C6
pub const FANFARE_NOTE_DURATION: f32 = 0.3;   // Length of each fanfare note (seconds)
pub const FANFARE_NOTE_SPACING: f32 = 0.15;   // Delay between fanfare note onsets (seconds)
pub const FANFARE_GAIN: f32 = 0.2;
pub const RELEASE_GAIN: f32 = 0.01;           // Envelope target at the end of every tone

pub const DEFAULT_BACKGROUND: &str = "bg.png";
pub const DEFAULT_TITLE: &str = "Raffle";
