use std::f64::consts::PI;
use rand::Rng;
use rand::rngs::ThreadRng;
use crate::audio::Sfx;
use crate::constants::*;

/// Receives what the engine does on each frame.
pub trait DrawObserver {
    fn on_tick(&mut self, _name: &str, _speed: u32) {}
    fn on_complete(&mut self, winner: &str);
}

/// Slow-fast-slow cadence: 300 ms at both ends, 30 ms at the midpoint.
pub fn interval_for_progress(progress: f64) -> f64 {
    let speed_factor = (progress.clamp(0.0, 1.0) * PI).sin();
    MAX_INTERVAL_MS - speed_factor * (MAX_INTERVAL_MS - MIN_INTERVAL_MS)
}

/// Tick pitch rises as the interval shrinks.
pub fn tick_frequency(interval_ms: f64) -> f32 {
    TICK_BASE_FREQUENCY + (1.0 - interval_ms / MAX_INTERVAL_MS) as f32 * TICK_FREQUENCY_SPAN
}

pub fn tick_duration(interval_ms: f64) -> f32 {
    0.03 + (interval_ms / 5000.0) as f32
}

struct Run {
    names: Vec<String>,
    duration_ms: f64,
    started_at: Option<f64>,
    last_update: f64,
    cursor: usize,
}

/// Timed name cycler. The host calls `frame` once per rendered frame with a
/// monotonic timestamp; nothing happens between calls.
pub struct SelectionEngine<S: Sfx, R: Rng = ThreadRng> {
    sfx: S,
    rng: R,
    run: Option<Run>,
    displayed: Option<String>,
    speed: u32,
}

impl<S: Sfx> SelectionEngine<S, ThreadRng> {
    pub fn new(sfx: S) -> Self {
        Self::with_rng(sfx, rand::rng())
    }
}

impl<S: Sfx, R: Rng> SelectionEngine<S, R> {
    pub fn with_rng(sfx: S, rng: R) -> Self {
        Self {
            sfx,
            rng,
            run: None,
            displayed: None,
            speed: 0,
        }
    }

    /// Begins a run over `names`, replacing any run in flight.
    pub fn start(&mut self, names: Vec<String>, duration_secs: f32) {
        self.displayed = None;
        self.speed = 0;
        if names.is_empty() {
            log::warn!("Ignoring draw start with no names");
            self.run = None;
            return;
        }
        log::info!("Draw started: {} names over {:.1}s", names.len(), duration_secs);
        self.run = Some(Run {
            names,
            duration_ms: f64::from(duration_secs) * 1000.0,
            started_at: None,
            last_update: 0.0,
            cursor: 0,
        });
    }

    /// Drops the pending frame. No completion fires for a cancelled run.
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            log::info!("Draw cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    /// Name updates per second at the last tick.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Advances the run to `now_ms`. Returns whether another frame is wanted.
    pub fn frame<O: DrawObserver + ?Sized>(&mut self, now_ms: f64, observer: &mut O) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };

        let started_at = match run.started_at {
            Some(t) => t,
            None => {
                run.started_at = Some(now_ms);
                run.last_update = now_ms;
                now_ms
            }
        };

        let progress = if run.duration_ms > 0.0 {
            ((now_ms - started_at) / run.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let interval = interval_for_progress(progress);

        if now_ms - run.last_update >= interval {
            run.cursor = (run.cursor + 1) % run.names.len();
            run.last_update = now_ms;
            let name = &run.names[run.cursor];
            self.speed = (1000.0 / interval).round() as u32;
            self.displayed = Some(name.clone());
            self.sfx.tick(tick_frequency(interval), tick_duration(interval));
            log::trace!("tick {} ({} /s)", name, self.speed);
            observer.on_tick(name, self.speed);
        }

        if progress < 1.0 {
            return true;
        }

        let Some(run) = self.run.take() else {
            return false;
        };
        // Fresh draw, independent of whatever name the cursor landed on
        let winner = run.names[self.rng.random_range(0..run.names.len())].clone();
        self.displayed = Some(winner.clone());
        self.sfx.fanfare();
        log::info!("Winner: {}", winner);
        observer.on_complete(&winner);
        false
    }
}
