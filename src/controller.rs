use std::fmt;
use rand::Rng;
use crate::engine::DrawObserver;
use crate::shuffle::shuffled;
use crate::state::DrawState;

/// Reasons a draw cannot start.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DrawError {
    /// The participant list is empty; the host should open the editor.
    NoParticipants,
    /// A draw is already animating.
    AlreadyDrawing,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParticipants => write!(f, "no participants to draw from"),
            Self::AlreadyDrawing => write!(f, "a draw is already in progress"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Owns the canonical participant list and the draw state.
#[derive(Debug, Default)]
pub struct DrawController {
    names: Vec<String>,
    state: DrawState,
    remove_winner_on_draw: bool,
}

impl DrawController {
    pub fn new(names: Vec<String>, remove_winner_on_draw: bool) -> Self {
        Self {
            names,
            state: DrawState::Idle,
            remove_winner_on_draw,
        }
    }

    /// Shuffles the list and enters `Animating`. Returns the snapshot the
    /// engine should cycle through.
    pub fn start_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<String>, DrawError> {
        if self.names.is_empty() {
            return Err(DrawError::NoParticipants);
        }
        if self.state == DrawState::Animating {
            return Err(DrawError::AlreadyDrawing);
        }
        self.names = shuffled(&self.names, rng);
        self.state = DrawState::Animating;
        Ok(self.names.clone())
    }

    pub fn on_animation_complete(&mut self, winner: &str) {
        self.state = DrawState::Finished(winner.to_string());
        if self.remove_winner_on_draw {
            if let Some(index) = self.names.iter().position(|name| name == winner) {
                self.names.remove(index);
                log::info!("Removed {} from the list, {} left", winner, self.names.len());
            }
        }
    }

    /// Replaces the list. An announced winner is cleared; a running draw
    /// keeps cycling its own snapshot.
    pub fn set_names(&mut self, names: Vec<String>) {
        self.names = names;
        if let DrawState::Finished(_) = self.state {
            self.state = DrawState::Idle;
        }
    }

    pub fn set_remove_winner_on_draw(&mut self, flag: bool) {
        self.remove_winner_on_draw = flag;
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn winner(&self) -> Option<&str> {
        self.state.winner()
    }

    pub fn is_animating(&self) -> bool {
        self.state == DrawState::Animating
    }

    pub fn remove_winner_on_draw(&self) -> bool {
        self.remove_winner_on_draw
    }
}

impl DrawObserver for DrawController {
    fn on_complete(&mut self, winner: &str) {
        self.on_animation_complete(winner);
    }
}
