#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum DrawState {
    #[default]
    Idle,             // Waiting for a start trigger
    Animating,        // Engine is cycling names
    Finished(String), // Winner announced
}

impl DrawState {
    pub fn winner(&self) -> Option<&str> {
        match self {
            DrawState::Finished(winner) => Some(winner),
            _ => None,
        }
    }
}
