/// What the draw box shows this frame.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BoxContent<'a> {
    Winner(&'a str),
    Cycling { name: &'a str, speed: u32 },
    Empty,
    Ready(usize),
}

/// Picks the box content: winner, then the cycling name, then the empty
/// prompt, then the ready count.
pub fn box_content<'a>(
    winner: Option<&'a str>,
    animating: bool,
    displayed: Option<&'a str>,
    speed: u32,
    participants: usize,
) -> BoxContent<'a> {
    if let Some(winner) = winner {
        return BoxContent::Winner(winner);
    }
    match displayed {
        Some(name) if animating => BoxContent::Cycling { name, speed },
        _ if participants == 0 => BoxContent::Empty,
        _ => BoxContent::Ready(participants),
    }
}

pub fn start_label(animating: bool) -> &'static str {
    if animating { "Drawing..." } else { "Start" }
}

pub fn ready_text(participants: usize) -> String {
    match participants {
        1 => "1 participant ready".to_string(),
        n => format!("{} participants ready", n),
    }
}
