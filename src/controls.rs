use raylib::prelude::*;
use crate::constants::*;

const BUTTON: Color = Color::new(255, 255, 255, 40);
const BUTTON_HOVER: Color = Color::new(255, 255, 255, 70);
const PRIMARY: Color = Color::new(236, 72, 153, 255);
const PRIMARY_HOVER: Color = Color::new(244, 114, 182, 255);
const DISABLED: Color = Color::new(107, 114, 128, 255);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ControlAction {
    Start,
    ToggleEditor,
    ToggleFullscreen,
}

#[derive(Debug, Clone, Copy)]
pub struct ControlsLayout {
    pub fullscreen: Rectangle,
    pub editor: Rectangle,
    pub start: Rectangle,
}

impl ControlsLayout {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let margin = 24.0;
        let size = 44.0;
        let editor = Rectangle::new(screen_width - margin - size, margin, size, size);
        let fullscreen = Rectangle::new(editor.x - 12.0 - size, margin, size, size);
        let start = Rectangle::new(
            screen_width * 0.5 - 120.0,
            screen_height * 0.5 + BOX_HEIGHT * 0.5 + 32.0,
            240.0,
            60.0,
        );
        Self { fullscreen, editor, start }
    }
}

/// Keyboard shortcuts and button clicks for this frame. Mouse clicks are
/// ignored while the editor panel covers the screen.
pub fn poll(rl: &RaylibHandle, editor_open: bool, animating: bool) -> Vec<ControlAction> {
    let mut actions = Vec::new();

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        actions.push(ControlAction::ToggleFullscreen);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
        actions.push(ControlAction::ToggleEditor);
    }
    if editor_open {
        return actions;
    }

    let start_key = rl.is_key_pressed(KeyboardKey::KEY_SPACE) || rl.is_key_pressed(KeyboardKey::KEY_ENTER);
    if start_key && !animating {
        actions.push(ControlAction::Start);
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let mouse = rl.get_mouse_position();
        let layout = ControlsLayout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        if layout.fullscreen.check_collision_point_rec(mouse) {
            actions.push(ControlAction::ToggleFullscreen);
        } else if layout.editor.check_collision_point_rec(mouse) {
            actions.push(ControlAction::ToggleEditor);
        } else if layout.start.check_collision_point_rec(mouse) && !animating {
            actions.push(ControlAction::Start);
        }
    }

    actions
}

pub fn draw(d: &mut RaylibDrawHandle, start_label: &str, animating: bool) {
    let layout = ControlsLayout::new(d.get_screen_width() as f32, d.get_screen_height() as f32);
    let mouse = d.get_mouse_position();

    for (rect, glyph) in [(layout.fullscreen, "[ ]"), (layout.editor, "=")] {
        let fill = if rect.check_collision_point_rec(mouse) { BUTTON_HOVER } else { BUTTON };
        d.draw_rectangle_rounded(rect, 0.3, 8, fill);
        draw_label(d, rect, glyph, 20, Color::WHITE);
    }

    let fill = if animating {
        DISABLED
    } else if layout.start.check_collision_point_rec(mouse) {
        PRIMARY_HOVER
    } else {
        PRIMARY
    };
    d.draw_rectangle_rounded(layout.start, 0.35, 12, fill);
    draw_label(d, layout.start, &start_label.to_uppercase(), 26, Color::WHITE);
}

fn draw_label(d: &mut RaylibDrawHandle, rect: Rectangle, text: &str, size: i32, color: Color) {
    let x = rect.x + (rect.width - measure_text(text, size) as f32) * 0.5;
    let y = rect.y + (rect.height - size as f32) * 0.5;
    d.draw_text(text, x as i32, y as i32, size, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_do_not_overlap() {
        let layout = ControlsLayout::new(1280.0, 800.0);
        assert!(layout.fullscreen.x + layout.fullscreen.width < layout.editor.x);
        assert!(layout.editor.y + layout.editor.height < layout.start.y);
        assert!(layout.editor.x + layout.editor.width <= 1280.0);
        // Start sits under the draw box
        assert!(layout.start.y > 400.0 + BOX_HEIGHT * 0.5);
    }
}
