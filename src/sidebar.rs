use raylib::prelude::*;
use crate::constants::*;
use crate::editor::ListEditor;

const PANEL: Color = Color::new(17, 12, 28, 240);
const OVERLAY: Color = Color::new(0, 0, 0, 128);
const FIELD: Color = Color::new(35, 27, 52, 255);
const ACCENT: Color = Color::new(244, 114, 182, 255);
const DANGER: Color = Color::new(248, 113, 113, 255);
const MUTED: Color = Color::new(156, 163, 175, 255);
const TEXT_SIZE: i32 = 20;
const LINE_HEIGHT: f32 = 26.0;
const PADDING: f32 = 24.0;

/// Rectangles of the editor panel for a given slide position.
#[derive(Debug, Clone, Copy)]
pub struct SidebarLayout {
    pub panel: Rectangle,
    pub text_area: Rectangle,
    pub count_y: f32,
    pub checkbox: Rectangle,
    pub clear_button: Rectangle,
}

impl SidebarLayout {
    pub fn new(screen_width: f32, screen_height: f32, slide: f32) -> Self {
        let width = (screen_width * 0.25).max(SIDEBAR_MIN_WIDTH).min(screen_width);
        let panel = Rectangle::new(screen_width - width * slide, 0.0, width, screen_height);
        let inner_x = panel.x + PADDING;
        let inner_width = width - PADDING * 2.0;

        let clear_button = Rectangle::new(inner_x, screen_height - PADDING - 48.0, inner_width, 48.0);
        let checkbox = Rectangle::new(inner_x, clear_button.y - PADDING - 28.0, 28.0, 28.0);
        let count_y = checkbox.y - PADDING - 24.0;
        let text_top = 96.0;
        let text_area = Rectangle::new(
            inner_x,
            text_top,
            inner_width,
            (count_y - 12.0 - text_top).max(LINE_HEIGHT),
        );

        Self { panel, text_area, count_y, checkbox, clear_button }
    }
}

/// What the user did in the panel this frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SidebarInput {
    pub edited: bool,
    pub remove_winner: Option<bool>,
}

/// Slide-in editing panel over a dimmed overlay.
pub struct Sidebar {
    open: bool,
    slide: f32,      // 0 = hidden, 1 = fully shown
    caret_timer: f32,
}

impl Sidebar {
    pub fn new() -> Self {
        Self { open: false, slide: 0.0, caret_timer: 0.0 }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            log::debug!("Editor opened");
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open { self.close() } else { self.open() }
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / SIDEBAR_SLIDE_DURATION;
        self.slide = if self.open {
            (self.slide + step).min(1.0)
        } else {
            (self.slide - step).max(0.0)
        };
        self.caret_timer = (self.caret_timer + dt) % 1.0;
    }

    // Ease-out position of the panel
    fn eased_slide(&self) -> f32 {
        ease::cubic_out(self.slide, 0.0, 1.0, 1.0)
    }

    pub fn layout(&self, screen_width: f32, screen_height: f32) -> SidebarLayout {
        SidebarLayout::new(screen_width, screen_height, self.eased_slide())
    }

    /// Keyboard and mouse handling while the panel is open.
    pub fn handle_input(
        &mut self,
        rl: &mut RaylibHandle,
        editor: &mut ListEditor,
        remove_winner: bool,
    ) -> SidebarInput {
        let mut input = SidebarInput::default();
        if !self.open {
            return input;
        }

        while let Some(c) = rl.get_char_pressed() {
            if !c.is_control() {
                editor.insert_char(c);
                input.edited = true;
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER) {
            editor.newline();
            input.edited = true;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) || rl.is_key_pressed_repeat(KeyboardKey::KEY_BACKSPACE) {
            editor.backspace();
            input.edited = true;
        }
        let ctrl = rl.is_key_down(KeyboardKey::KEY_LEFT_CONTROL) || rl.is_key_down(KeyboardKey::KEY_RIGHT_CONTROL);
        if ctrl && rl.is_key_pressed(KeyboardKey::KEY_V) {
            match rl.get_clipboard_text() {
                Ok(text) => {
                    editor.insert_str(&text);
                    input.edited = true;
                }
                Err(e) => log::warn!("Clipboard paste failed: {}", e),
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            self.close();
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            let layout = self.layout(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            if !layout.panel.check_collision_point_rec(mouse) {
                self.close();
            } else if layout.checkbox.check_collision_point_rec(mouse) {
                input.remove_winner = Some(!remove_winner);
            } else if layout.clear_button.check_collision_point_rec(mouse) {
                editor.clear();
                input.edited = true;
            }
        }

        input
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, editor: &ListEditor, remove_winner: bool) {
        if self.slide <= 0.0 {
            return;
        }
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;
        let layout = self.layout(screen_width, screen_height);

        let overlay = Color::new(OVERLAY.r, OVERLAY.g, OVERLAY.b, (OVERLAY.a as f32 * self.slide) as u8);
        d.draw_rectangle(0, 0, screen_width as i32, screen_height as i32, overlay);
        d.draw_rectangle_rec(layout.panel, PANEL);

        let x = (layout.panel.x + PADDING) as i32;
        d.draw_text("Settings", x, PADDING as i32, 30, ACCENT);
        d.draw_text("Participants (one per line)", x, 68, 18, Color::LIGHTGRAY);

        // Text area, scrolled so the end of the buffer stays visible
        d.draw_rectangle_rec(layout.text_area, FIELD);
        let visible = (layout.text_area.height / LINE_HEIGHT).floor().max(1.0) as usize;
        let lines: Vec<&str> = editor.raw().split('\n').collect();
        let first = lines.len().saturating_sub(visible);
        let text_x = (layout.text_area.x + 10.0) as i32;
        for (row, line) in lines[first..].iter().enumerate() {
            let y = (layout.text_area.y + 8.0 + row as f32 * LINE_HEIGHT) as i32;
            d.draw_text(line, text_x, y, TEXT_SIZE, Color::WHITE);
        }
        if self.open && self.caret_timer < 0.5 {
            let row = lines.len() - first - 1;
            let last = lines.last().copied().unwrap_or("");
            let caret_x = text_x + measure_text(last, TEXT_SIZE) + 2;
            let caret_y = (layout.text_area.y + 8.0 + row as f32 * LINE_HEIGHT) as i32;
            d.draw_rectangle(caret_x, caret_y, 2, TEXT_SIZE, ACCENT);
        }
        if editor.raw().is_empty() {
            d.draw_text("Jane Doe\nJohn Smith\n...", text_x, (layout.text_area.y + 8.0) as i32, TEXT_SIZE, MUTED);
        }

        d.draw_text(&format!("Total: {} participants", editor.len()), x, layout.count_y as i32, 20, MUTED);

        d.draw_rectangle_lines_ex(layout.checkbox, 2.0, ACCENT);
        if remove_winner {
            let inner = Rectangle::new(layout.checkbox.x + 6.0, layout.checkbox.y + 6.0, 16.0, 16.0);
            d.draw_rectangle_rec(inner, ACCENT);
        }
        d.draw_text(
            "Remove winner from the list",
            (layout.checkbox.x + layout.checkbox.width + 12.0) as i32,
            (layout.checkbox.y + 4.0) as i32,
            20,
            Color::LIGHTGRAY,
        );

        d.draw_rectangle_lines_ex(layout.clear_button, 2.0, DANGER);
        let label = "Clear list";
        let label_x = layout.clear_button.x + (layout.clear_button.width - measure_text(label, 20) as f32) * 0.5;
        d.draw_text(label, label_x as i32, (layout.clear_button.y + 14.0) as i32, 20, DANGER);
    }
}
