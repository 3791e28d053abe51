use std::f32::consts::TAU;
use raylib::prelude::*;
use crate::constants::*;
use crate::view::{BoxContent, ready_text};

const NAME_FONT_SIZE: i32 = 60;
const MIN_FONT_SIZE: i32 = 20;
const ACCENT: Color = Color::new(244, 114, 182, 255);     // pink
const ACCENT_DIM: Color = Color::new(244, 114, 182, 128);
const PANEL: Color = Color::new(24, 16, 36, 200);
const MUTED: Color = Color::new(156, 163, 175, 255);

pub struct RaffleBox {
    pulse_timer: f32,
}

impl RaffleBox {
    pub fn new() -> Self {
        Self { pulse_timer: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.pulse_timer = (self.pulse_timer + dt) % PULSE_PERIOD;
    }

    // 0..1, used for the winner glow
    fn pulse(&self) -> f32 {
        0.5 + 0.5 * (self.pulse_timer / PULSE_PERIOD * TAU).cos()
    }

    pub fn rect(center: Vector2) -> Rectangle {
        Rectangle::new(
            center.x - BOX_WIDTH * 0.5,
            center.y - BOX_HEIGHT * 0.5,
            BOX_WIDTH,
            BOX_HEIGHT,
        )
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, content: &BoxContent, center: Vector2) {
        let rect = Self::rect(center);
        d.draw_rectangle_rounded(rect, 0.12, 16, PANEL);
        d.draw_rectangle_lines_ex(rect, 2.0, ACCENT_DIM);
        draw_corners(d, rect);

        match content {
            BoxContent::Winner(name) => {
                draw_centered(d, "* Winner! *", center.y - 60.0, 30, ACCENT);
                let alpha = (155.0 + 100.0 * self.pulse()) as u8;
                let size = fit_font_size(name, NAME_FONT_SIZE, BOX_WIDTH - 64.0);
                draw_centered(d, name, center.y + 10.0, size, Color::new(255, 255, 255, alpha));
            }
            BoxContent::Cycling { name, speed } => {
                let size = fit_font_size(name, NAME_FONT_SIZE, BOX_WIDTH - 64.0);
                draw_centered(d, name, center.y - size as f32 * 0.5, size, Color::WHITE);
                draw_centered(d, &format!("{} / s", speed), rect.y + rect.height - 48.0, 18, MUTED);
            }
            BoxContent::Empty => {
                draw_centered(d, "Add names to get started", center.y - 12.0, 26, MUTED);
            }
            BoxContent::Ready(count) => {
                draw_centered(d, &ready_text(*count), center.y - 16.0, 32, Color::LIGHTGRAY);
            }
        }
    }
}

/// Largest size not above `max_size` that fits `name` in `max_width` pixels.
fn fit_font_size(text: &str, max_size: i32, max_width: f32) -> i32 {
    let mut size = max_size;
    while size > MIN_FONT_SIZE && measure_text(text, size) as f32 > max_width {
        size -= 4;
    }
    size
}

pub fn draw_centered(d: &mut RaylibDrawHandle, text: &str, y: f32, size: i32, color: Color) {
    let width = measure_text(text, size);
    let x = d.get_screen_width() / 2 - width / 2;
    d.draw_text(text, x, y as i32, size, color);
}

fn draw_corners(d: &mut RaylibDrawHandle, rect: Rectangle) {
    let inset = 16.0;
    let arm = 32.0;
    let left = rect.x + inset;
    let right = rect.x + rect.width - inset;
    let top = rect.y + inset;
    let bottom = rect.y + rect.height - inset;

    for (corner, dx, dy) in [
        (Vector2::new(left, top), 1.0, 1.0),
        (Vector2::new(right, top), -1.0, 1.0),
        (Vector2::new(left, bottom), 1.0, -1.0),
        (Vector2::new(right, bottom), -1.0, -1.0),
    ] {
        d.draw_line_ex(corner, Vector2::new(corner.x + arm * dx, corner.y), 2.0, ACCENT_DIM);
        d.draw_line_ex(corner, Vector2::new(corner.x, corner.y + arm * dy), 2.0, ACCENT_DIM);
    }
}
