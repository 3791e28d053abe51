use std::path::Path;
use raylib::prelude::*;

// --- Load the static background image ---
pub fn load_background(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, String> {
    if !path.is_file() {
        return Err(format!("Background image not found: {}", path.display()));
    }
    let file_name = path
        .to_str()
        .ok_or_else(|| format!("Background path is not valid UTF-8: {}", path.display()))?;
    rl.load_texture(thread, file_name)
        .map_err(|e| format!("Failed to load background {}: {}", path.display(), e))
}

/// Destination rectangle that covers the whole screen while keeping the
/// image aspect ratio, centered (overflow is cropped by the window edges).
pub fn cover_rect(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> Rectangle {
    let scale = (screen_width / tex_width).max(screen_height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    Rectangle::new(
        (screen_width - width) * 0.5,
        (screen_height - height) * 0.5,
        width,
        height,
    )
}

pub fn draw_background(d: &mut RaylibDrawHandle, texture: &Texture2D, screen_width: f32, screen_height: f32) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        cover_rect(tex_width, tex_height, screen_width, screen_height),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_wide_image_on_tall_screen() {
        let rect = cover_rect(2000.0, 1000.0, 800.0, 800.0);
        assert_eq!(rect.height, 800.0);
        assert_eq!(rect.width, 1600.0);
        assert_eq!(rect.x, -400.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_cover_small_image_scales_up() {
        let rect = cover_rect(100.0, 100.0, 1280.0, 720.0);
        assert_eq!(rect.width, 1280.0);
        assert_eq!(rect.height, 1280.0);
        assert_eq!(rect.y, -280.0);
    }
}
