use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

mod audio;
mod background;
mod cli;
mod constants;
mod controller;
mod controls;
mod editor;
mod engine;
mod raffle_box;
mod shuffle;
mod sidebar;
mod state;
mod synth;
mod view;

use crate::audio::SoundBoard;
use crate::background::{draw_background, load_background};
use crate::cli::Cli;
use crate::constants::*;
use crate::controller::{DrawController, DrawError};
use crate::controls::ControlAction;
use crate::editor::ListEditor;
use crate::engine::SelectionEngine;
use crate::raffle_box::{RaffleBox, draw_centered};
use crate::sidebar::Sidebar;

fn read_names_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read names from {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // The file text seeds the editor buffer as-is; the list derives from it
    let mut editor = ListEditor::new();
    if let Some(path) = &cli.names {
        editor.set_text(&read_names_file(path)?);
    }
    log::info!("Loaded {} participants", editor.len());

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title(&cli.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes the editor, not the window
    rl.set_exit_key(None);
    if cli.fullscreen {
        rl.toggle_fullscreen();
    }

    let background = match load_background(&mut rl, &thread, &cli.background) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    // --- Draw State ---
    let mut controller = DrawController::new(editor.names().to_vec(), cli.remove_winner);
    let mut engine = SelectionEngine::new(SoundBoard::new(cli.mute));
    let mut rng = rand::rng();
    let mut sidebar = Sidebar::new();
    let mut raffle_box = RaffleBox::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let now_ms = rl.get_time() * 1000.0;

        // 1. Editor panel input
        let editor_was_open = sidebar.is_open();
        let input = sidebar.handle_input(&mut rl, &mut editor, controller.remove_winner_on_draw());
        if input.edited {
            controller.set_names(editor.names().to_vec());
        }
        if let Some(flag) = input.remove_winner {
            controller.set_remove_winner_on_draw(flag);
        }

        // 2. Top-level controls
        for action in controls::poll(&rl, editor_was_open, controller.is_animating()) {
            match action {
                ControlAction::Start => match controller.start_draw(&mut rng) {
                    Ok(snapshot) => engine.start(snapshot, cli.duration),
                    Err(DrawError::NoParticipants) => {
                        log::info!("No participants yet, opening the editor");
                        sidebar.open();
                    }
                    Err(e) => log::debug!("Start ignored: {}", e),
                },
                ControlAction::ToggleEditor => sidebar.toggle(),
                ControlAction::ToggleFullscreen => rl.toggle_fullscreen(),
            }
        }

        // 3. Advance the draw; completion lands in the controller
        if engine.is_running() {
            engine.frame(now_ms, &mut controller);
            if !controller.is_animating() {
                log::debug!("Draw state: {:?}", controller.state());
            }
        }
        editor.sync_from(controller.names());

        sidebar.update(dt);
        raffle_box.update(dt);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::new(24, 12, 32, 255));
        if let Some(texture) = &background {
            draw_background(&mut d, texture, sw, sh);
        }

        let center = Vector2::new(sw * 0.5, sh * 0.5);
        draw_centered(&mut d, &cli.title, center.y - BOX_HEIGHT * 0.5 - 72.0, 48, Color::WHITE);

        let content = view::box_content(
            controller.winner(),
            controller.is_animating(),
            engine.displayed(),
            engine.speed(),
            controller.names().len(),
        );
        raffle_box.draw(&mut d, &content, center);
        controls::draw(&mut d, view::start_label(controller.is_animating()), controller.is_animating());
        sidebar.draw(&mut d, &editor, controller.remove_winner_on_draw());
    }

    // Window closing mid-draw tears the engine down without a winner
    engine.cancel();
    Ok(())
}
