mod assets;
mod board;
mod collectible;
mod collision;
mod config;
mod enemy;
mod gui;
mod input;
mod player;
mod render;
mod rock;
mod rules;
mod session;
mod spawn;
mod text;
mod timer;

use assets::Assets;
use config::GameConfig;
use gui::{CreditsScreen, GameOverScreen};
use sdl2::event::Event;
use session::{Screen, Session};
use std::time::Instant;

const GAME_WIDTH: u32 = board::BOARD_WIDTH;
const GAME_HEIGHT: u32 = board::BOARD_HEIGHT;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / GAME_WIDTH as i32;
            let max_scale_h = usable_h / GAME_HEIGHT as i32;

            let scale = max_scale_w.min(max_scale_h);
            scale.clamp(1, 3) as u32
        }
        Err(_) => {
            println!("Warning: Could not detect monitor size, using 1x scale");
            1
        }
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;

    println!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale, window_width, window_height
    );

    let window = video_subsystem
        .window("River Run", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps the board coordinates fixed regardless of scale
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let game_config = GameConfig::load_or_default("assets/config/game.json");
    let game_assets = Assets::load(&texture_creator)?;

    let mut rng = rand::thread_rng();
    let mut session = Session::new(&game_config);

    println!("Controls:");
    println!("  Arrow keys - move / navigate menus");
    println!("  Enter or Space - confirm");

    let mut last_tick = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                // Movement fires on release, matching the menu keys
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(symbol) = input::map_keycode(keycode) {
                        session.handle_input(symbol, &game_config);
                    }
                }
                _ => {}
            }
        }

        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();

        session.update(dt, &mut rng, &game_config);

        canvas.set_draw_color(sdl2::pixels::Color::RGB(0, 0, 0));
        canvas.clear();

        match session.screen {
            Screen::Start => session.start_screen.render(&mut canvas)?,
            Screen::CharacterSelect => {
                // The board stays visible behind the translucent select overlay
                board::render(&mut canvas, &game_assets)?;
                session.character_select.render(&mut canvas, &game_assets)?;
            }
            Screen::Gameplay => render::render_scene(&mut canvas, &game_assets, &session)?,
            Screen::Credits => CreditsScreen.render(&mut canvas)?,
            Screen::GameOver => GameOverScreen.render(&mut canvas, session.player.score)?,
        }

        canvas.present();

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
