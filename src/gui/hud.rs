//! Gameplay HUD
//!
//! Score and lives along the top edge, elapsed time near the bottom. Lives
//! are drawn as a row of small heart sprites rather than a number.

use crate::assets::{Assets, SpriteId};
use crate::player::Player;
use crate::text::draw_text;
use crate::timer::GameClock;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct Hud;

impl Hud {
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &Assets,
        player: &Player,
        clock: &GameClock,
    ) -> Result<(), String> {
        let label_color = Color::RGB(63, 135, 166);
        let score_color = Color::RGB(255, 0, 149);
        let time_color = Color::RGB(255, 253, 147);

        draw_text(canvas, "SCORE:", 2, 15, label_color, 3)?;
        draw_text(canvas, &player.score.to_string(), 150, 15, score_color, 3)?;

        draw_text(canvas, "LIVES:", 250, 15, label_color, 3)?;
        let mut heart_x = 390;
        for _ in 0..player.lives {
            assets.draw(canvas, SpriteId::HeartSmall, heart_x, 15)?;
            heart_x += 40;
        }

        draw_text(
            canvas,
            &format!("TIME: {}", clock.time_string()),
            8,
            550,
            time_color,
            3,
        )?;

        Ok(())
    }
}
