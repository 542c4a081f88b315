//! Game Over Screen
//!
//! Shown when the player runs out of lives. Displays the final score and
//! waits for a confirm key to return to the start screen.

use crate::text::{draw_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct GameOverScreen;

impl GameOverScreen {
    pub fn render(&self, canvas: &mut Canvas<Window>, final_score: u32) -> Result<(), String> {
        let blue = Color::RGB(67, 107, 168);

        draw_text_centered(canvas, "GAME OVER", 252, 200, blue, 5)?;
        draw_text(canvas, "TRY AGAIN!", 10, 300, blue, 4)?;
        draw_text(
            canvas,
            &format!("FINAL SCORE: {}", final_score),
            10,
            380,
            Color::RGB(255, 0, 149),
            3,
        )?;
        draw_text(
            canvas,
            "PRESS ENTER TO RETURN",
            10,
            450,
            Color::RGB(150, 150, 160),
            2,
        )?;

        Ok(())
    }
}
