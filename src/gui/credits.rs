//! Credits Screen

use crate::text::{draw_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct CreditsScreen;

impl CreditsScreen {
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let blue = Color::RGB(67, 107, 168);

        draw_text_centered(canvas, "CREDITS", 252, 200, blue, 5)?;
        draw_text(canvas, "A CLASSIC ARCADE TRIBUTE", 10, 300, blue, 3)?;
        draw_text(canvas, "ART: UDACITY GAME ASSETS", 10, 350, blue, 3)?;
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
