//! Start Screen
//!
//! Two menu entries, NEW GAME and CREDITS. The highlighted entry pulses
//! between black and red (the red channel ramps up and down at 500 units per
//! second); any arrow key toggles which entry is highlighted. Confirmation is
//! handled by the session, which reads [`StartScreen::choice`].

use crate::input::KeyFlags;
use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Unhighlighted menu entry color (steel blue)
const MENU_BLUE: Color = Color::RGB(67, 107, 168);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    NewGame,
    Credits,
}

pub struct StartScreen {
    pub choice: StartChoice,
    hue: f64,
    direction: f64,
}

impl StartScreen {
    pub fn new() -> Self {
        StartScreen {
            choice: StartChoice::NewGame,
            hue: 0.0,
            direction: 1.0,
        }
    }

    pub fn update(&mut self, dt: f64, keys: &KeyFlags) {
        // Glow pulse: ramp the red channel, reversing at either end
        if self.hue >= 255.0 {
            self.direction = -1.0;
        } else if self.hue <= 0.0 {
            self.direction = 1.0;
        }
        self.hue = (self.hue + 500.0 * dt * self.direction).clamp(0.0, 255.0);

        if keys.any_arrow() {
            self.choice = match self.choice {
                StartChoice::NewGame => StartChoice::Credits,
                StartChoice::Credits => StartChoice::NewGame,
            };
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let glow = Color::RGB(self.hue.floor() as u8, 0, 0);
        let (new_game_color, credits_color) = match self.choice {
            StartChoice::NewGame => (glow, MENU_BLUE),
            StartChoice::Credits => (MENU_BLUE, glow),
        };

        draw_text(canvas, "GET TO THE RIVER", 10, 200, MENU_BLUE, 5)?;
        draw_text(canvas, "NEW GAME", 10, 300, new_game_color, 4)?;
        draw_text(canvas, "CREDITS", 10, 400, credits_color, 4)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSymbol;

    #[test]
    fn test_arrow_toggles_choice() {
        let mut screen = StartScreen::new();
        let mut keys = KeyFlags::default();
        assert_eq!(screen.choice, StartChoice::NewGame);

        keys.set(InputSymbol::Down);
        screen.update(0.016, &keys);
        assert_eq!(screen.choice, StartChoice::Credits);

        screen.update(0.016, &keys);
        assert_eq!(screen.choice, StartChoice::NewGame);
    }

    #[test]
    fn test_no_arrow_keeps_choice() {
        let mut screen = StartScreen::new();
        let keys = KeyFlags::default();

        for _ in 0..100 {
            screen.update(0.016, &keys);
        }
        assert_eq!(screen.choice, StartChoice::NewGame);
    }

    #[test]
    fn test_glow_stays_in_byte_range() {
        let mut screen = StartScreen::new();
        let keys = KeyFlags::default();

        // A huge stalled-frame dt must not push the hue out of range
        for _ in 0..20 {
            screen.update(3.0, &keys);
            assert!((0.0..=255.0).contains(&screen.hue));
        }
    }
}
