//! Character Selection Carousel
//!
//! Five characters in a wrap-around carousel: the selected one sits on the
//! selector tile at the screen center with its neighbors either side. A
//! left/right press starts a timed slide of the whole row; while a slide is
//! in progress further navigation is ignored. During a slide a fourth,
//! incoming character is drawn at the far edge so the row never shows a gap.

use crate::assets::{Assets, SpriteId};
use crate::input::KeyFlags;
use crate::player::Character;
use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Resting x of the selected character (also the selector tile)
const REST_X: f64 = 202.0;
/// Horizontal spacing between carousel slots
const SLOT_STEP: i32 = 150;
/// Row y for the selector and all characters
const ROW_Y: i32 = 250;
/// A leftward slide completes when the row has moved one slot left
const LEFT_DONE_X: f64 = 52.0;
/// A rightward slide completes when the row has moved one slot right
const RIGHT_DONE_X: f64 = 352.0;

const ROSTER: usize = Character::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Left,
    Right,
}

pub struct CharacterSelect {
    index: usize,
    slide: Option<Slide>,
    offset_x: f64,
}

impl CharacterSelect {
    pub fn new() -> Self {
        CharacterSelect {
            index: 0,
            slide: None,
            offset_x: REST_X,
        }
    }

    pub fn selected(&self) -> Character {
        Character::ALL[self.index]
    }

    pub fn is_transitioning(&self) -> bool {
        self.slide.is_some()
    }

    /// Indices shown at rest: (previous, selected, next), wrapping
    fn neighbors(&self) -> (usize, usize, usize) {
        let prev = (self.index + ROSTER - 1) % ROSTER;
        let next = (self.index + 1) % ROSTER;
        (prev, self.index, next)
    }

    /// Index of the character entering from the far edge during a slide
    fn incoming(&self, slide: Slide) -> usize {
        match slide {
            Slide::Left => (self.index + 2) % ROSTER,
            Slide::Right => (self.index + ROSTER - 2) % ROSTER,
        }
    }

    pub fn update(&mut self, dt: f64, keys: &KeyFlags, slide_speed: f64) {
        match self.slide {
            None => {
                if keys.left {
                    self.slide = Some(Slide::Left);
                } else if keys.right {
                    self.slide = Some(Slide::Right);
                }
            }
            Some(Slide::Left) => {
                self.offset_x -= slide_speed * dt;
                if self.offset_x <= LEFT_DONE_X {
                    self.index = (self.index + 1) % ROSTER;
                    self.finish_slide();
                }
            }
            Some(Slide::Right) => {
                self.offset_x += slide_speed * dt;
                if self.offset_x >= RIGHT_DONE_X {
                    self.index = (self.index + ROSTER - 1) % ROSTER;
                    self.finish_slide();
                }
            }
        }
    }

    fn finish_slide(&mut self) {
        self.slide = None;
        self.offset_x = REST_X;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        // Translucent white wash over whatever was on screen
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(255, 255, 255, 217));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        draw_text(canvas, "SELECT CHARACTER", 20, 80, Color::RGB(67, 107, 168), 5)?;

        assets.draw(canvas, SpriteId::Selector, REST_X as i32, ROW_Y)?;

        let (prev, current, next) = self.neighbors();
        let x = self.offset_x.floor() as i32;

        match self.slide {
            None => {
                self.draw_character(canvas, assets, prev, x - SLOT_STEP)?;
                self.draw_character(canvas, assets, current, x)?;
                self.draw_character(canvas, assets, next, x + SLOT_STEP)?;
            }
            Some(slide @ Slide::Left) => {
                self.draw_character(canvas, assets, prev, x - SLOT_STEP)?;
                self.draw_character(canvas, assets, current, x)?;
                self.draw_character(canvas, assets, next, x + SLOT_STEP)?;
                self.draw_character(canvas, assets, self.incoming(slide), x + 2 * SLOT_STEP)?;
            }
            Some(slide @ Slide::Right) => {
                self.draw_character(canvas, assets, self.incoming(slide), x - 2 * SLOT_STEP)?;
                self.draw_character(canvas, assets, prev, x - SLOT_STEP)?;
                self.draw_character(canvas, assets, current, x)?;
                self.draw_character(canvas, assets, next, x + SLOT_STEP)?;
            }
        }

        Ok(())
    }

    fn draw_character(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &Assets,
        index: usize,
        x: i32,
    ) -> Result<(), String> {
        assets.draw(canvas, Character::ALL[index].sprite(), x, ROW_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSymbol;

    const SLIDE_SPEED: f64 = 500.0;

    fn press(symbol: InputSymbol) -> KeyFlags {
        let mut keys = KeyFlags::default();
        keys.set(symbol);
        keys
    }

    fn run_slide(carousel: &mut CharacterSelect) {
        // 0.4s at 500 px/s comfortably covers the 150px slot distance
        for _ in 0..40 {
            carousel.update(0.01, &KeyFlags::default(), SLIDE_SPEED);
        }
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_left_advances_with_wraparound() {
        let mut carousel = CharacterSelect::new();

        for expected in [
            Character::CatGirl,
            Character::HornGirl,
            Character::PinkGirl,
            Character::PrincessGirl,
            Character::Boy,
        ] {
            carousel.update(0.01, &press(InputSymbol::Left), SLIDE_SPEED);
            assert!(carousel.is_transitioning());
            run_slide(&mut carousel);
            assert_eq!(carousel.selected(), expected);
        }
    }

    #[test]
    fn test_right_goes_backward_with_wraparound() {
        let mut carousel = CharacterSelect::new();

        carousel.update(0.01, &press(InputSymbol::Right), SLIDE_SPEED);
        run_slide(&mut carousel);
        assert_eq!(carousel.selected(), Character::PrincessGirl);
    }

    #[test]
    fn test_navigation_ignored_mid_slide() {
        let mut carousel = CharacterSelect::new();

        carousel.update(0.01, &press(InputSymbol::Left), SLIDE_SPEED);
        assert!(carousel.is_transitioning());

        // Hammering right during the slide must not queue a second rotation
        for _ in 0..20 {
            carousel.update(0.01, &press(InputSymbol::Right), SLIDE_SPEED);
        }
        assert!(carousel.is_transitioning());

        run_slide(&mut carousel);
        assert_eq!(carousel.selected(), Character::CatGirl);
    }

    #[test]
    fn test_incoming_character_indices() {
        let carousel = CharacterSelect::new();
        assert_eq!(carousel.incoming(Slide::Left), 2);
        assert_eq!(carousel.incoming(Slide::Right), 3);
    }
}
