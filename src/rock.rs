//! Rocks
//!
//! Rocks block the player's path. They are immutable after creation and the
//! whole batch is regenerated when a new game starts.

use crate::assets::{Assets, SpriteId};
use crate::collision::TileBounded;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct Rock {
    pub x: i32,
    pub y: i32,
}

impl Rock {
    pub fn new(x: i32, y: i32) -> Self {
        Rock { x, y }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        assets.draw(canvas, SpriteId::Rock, self.x, self.y)
    }
}

impl TileBounded for Rock {
    fn tile_square(&self) -> Rect {
        Rect::new(self.x, self.y + 75, 100, 75)
    }
}
