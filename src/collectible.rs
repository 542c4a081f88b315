//! Collectible Items
//!
//! Gems, the golden key, and the heart are one tagged type: behavior
//! differences (score value, life grant, spawn weight, tile-square offset)
//! are a `match` over [`CollectibleKind`] rather than a type per item. The
//! key and heart sprites sit lower in their image, so their tile square uses
//! a shallower vertical offset than the gems.

use crate::assets::{Assets, SpriteId};
use crate::collision::TileBounded;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    OrangeGem,
    GreenGem,
    BlueGem,
    GoldenKey,
    Heart,
}

impl CollectibleKind {
    /// Points awarded on pickup; `None` for the life-granting heart
    pub fn score(self) -> Option<u32> {
        match self {
            CollectibleKind::OrangeGem => Some(20),
            CollectibleKind::GreenGem => Some(40),
            CollectibleKind::BlueGem => Some(80),
            CollectibleKind::GoldenKey => Some(200),
            CollectibleKind::Heart => None,
        }
    }

    pub fn grants_life(self) -> bool {
        matches!(self, CollectibleKind::Heart)
    }

    pub fn sprite(self) -> SpriteId {
        match self {
            CollectibleKind::OrangeGem => SpriteId::GemOrange,
            CollectibleKind::GreenGem => SpriteId::GemGreen,
            CollectibleKind::BlueGem => SpriteId::GemBlue,
            CollectibleKind::GoldenKey => SpriteId::Key,
            CollectibleKind::Heart => SpriteId::Heart,
        }
    }

    /// Vertical tile-square offset; key and heart sprites are shorter
    fn square_y_offset(self) -> i32 {
        match self {
            CollectibleKind::GoldenKey | CollectibleKind::Heart => 60,
            _ => 75,
        }
    }
}

pub struct Collectible {
    pub x: i32,
    pub y: i32,
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(x: i32, y: i32, kind: CollectibleKind) -> Self {
        Collectible { x, y, kind }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        assets.draw(canvas, self.kind.sprite(), self.x, self.y)
    }
}

impl TileBounded for Collectible {
    fn tile_square(&self) -> Rect {
        Rect::new(self.x, self.y + self.kind.square_y_offset(), 100, 75)
    }
}
