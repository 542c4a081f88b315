//! Player Token
//!
//! The player has no autonomous motion: it sits snapped to the tile grid and
//! only moves through the rules engine in response to direction keys. This
//! module owns the player's state (position, score, lives, chosen character)
//! and the geometry of its tile square and per-direction destination
//! projections.

use crate::assets::{Assets, SpriteId};
use crate::board;
use crate::collision::TileBounded;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A movement direction, as delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Playable characters, in carousel order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
    PrincessGirl,
}

impl Character {
    pub const ALL: [Character; 5] = [
        Character::Boy,
        Character::CatGirl,
        Character::HornGirl,
        Character::PinkGirl,
        Character::PrincessGirl,
    ];

    pub fn sprite(self) -> SpriteId {
        match self {
            Character::Boy => SpriteId::CharBoy,
            Character::CatGirl => SpriteId::CharCatGirl,
            Character::HornGirl => SpriteId::CharHornGirl,
            Character::PinkGirl => SpriteId::CharPinkGirl,
            Character::PrincessGirl => SpriteId::CharPrincessGirl,
        }
    }
}

pub struct Player {
    pub x: i32,
    pub y: i32,
    pub score: u32,
    pub lives: i32,
    pub sprite: Character,
}

impl Player {
    pub fn new(lives: i32) -> Self {
        Player {
            x: board::SPAWN_X,
            y: board::SPAWN_Y,
            score: 0,
            lives,
            sprite: Character::Boy,
        }
    }

    /// Required per-tick entity hook; the player only moves on input
    pub fn update(&mut self) {}

    /// Snap back to the spawn tile (after a hit or a river crossing)
    pub fn reset_to_spawn(&mut self) {
        self.x = board::SPAWN_X;
        self.y = board::SPAWN_Y;
    }

    /// The tile square the destination of a move would occupy.
    ///
    /// Offsets are the player footprint (x+35, y+75) shifted by one column
    /// or row in the given direction.
    pub fn destination_square(&self, direction: Direction) -> Rect {
        let (dx, dy) = match direction {
            Direction::Left => (-66, 75),
            Direction::Up => (35, -8),
            Direction::Right => (136, 75),
            Direction::Down => (35, 158),
        };
        Rect::new(self.x + dx, self.y + dy, 49, 67)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        assets.draw(canvas, self.sprite.sprite(), self.x, self.y)
    }
}

impl TileBounded for Player {
    fn tile_square(&self) -> Rect {
        Rect::new(self.x + 35, self.y + 75, 49, 67)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_on_spawn_tile() {
        let player = Player::new(3);
        assert_eq!((player.x, player.y), (202, 390));
        assert_eq!(player.score, 0);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_tile_square_footprint() {
        let player = Player::new(3);
        let square = player.tile_square();

        assert_eq!((square.x(), square.y()), (237, 465));
        assert_eq!((square.width(), square.height()), (49, 67));
    }

    #[test]
    fn test_destination_squares_shift_one_tile() {
        let player = Player::new(3);
        let here = player.tile_square();

        let left = player.destination_square(Direction::Left);
        let up = player.destination_square(Direction::Up);
        let right = player.destination_square(Direction::Right);
        let down = player.destination_square(Direction::Down);

        assert_eq!(left.x(), here.x() - 101);
        assert_eq!(right.x(), here.x() + 101);
        assert_eq!(up.y(), here.y() - 83);
        assert_eq!(down.y(), here.y() + 83);
        for square in [left, up, right, down] {
            assert_eq!((square.width(), square.height()), (49, 67));
        }
    }
}
