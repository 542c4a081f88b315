//! Board Layout and Rendering
//!
//! The game board is a fixed 5x6 tile grid: one water row at the top (the
//! "river"), three stone rows where the bugs patrol, and two grass rows at
//! the bottom where the player spawns. All the pixel constants the rest of
//! the game builds on (column width, row height, spawn tile) live here.

use crate::assets::{Assets, SpriteId};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Width of one board column in pixels
pub const COL_WIDTH: i32 = 101;

/// Height of one board row in pixels
pub const ROW_HEIGHT: i32 = 83;

pub const NUM_COLS: i32 = 5;
pub const NUM_ROWS: i32 = 6;

/// Logical canvas size (5 columns x 101px, 6 rows x 83px plus HUD margin)
pub const BOARD_WIDTH: u32 = 505;
pub const BOARD_HEIGHT: u32 = 606;

/// The tile the player starts on and returns to after a hit or a crossing
pub const SPAWN_X: i32 = 202;
pub const SPAWN_Y: i32 = 390;

/// Enemies respawn just off the left edge and despawn past the right edge
pub const ENEMY_SPAWN_X: i32 = -101;
pub const ENEMY_DESPAWN_X: i32 = 505;

/// The three stone rows enemies patrol (sprite y coordinates)
pub const ENEMY_ROWS: [i32; 3] = [63, 146, 229];

/// Sprite y coordinates collectibles and rocks can occupy
pub const ITEM_ROWS: [i32; 3] = [53, 136, 219];

/// Sprite x coordinates collectibles and rocks can occupy
pub const ITEM_COLUMNS: [i32; 5] = [0, 101, 201, 301, 401];

/// Block sprite for each board row, top to bottom
const ROW_SPRITES: [SpriteId; NUM_ROWS as usize] = [
    SpriteId::WaterBlock,
    SpriteId::StoneBlock,
    SpriteId::StoneBlock,
    SpriteId::StoneBlock,
    SpriteId::GrassBlock,
    SpriteId::GrassBlock,
];

/// Draw the board tiles, row by row, column by column.
///
/// Called once per Gameplay frame before any entity is drawn.
pub fn render(canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
    for (row, sprite) in ROW_SPRITES.iter().enumerate() {
        for col in 0..NUM_COLS {
            assets.draw(canvas, *sprite, col * COL_WIDTH, row as i32 * ROW_HEIGHT)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_covers_canvas_width() {
        assert_eq!(NUM_COLS * COL_WIDTH, BOARD_WIDTH as i32);
    }

    #[test]
    fn test_spawn_tile_is_on_the_grid() {
        assert_eq!(SPAWN_X % COL_WIDTH, 0);
        // Row origin is offset from the sprite grid; six rows of 83px starting
        // at y = -25 puts the spawn tile on the fifth row.
        assert_eq!((SPAWN_Y + 25) % ROW_HEIGHT, 0);
    }

    #[test]
    fn test_item_rows_sit_above_enemy_rows() {
        for (item_y, enemy_y) in ITEM_ROWS.iter().zip(ENEMY_ROWS.iter()) {
            assert_eq!(enemy_y - item_y, 10);
        }
    }
}
