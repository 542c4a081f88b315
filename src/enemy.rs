//! Enemy Bugs
//!
//! Enemies patrol the three stone rows left to right at a constant,
//! per-enemy speed. An enemy never changes row; when it runs off the right
//! edge it respawns in place just off the left edge on the same row with a
//! freshly sampled speed, so the collection always holds exactly one enemy
//! per slot.

use crate::assets::{Assets, SpriteId};
use crate::board;
use crate::collision::TileBounded;
use crate::config::GameConfig;
use crate::spawn;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub speed: f64,
}

impl Enemy {
    pub fn new(x: i32, y: i32, speed: f64) -> Self {
        Enemy { x, y, speed }
    }

    /// Advance along the row by `floor(speed * dt)` pixels.
    ///
    /// `dt` is unclamped by design: after a long stall the enemy may jump a
    /// large distance in one tick. Crossing the right edge respawns this
    /// slot at the left edge, same row, new speed.
    pub fn update(&mut self, dt: f64, rng: &mut impl Rng, config: &GameConfig) {
        self.x += (self.speed * dt).floor() as i32;

        if self.x >= board::ENEMY_DESPAWN_X {
            self.x = board::ENEMY_SPAWN_X;
            self.speed = spawn::random_speed(rng, config);
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        assets.draw(canvas, SpriteId::EnemyBug, self.x, self.y)
    }
}

impl TileBounded for Enemy {
    fn tile_square(&self) -> Rect {
        Rect::new(self.x, self.y + 75, 100, 75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_update_advances_by_floored_speed_times_dt() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GameConfig::default();
        let mut enemy = Enemy::new(0, 63, 150.0);

        enemy.update(0.016, &mut rng, &config);

        // floor(150 * 0.016) = floor(2.4) = 2
        assert_eq!(enemy.x, 2);
        assert_eq!(enemy.y, 63);
        assert_eq!(enemy.speed, 150.0);
    }

    #[test]
    fn test_row_never_changes() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = GameConfig::default();
        let mut enemy = Enemy::new(-101, 146, 200.0);

        for _ in 0..1000 {
            enemy.update(0.016, &mut rng, &config);
            assert_eq!(enemy.y, 146);
        }
    }

    #[test]
    fn test_respawns_past_right_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = GameConfig::default();
        let mut enemy = Enemy::new(504, 229, 100.0);

        enemy.update(0.05, &mut rng, &config);

        assert_eq!(enemy.x, board::ENEMY_SPAWN_X);
        assert_eq!(enemy.y, 229);
        assert!(enemy.speed >= 80.0 && enemy.speed < 280.0);
    }

    #[test]
    fn test_tile_square_offsets() {
        let enemy = Enemy::new(10, 63, 100.0);
        let square = enemy.tile_square();

        assert_eq!((square.x(), square.y()), (10, 138));
        assert_eq!((square.width(), square.height()), (100, 75));
    }
}
