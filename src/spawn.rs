//! Spawning and Randomization
//!
//! All randomness in the game flows through the functions here, and every
//! function takes the RNG as a parameter so tests can drive them with a
//! seeded generator.

use crate::board;
use crate::collectible::{Collectible, CollectibleKind};
use crate::collision::{TileBounded, aabb_intersect};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::rock::Rock;
use rand::Rng;
use std::collections::VecDeque;

/// Sample an enemy speed uniformly from the configured range
pub fn random_speed(rng: &mut impl Rng, config: &GameConfig) -> f64 {
    rng.gen_range(config.enemy_speed_min..config.enemy_speed_max)
}

/// Uniform choice among the item columns
pub fn random_column_x(rng: &mut impl Rng) -> i32 {
    board::ITEM_COLUMNS[rng.gen_range(0..board::ITEM_COLUMNS.len())]
}

/// Uniform choice among the item rows
pub fn random_row_y(rng: &mut impl Rng) -> i32 {
    board::ITEM_ROWS[rng.gen_range(0..board::ITEM_ROWS.len())]
}

/// Sample `n` distinct item columns by rejecting duplicates.
///
/// `n` must not exceed the number of columns or the loop cannot terminate.
pub fn distinct_columns(rng: &mut impl Rng, n: usize) -> Vec<i32> {
    debug_assert!(n <= board::ITEM_COLUMNS.len());

    let mut columns: Vec<i32> = Vec::with_capacity(n);
    while columns.len() < n {
        let x = random_column_x(rng);
        if !columns.contains(&x) {
            columns.push(x);
        }
    }
    columns
}

/// Weighted collectible choice: ten equally likely draws partitioned as
/// 5 orange, 2 green, 1 blue, 1 key, 1 heart.
pub fn weighted_kind(rng: &mut impl Rng) -> CollectibleKind {
    match rng.gen_range(0..10) {
        0..=4 => CollectibleKind::OrangeGem,
        5..=6 => CollectibleKind::GreenGem,
        7 => CollectibleKind::BlueGem,
        8 => CollectibleKind::GoldenKey,
        _ => CollectibleKind::Heart,
    }
}

/// One enemy per stone row, starting just off the left edge with
/// independently sampled speeds
pub fn make_enemies(rng: &mut impl Rng, config: &GameConfig) -> Vec<Enemy> {
    board::ENEMY_ROWS
        .iter()
        .map(|&y| Enemy::new(board::ENEMY_SPAWN_X, y, random_speed(rng, config)))
        .collect()
}

/// A fresh batch of rocks at distinct columns, each on a random row
pub fn make_rocks(rng: &mut impl Rng, count: usize) -> Vec<Rock> {
    distinct_columns(rng, count)
        .into_iter()
        .map(|x| Rock::new(x, random_row_y(rng)))
        .collect()
}

/// Draw one collectible candidate and vet its placement.
///
/// The draw is rejected (returns `None`, active set untouched) when the
/// active set is already full or when the candidate's tile square overlaps
/// any rock or any already-active collectible.
pub fn try_spawn_collectible(
    rng: &mut impl Rng,
    rocks: &[Rock],
    active: &VecDeque<Collectible>,
    max_active: usize,
) -> Option<Collectible> {
    if active.len() >= max_active {
        return None;
    }

    let candidate = Collectible::new(random_column_x(rng), random_row_y(rng), weighted_kind(rng));
    let square = candidate.tile_square();

    let blocked = rocks.iter().any(|rock| aabb_intersect(&square, &rock.tile_square()))
        || active.iter().any(|other| aabb_intersect(&square, &other.tile_square()));

    if blocked { None } else { Some(candidate) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_random_speed_stays_in_range() {
        let mut rng = seeded_rng();
        let config = GameConfig::default();
        for _ in 0..1000 {
            let speed = random_speed(&mut rng, &config);
            assert!((80.0..280.0).contains(&speed));
        }
    }

    #[test]
    fn test_random_column_and_row_pick_known_values() {
        let mut rng = seeded_rng();
        for _ in 0..100 {
            assert!(board::ITEM_COLUMNS.contains(&random_column_x(&mut rng)));
            assert!(board::ITEM_ROWS.contains(&random_row_y(&mut rng)));
        }
    }

    #[test]
    fn test_distinct_columns_has_no_duplicates() {
        let mut rng = seeded_rng();
        for _ in 0..50 {
            let columns = distinct_columns(&mut rng, 3);
            assert_eq!(columns.len(), 3);
            for (i, a) in columns.iter().enumerate() {
                assert!(!columns[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn test_distinct_columns_can_fill_the_board() {
        let mut rng = seeded_rng();
        let mut columns = distinct_columns(&mut rng, 5);
        columns.sort();
        assert_eq!(columns, board::ITEM_COLUMNS.to_vec());
    }

    #[test]
    fn test_weighted_kind_follows_the_partition() {
        let mut rng = seeded_rng();
        let mut counts = [0usize; 5];
        for _ in 0..10_000 {
            let slot = match weighted_kind(&mut rng) {
                CollectibleKind::OrangeGem => 0,
                CollectibleKind::GreenGem => 1,
                CollectibleKind::BlueGem => 2,
                CollectibleKind::GoldenKey => 3,
                CollectibleKind::Heart => 4,
            };
            counts[slot] += 1;
        }
        // 50/20/10/10/10 split, with generous tolerance
        assert!(counts[0] > 4500 && counts[0] < 5500);
        assert!(counts[1] > 1600 && counts[1] < 2400);
        for &count in &counts[2..] {
            assert!(count > 700 && count < 1300);
        }
    }

    #[test]
    fn test_make_enemies_one_per_row() {
        let mut rng = seeded_rng();
        let enemies = make_enemies(&mut rng, &GameConfig::default());

        assert_eq!(enemies.len(), 3);
        for (enemy, &row) in enemies.iter().zip(board::ENEMY_ROWS.iter()) {
            assert_eq!(enemy.x, board::ENEMY_SPAWN_X);
            assert_eq!(enemy.y, row);
            assert!((80.0..280.0).contains(&enemy.speed));
        }
    }

    #[test]
    fn test_spawn_rejected_when_full() {
        let mut rng = seeded_rng();
        let active: VecDeque<Collectible> = (0..3)
            .map(|i| Collectible::new(i * 101, 53, CollectibleKind::OrangeGem))
            .collect();

        assert!(try_spawn_collectible(&mut rng, &[], &active, 3).is_none());
    }

    #[test]
    fn test_spawn_rejected_on_rock_overlap() {
        let mut rng = seeded_rng();
        // Rocks on every tile a candidate could land on
        let rocks: Vec<Rock> = board::ITEM_COLUMNS
            .iter()
            .flat_map(|&x| board::ITEM_ROWS.iter().map(move |&y| Rock::new(x, y)))
            .collect();
        let active = VecDeque::new();

        for _ in 0..100 {
            assert!(try_spawn_collectible(&mut rng, &rocks, &active, 3).is_none());
        }
    }

    #[test]
    fn test_spawn_succeeds_on_open_board() {
        let mut rng = seeded_rng();
        let active = VecDeque::new();

        let spawned = try_spawn_collectible(&mut rng, &[], &active, 3)
            .expect("open board must accept a spawn");
        assert!(board::ITEM_COLUMNS.contains(&spawned.x));
        assert!(board::ITEM_ROWS.contains(&spawned.y));
    }
}
