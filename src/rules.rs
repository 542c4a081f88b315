//! Gameplay Rules
//!
//! The per-tick simulation step and the event-driven movement handler. Both
//! operate on the whole [`Session`] because a single rule can touch the
//! player, the entity collections, and the active screen in one pass.

use crate::board;
use crate::collision::{TileBounded, aabb_intersect, overlapping_indices};
use crate::config::GameConfig;
use crate::player::Direction;
use crate::session::{Screen, Session};
use crate::spawn;
use rand::Rng;

/// One simulation tick of the gameplay screen: advance every entity, resolve
/// enemy contact, then run the timed spawn and eviction effects.
pub fn update_gameplay(session: &mut Session, dt: f64, rng: &mut impl Rng, config: &GameConfig) {
    for enemy in &mut session.enemies {
        enemy.update(dt, rng, config);
    }
    session.player.update();

    // Every enemy overlapping the player this tick costs a life on its own,
    // so standing where two stone rows of traffic cross can cost two at once.
    let player_square = session.player.tile_square();
    let hits = overlapping_indices(&player_square, &session.enemies).len() as i32;
    if hits > 0 {
        session.player.reset_to_spawn();
        session.player.lives = (session.player.lives - hits).max(0);
    }

    if session.player.lives == 0 {
        session.screen = Screen::GameOver;
        return;
    }

    for _ in 0..session.spawn_timer.tick(dt) {
        if let Some(collectible) = spawn::try_spawn_collectible(
            rng,
            &session.rocks,
            &session.collectibles,
            config.max_collectibles,
        ) {
            session.collectibles.push_back(collectible);
        }
    }
    for _ in 0..session.evict_timer.tick(dt) {
        session.collectibles.pop_front();
    }

    session.clock.tick(dt);
}

/// Resolve one movement key press. The destination tile is probed before the
/// player moves: a rock there cancels the move outright, a collectible there
/// is picked up and the move proceeds. Reaching the water row from the top
/// grass row scores the crossing and returns the player to the spawn tile.
pub fn handle_movement(session: &mut Session, direction: Direction, config: &GameConfig) {
    let destination = session.player.destination_square(direction);

    if session
        .rocks
        .iter()
        .any(|rock| aabb_intersect(&destination, &rock.tile_square()))
    {
        return;
    }

    if let Some(index) = session
        .collectibles
        .iter()
        .position(|c| aabb_intersect(&destination, &c.tile_square()))
    {
        if let Some(collectible) = session.collectibles.remove(index) {
            if collectible.kind.grants_life() {
                session.player.lives = (session.player.lives + 1).min(config.starting_lives);
            } else {
                session.player.score += collectible.kind.score().unwrap_or(0);
            }
        }
    }

    let player = &mut session.player;
    match direction {
        Direction::Left => {
            if player.x >= board::COL_WIDTH {
                player.x -= board::COL_WIDTH;
            }
        }
        Direction::Right => {
            if player.x + board::COL_WIDTH < board::BOARD_WIDTH as i32 {
                player.x += board::COL_WIDTH;
            }
        }
        Direction::Down => {
            if player.y < board::SPAWN_Y {
                player.y += board::ROW_HEIGHT;
            }
        }
        Direction::Up => {
            if player.y >= board::ROW_HEIGHT {
                player.y -= board::ROW_HEIGHT;
            } else {
                player.score += config.river_reward;
                player.reset_to_spawn();
            }
        }
    }
}
