//! Game Session and Screen State Machine
//!
//! All process-wide mutable state lives in one [`Session`] struct: the active
//! screen, the entity collections, the edge-triggered key flags, and the
//! gameplay timers. Exactly one screen is active at a time because the screen
//! is an enum, not a set of booleans, so conflicting screen states cannot be
//! represented.

use crate::collectible::Collectible;
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::gui::{CharacterSelect, StartChoice, StartScreen};
use crate::input::{InputSymbol, KeyFlags};
use crate::player::{Direction, Player};
use crate::rock::Rock;
use crate::rules;
use crate::spawn;
use crate::timer::{GameClock, IntervalTimer};
use rand::Rng;
use std::collections::VecDeque;

/// The screen whose update/render pair runs this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    CharacterSelect,
    Gameplay,
    Credits,
    GameOver,
}

pub struct Session {
    pub screen: Screen,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Active collectibles, oldest first (evictions pop the front)
    pub collectibles: VecDeque<Collectible>,
    pub rocks: Vec<Rock>,
    pub keys: KeyFlags,
    pub start_screen: StartScreen,
    pub character_select: CharacterSelect,
    pub clock: GameClock,
    pub(crate) spawn_timer: IntervalTimer,
    pub(crate) evict_timer: IntervalTimer,
}

impl Session {
    /// A fresh session on the start screen. Entities are not populated until
    /// a game actually begins.
    pub fn new(config: &GameConfig) -> Self {
        Session {
            screen: Screen::Start,
            player: Player::new(config.starting_lives),
            enemies: Vec::new(),
            collectibles: VecDeque::new(),
            rocks: Vec::new(),
            keys: KeyFlags::default(),
            start_screen: StartScreen::new(),
            character_select: CharacterSelect::new(),
            clock: GameClock::new(),
            spawn_timer: IntervalTimer::new(config.spawn_period),
            evict_timer: IntervalTimer::new(config.evict_period),
        }
    }

    /// Route one input symbol: player movement while Gameplay is active,
    /// menu key flags everywhere else.
    pub fn handle_input(&mut self, symbol: InputSymbol, config: &GameConfig) {
        if self.screen == Screen::Gameplay {
            let direction = match symbol {
                InputSymbol::Left => Some(Direction::Left),
                InputSymbol::Up => Some(Direction::Up),
                InputSymbol::Right => Some(Direction::Right),
                InputSymbol::Down => Some(Direction::Down),
                InputSymbol::Enter | InputSymbol::Space | InputSymbol::Pause => None,
            };
            if let Some(direction) = direction {
                rules::handle_movement(self, direction, config);
            }
        } else {
            self.keys.set(symbol);
        }
    }

    /// Advance the active screen by one tick. Key flags are consumed and
    /// cleared every tick whether or not the screen handled them.
    pub fn update(&mut self, dt: f64, rng: &mut impl Rng, config: &GameConfig) {
        match self.screen {
            Screen::Start => {
                self.start_screen.update(dt, &self.keys);
                if self.keys.confirm() {
                    self.screen = match self.start_screen.choice {
                        StartChoice::NewGame => Screen::CharacterSelect,
                        StartChoice::Credits => Screen::Credits,
                    };
                }
            }
            Screen::CharacterSelect => {
                self.character_select
                    .update(dt, &self.keys, config.slide_speed);
                if self.keys.confirm() {
                    self.start_gameplay(rng, config);
                }
            }
            Screen::Gameplay => {
                rules::update_gameplay(self, dt, rng, config);
            }
            Screen::Credits | Screen::GameOver => {
                if self.keys.confirm() {
                    self.screen = Screen::Start;
                }
            }
        }
        self.keys.clear();
    }

    /// Begin a new game: lock in the selected character, reset the player,
    /// regenerate rocks and enemies, and clear every gameplay timer.
    fn start_gameplay(&mut self, rng: &mut impl Rng, config: &GameConfig) {
        let sprite = self.character_select.selected();
        self.player = Player::new(config.starting_lives);
        self.player.sprite = sprite;

        self.enemies = spawn::make_enemies(rng, config);
        self.rocks = spawn::make_rocks(rng, config.rock_count);
        self.collectibles.clear();

        self.spawn_timer.reset();
        self.evict_timer.reset();
        self.clock.reset();

        self.screen = Screen::Gameplay;
    }
}
