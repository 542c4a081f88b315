//! Input Mapping
//!
//! Raw key-up events map to a small fixed vocabulary of input symbols; any
//! other key produces no symbol and is ignored. Menu screens consume symbols
//! through edge-triggered [`KeyFlags`] that are cleared every tick whether or
//! not the active screen handled them.

use sdl2::keyboard::Keycode;

/// The fixed input vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSymbol {
    Enter,
    Space,
    Left,
    Up,
    Right,
    Down,
    /// Mapped but currently a no-op, matching the classic key table
    Pause,
}

/// Translate a raw keycode into a game symbol, if it maps to one
pub fn map_keycode(keycode: Keycode) -> Option<InputSymbol> {
    match keycode {
        Keycode::Return => Some(InputSymbol::Enter),
        Keycode::Space => Some(InputSymbol::Space),
        Keycode::Left => Some(InputSymbol::Left),
        Keycode::Up => Some(InputSymbol::Up),
        Keycode::Right => Some(InputSymbol::Right),
        Keycode::Down => Some(InputSymbol::Down),
        Keycode::P => Some(InputSymbol::Pause),
        _ => None,
    }
}

/// Edge-triggered key state consumed by the menu screens
#[derive(Debug, Default, Clone)]
pub struct KeyFlags {
    pub enter: bool,
    pub space: bool,
    pub left: bool,
    pub up: bool,
    pub right: bool,
    pub down: bool,
}

impl KeyFlags {
    pub fn set(&mut self, symbol: InputSymbol) {
        match symbol {
            InputSymbol::Enter => self.enter = true,
            InputSymbol::Space => self.space = true,
            InputSymbol::Left => self.left = true,
            InputSymbol::Up => self.up = true,
            InputSymbol::Right => self.right = true,
            InputSymbol::Down => self.down = true,
            InputSymbol::Pause => {}
        }
    }

    /// Enter and space are interchangeable confirm keys
    pub fn confirm(&self) -> bool {
        self.enter || self.space
    }

    pub fn any_arrow(&self) -> bool {
        self.left || self.up || self.right || self.down
    }

    pub fn clear(&mut self) {
        *self = KeyFlags::default();
    }
}
