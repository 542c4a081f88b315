//! Screen-Space GUI
//!
//! Each non-gameplay screen is a small stateful component with an `update`
//! consuming the tick's key flags and a `render` drawing at fixed screen
//! positions. The HUD overlays the gameplay scene the same way.

pub mod character_select;
pub mod credits;
pub mod game_over;
pub mod hud;
pub mod start_screen;

pub use character_select::CharacterSelect;
pub use credits::CreditsScreen;
pub use game_over::GameOverScreen;
pub use hud::Hud;
pub use start_screen::{StartChoice, StartScreen};
