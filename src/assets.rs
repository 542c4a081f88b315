//! Texture Loading and Caching
//!
//! Every sprite the game draws is loaded once at startup and cached in an
//! [`Assets`] store keyed by [`SpriteId`]. The game loop never starts until
//! every texture has loaded, so lookups during play are infallible in
//! practice; a missing id still surfaces as a `Result` rather than a panic.

use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

/// Identifier for every image the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    StoneBlock,
    WaterBlock,
    GrassBlock,
    EnemyBug,
    HeartSmall,
    CharBoy,
    CharCatGirl,
    CharHornGirl,
    CharPinkGirl,
    CharPrincessGirl,
    GemBlue,
    GemGreen,
    GemOrange,
    Heart,
    Key,
    Rock,
    Selector,
}

impl SpriteId {
    /// Every sprite, in load order
    pub const ALL: [SpriteId; 17] = [
        SpriteId::StoneBlock,
        SpriteId::WaterBlock,
        SpriteId::GrassBlock,
        SpriteId::EnemyBug,
        SpriteId::HeartSmall,
        SpriteId::CharBoy,
        SpriteId::CharCatGirl,
        SpriteId::CharHornGirl,
        SpriteId::CharPinkGirl,
        SpriteId::CharPrincessGirl,
        SpriteId::GemBlue,
        SpriteId::GemGreen,
        SpriteId::GemOrange,
        SpriteId::Heart,
        SpriteId::Key,
        SpriteId::Rock,
        SpriteId::Selector,
    ];

    /// Path of the image file relative to the crate root
    pub fn path(self) -> &'static str {
        match self {
            SpriteId::StoneBlock => "assets/images/stone-block.png",
            SpriteId::WaterBlock => "assets/images/water-block.png",
            SpriteId::GrassBlock => "assets/images/grass-block.png",
            SpriteId::EnemyBug => "assets/images/enemy-bug.png",
            SpriteId::HeartSmall => "assets/images/heart-small.png",
            SpriteId::CharBoy => "assets/images/char-boy.png",
            SpriteId::CharCatGirl => "assets/images/char-cat-girl.png",
            SpriteId::CharHornGirl => "assets/images/char-horn-girl.png",
            SpriteId::CharPinkGirl => "assets/images/char-pink-girl.png",
            SpriteId::CharPrincessGirl => "assets/images/char-princess-girl.png",
            SpriteId::GemBlue => "assets/images/gem-blue.png",
            SpriteId::GemGreen => "assets/images/gem-green.png",
            SpriteId::GemOrange => "assets/images/gem-orange.png",
            SpriteId::Heart => "assets/images/heart.png",
            SpriteId::Key => "assets/images/key.png",
            SpriteId::Rock => "assets/images/rock.png",
            SpriteId::Selector => "assets/images/selector.png",
        }
    }
}

/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Cache of all game textures, keyed by sprite id
pub struct Assets<'a> {
    textures: HashMap<SpriteId, Texture<'a>>,
}

impl<'a> Assets<'a> {
    /// Load every sprite up front. A missing or unreadable image is fatal:
    /// the game loop must not start with a partial texture set.
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        let mut textures = HashMap::with_capacity(SpriteId::ALL.len());
        for id in SpriteId::ALL {
            textures.insert(id, load_texture(texture_creator, id.path())?);
        }
        Ok(Assets { textures })
    }

    /// Get a cached texture handle
    pub fn get(&self, id: SpriteId) -> Result<&Texture<'a>, String> {
        self.textures
            .get(&id)
            .ok_or_else(|| format!("Texture not loaded: {}", id.path()))
    }

    /// Draw a sprite at its natural size with its top-left corner at (x, y)
    pub fn draw(
        &self,
        canvas: &mut Canvas<Window>,
        id: SpriteId,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        let texture = self.get(id)?;
        let query = texture.query();
        canvas
            .copy(texture, None, Rect::new(x, y, query.width, query.height))
            .map_err(|e| e.to_string())
    }
}
