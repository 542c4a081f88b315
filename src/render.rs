//! Gameplay Scene Rendering
//!
//! Draw order is fixed: board tiles, then the static props sorted back to
//! front, then enemies, then the player, then the HUD on top of everything.

use crate::assets::Assets;
use crate::board;
use crate::collectible::Collectible;
use crate::gui::Hud;
use crate::rock::Rock;
use crate::session::Session;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Static props share a depth sort so a rock in a lower row is drawn over a
/// gem peeking out from the row above it.
enum Prop<'a> {
    Rock(&'a Rock),
    Collectible(&'a Collectible),
}

impl Prop<'_> {
    fn depth(&self) -> i32 {
        match self {
            Prop::Rock(rock) => rock.x + rock.y,
            Prop::Collectible(collectible) => collectible.x + collectible.y,
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>, assets: &Assets) -> Result<(), String> {
        match self {
            Prop::Rock(rock) => rock.render(canvas, assets),
            Prop::Collectible(collectible) => collectible.render(canvas, assets),
        }
    }
}

pub fn render_scene(
    canvas: &mut Canvas<Window>,
    assets: &Assets,
    session: &Session,
) -> Result<(), String> {
    board::render(canvas, assets)?;

    let mut props: Vec<Prop> = session
        .rocks
        .iter()
        .map(Prop::Rock)
        .chain(session.collectibles.iter().map(Prop::Collectible))
        .collect();
    props.sort_by_key(|prop| prop.depth());
    for prop in &props {
        prop.render(canvas, assets)?;
    }

    for enemy in &session.enemies {
        enemy.render(canvas, assets)?;
    }
    session.player.render(canvas, assets)?;

    Hud.render(canvas, assets, &session.player, &session.clock)?;

    Ok(())
}
