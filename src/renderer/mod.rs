//! Draw-call emission
//!
//! The host owns the window and textures. Each frame the game clears a
//! [`DrawSurface`] and pushes sprites and text onto it in back-to-front
//! order.

pub mod recorder;

pub use recorder::DrawRecorder;

use glam::Vec2;

use crate::assets::{self, SpriteAsset};
use crate::sim::{GameState, Platformer};

/// Opaque alpha
pub const OPAQUE: u8 = 255;
/// Alpha of the ship while it cannot be hit
pub const INVULNERABLE_ALPHA: u8 = 128;
/// HUD font size
pub const HUD_TEXT_SIZE: f32 = 13.0;
pub const GAME_OVER_TEXT_SIZE: f32 = 48.0;

/// One textured quad centered on `pos`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub path: &'static str,
    pub pos: Vec2,
    /// Degrees, counter-clockwise
    pub angle: f32,
    pub scale: f32,
    pub alpha: u8,
}

impl SpriteDraw {
    pub fn new(sprite: SpriteAsset, pos: Vec2, angle: f32) -> Self {
        Self {
            path: sprite.path,
            pos,
            angle,
            scale: sprite.scale,
            alpha: OPAQUE,
        }
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Host drawing backend
pub trait DrawSurface {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: &SpriteDraw);
    /// `pos` is the bottom-left of the text baseline
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32);
}

/// Draw one frame of the shooter
pub fn render(state: &GameState, show_hud: bool, surface: &mut dyn DrawSurface) {
    surface.clear();

    let ship = &state.ship;
    let alpha = if state.is_ship_invulnerable() {
        INVULNERABLE_ALPHA
    } else {
        OPAQUE
    };
    surface.draw_sprite(&SpriteDraw::new(ship.sprite(), ship.pos, ship.angle).with_alpha(alpha));

    for entity in state.entities.iter() {
        surface.draw_sprite(&SpriteDraw::new(entity.sprite(), entity.pos, entity.angle));
    }

    if show_hud {
        render_hud(state, surface);
    }

    if state.game_over {
        let center = state.rules.world.center();
        surface.draw_text(
            "GAME OVER",
            Vec2::new(center.x - 140.0, center.y),
            GAME_OVER_TEXT_SIZE,
        );
    }
}

fn render_hud(state: &GameState, surface: &mut dyn DrawSurface) {
    surface.draw_text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 70.0),
        HUD_TEXT_SIZE,
    );
    surface.draw_text(
        &format!("Asteroid Count: {}", state.asteroid_count()),
        Vec2::new(10.0, 50.0),
        HUD_TEXT_SIZE,
    );

    // Icons march right from the origin, one icon width apart
    let icon = assets::LIFE_ICON;
    let size = icon.half_extents() * 2.0;
    let mut cur = 0.0;
    for _ in 0..state.lives {
        surface.draw_sprite(&SpriteDraw::new(icon, Vec2::new(cur + size.x, size.y), 0.0));
        cur += size.x;
    }
}

/// Draw one frame of the Space Man prototype
pub fn render_platformer(game: &Platformer, surface: &mut dyn DrawSurface) {
    surface.clear();
    for &center in &game.walls {
        surface.draw_sprite(&SpriteDraw::new(assets::platformer::WALL, center, 0.0));
    }
    let player = &game.player;
    surface.draw_sprite(&SpriteDraw::new(
        assets::platformer::PLAYER,
        player.pos,
        player.angle,
    ));
}
