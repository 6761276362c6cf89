//! In-memory draw surface for headless runs

use glam::Vec2;

use super::{DrawSurface, SpriteDraw};

/// Keeps the draw calls of the most recent frame
#[derive(Debug, Default, Clone)]
pub struct DrawRecorder {
    pub sprites: Vec<SpriteDraw>,
    pub texts: Vec<(String, Vec2, f32)>,
    /// Frames started so far
    pub clears: u64,
}

impl DrawRecorder {
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|(t, _, _)| t == text)
    }
}

impl DrawSurface for DrawRecorder {
    fn clear(&mut self) {
        self.sprites.clear();
        self.texts.clear();
        self.clears += 1;
    }

    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        self.sprites.push(*sprite);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32) {
        self.texts.push((text.to_owned(), pos, size));
    }
}
