//! Space Man platformer prototype
//!
//! A single player body that moves vertically, rotates in place, and is
//! blocked by static walls. Movement is resolved one axis at a time: after
//! each step any overlap is removed by snapping the player flush against
//! the wall it ran into.

use glam::Vec2;

use super::collision::Aabb;
use crate::assets;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformerCommand {
    Up,
    Down,
    Left,
    Right,
    StopVertical,
    StopTurn,
}

/// The player-controlled body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Per-tick displacement
    pub change: Vec2,
    /// Degrees, counter-clockwise
    pub angle: f32,
    /// Degrees per tick. Key presses turn in one shot, so only the host
    /// sets this; releasing a turn key clears it.
    pub change_angle: f32,
    pub half: Vec2,
}

impl Body {
    pub fn bounds(&self) -> Aabb {
        Aabb::rotated(self.pos, self.half, self.angle)
    }
}

#[derive(Debug, Clone)]
pub struct Platformer {
    pub player: Body,
    /// Centers of the wall sprites
    pub walls: Vec<Vec2>,
    pub frame_count: u64,
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Platformer {
    /// Starting layout: player near the bottom-left, two meteors
    pub fn new() -> Self {
        let walls = (1..3)
            .map(|i| Vec2::new(i as f32 * 100.0, i as f32 * 20.0))
            .collect();
        Self::with_walls(Vec2::new(64.0, 120.0), walls)
    }

    pub fn with_walls(player_pos: Vec2, walls: Vec<Vec2>) -> Self {
        Self {
            player: Body {
                pos: player_pos,
                change: Vec2::ZERO,
                angle: 0.0,
                change_angle: 0.0,
                half: assets::platformer::PLAYER.half_extents(),
            },
            walls,
            frame_count: 0,
        }
    }

    pub fn wall_bounds(&self) -> impl Iterator<Item = Aabb> + '_ {
        let half = assets::platformer::WALL.half_extents();
        self.walls.iter().map(move |&c| Aabb::from_center(c, half))
    }

    pub fn apply(&mut self, command: PlatformerCommand) {
        let player = &mut self.player;
        match command {
            PlatformerCommand::Up => player.change.y = PLAYER_MOVEMENT_SPEED,
            PlatformerCommand::Down => player.change.y = -PLAYER_MOVEMENT_SPEED,
            // One-shot rotation per key press
            PlatformerCommand::Left => player.angle += PLAYER_TURN_SPEED,
            PlatformerCommand::Right => player.angle -= PLAYER_TURN_SPEED,
            PlatformerCommand::StopVertical => player.change.y = 0.0,
            PlatformerCommand::StopTurn => player.change_angle = 0.0,
        }
    }

    fn hits(&self) -> Vec<Aabb> {
        let player = self.player.bounds();
        self.wall_bounds().filter(|w| w.overlaps(&player)).collect()
    }

    /// One physics step: rotate, then move on y, then on x
    pub fn update(&mut self) {
        self.frame_count += 1;

        if self.player.change_angle != 0.0 {
            let previous = self.player.angle;
            self.player.angle += self.player.change_angle;
            if !self.hits().is_empty() {
                self.player.angle = previous;
            }
        }

        let dy = self.player.change.y;
        if dy != 0.0 {
            self.player.pos.y += dy;
            let hits = self.hits();
            if !hits.is_empty() {
                let bounds = self.player.bounds();
                if dy > 0.0 {
                    let limit = hits.iter().map(|w| w.bottom()).fold(f32::INFINITY, f32::min);
                    self.player.pos.y += limit - bounds.top();
                } else {
                    let limit = hits.iter().map(|w| w.top()).fold(f32::NEG_INFINITY, f32::max);
                    self.player.pos.y += limit - bounds.bottom();
                }
            }
        }

        let dx = self.player.change.x;
        if dx != 0.0 {
            self.player.pos.x += dx;
            let hits = self.hits();
            if !hits.is_empty() {
                let bounds = self.player.bounds();
                if dx > 0.0 {
                    let limit = hits.iter().map(|w| w.left()).fold(f32::INFINITY, f32::min);
                    self.player.pos.x += limit - bounds.right();
                } else {
                    let limit = hits.iter().map(|w| w.right()).fold(f32::NEG_INFINITY, f32::max);
                    self.player.pos.x += limit - bounds.left();
                }
            }
        }
    }
}
