//! Keyboard events and bindings

use crate::sim::{PlatformerCommand, ShipCommand};

/// Keys the games react to; anything else arrives as `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Other(u32),
}

/// A key press or release reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

pub fn ship_command_on_press(key: Key) -> Option<ShipCommand> {
    match key {
        Key::Up | Key::W => Some(ShipCommand::ThrustForward),
        Key::Down | Key::S => Some(ShipCommand::ThrustReverse),
        Key::Left | Key::A => Some(ShipCommand::TurnLeft),
        Key::Right | Key::D => Some(ShipCommand::TurnRight),
        Key::Space => Some(ShipCommand::Fire),
        Key::Other(_) => None,
    }
}

pub fn ship_command_on_release(key: Key) -> Option<ShipCommand> {
    match key {
        Key::Up | Key::W | Key::Down | Key::S => Some(ShipCommand::ThrustRelease),
        Key::Left | Key::A | Key::Right | Key::D => Some(ShipCommand::TurnRelease),
        Key::Space | Key::Other(_) => None,
    }
}

pub fn platformer_command_on_press(key: Key) -> Option<PlatformerCommand> {
    match key {
        Key::Up | Key::W => Some(PlatformerCommand::Up),
        Key::Down | Key::S => Some(PlatformerCommand::Down),
        Key::Left | Key::A => Some(PlatformerCommand::Left),
        Key::Right | Key::D => Some(PlatformerCommand::Right),
        Key::Space | Key::Other(_) => None,
    }
}

pub fn platformer_command_on_release(key: Key) -> Option<PlatformerCommand> {
    match key {
        Key::Up | Key::W | Key::Down | Key::S => Some(PlatformerCommand::StopVertical),
        Key::Left | Key::A | Key::Right | Key::D => Some(PlatformerCommand::StopTurn),
        Key::Space | Key::Other(_) => None,
    }
}
