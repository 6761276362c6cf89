//! Platform abstraction layer
//!
//! Bridges host framework callbacks into the simulation:
//! - Keyboard events and their game bindings
//! - Frame delta time to fixed simulation ticks

pub mod input;
pub mod time;

pub use input::{Key, KeyEvent};
pub use time::FrameClock;
