//! Host lifecycle hooks
//!
//! The host framework calls these once per frame or per key event. Each
//! game owns its simulation state and a fixed-step clock; all mutation
//! happens on the caller's thread.

use crate::audio::{AudioManager, AudioSink};
use crate::platform::input::{
    platformer_command_on_press, platformer_command_on_release, ship_command_on_press,
    ship_command_on_release,
};
use crate::platform::{FrameClock, KeyEvent};
use crate::renderer::{self, DrawSurface};
use crate::settings::Settings;
use crate::sim::{GameState, Platformer, TickInput, tick};
use crate::Result;

/// Velocity of Escape session driver
pub struct Game {
    state: GameState,
    settings: Settings,
    clock: FrameClock,
    audio: AudioManager,
    autopilot: bool,
}

impl Game {
    /// Fails if the settings do not pass [`Settings::validate`]
    pub fn new(settings: Settings, seed: u64, sink: Box<dyn AudioSink>) -> Result<Self> {
        settings.validate()?;
        let audio = AudioManager::from_settings(&settings.audio, sink);
        Ok(Self {
            state: GameState::with_rules(settings.rules, seed),
            settings,
            clock: FrameClock::default(),
            audio,
            autopilot: false,
        })
    }

    /// Throw away the current session and begin a new one
    pub fn start(&mut self, seed: u64) {
        self.state = GameState::with_rules(self.settings.rules, seed);
        self.clock.reset();
    }

    /// Demo mode: the autopilot flies the ship
    pub fn set_autopilot(&mut self, enabled: bool) {
        if enabled != self.autopilot {
            log::info!("Demo mode: {}", enabled);
        }
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn key_down(&mut self, event: KeyEvent) {
        if let Some(command) = ship_command_on_press(event.key) {
            self.state.apply(command);
            self.flush_events();
        }
    }

    pub fn key_up(&mut self, event: KeyEvent) {
        if let Some(command) = ship_command_on_release(event.key) {
            self.state.apply(command);
        }
    }

    /// Advance by a frame's worth of time; returns the ticks run
    pub fn update(&mut self, delta_time: f32) -> u32 {
        let steps = self.clock.advance(delta_time);
        let input = TickInput {
            commands: Vec::new(),
            autopilot: self.autopilot,
        };
        for _ in 0..steps {
            tick(&mut self.state, &input);
        }
        self.flush_events();
        steps
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        renderer::render(&self.state, self.settings.show_hud, surface);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        self.audio.play_events(&events);
    }
}

/// Space Man prototype driver
#[derive(Debug, Default)]
pub struct PlatformerGame {
    world: Platformer,
    clock: FrameClock,
}

impl PlatformerGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.world = Platformer::new();
        self.clock.reset();
    }

    pub fn key_down(&mut self, event: KeyEvent) {
        if let Some(command) = platformer_command_on_press(event.key) {
            self.world.apply(command);
        }
    }

    pub fn key_up(&mut self, event: KeyEvent) {
        if let Some(command) = platformer_command_on_release(event.key) {
            self.world.apply(command);
        }
    }

    pub fn update(&mut self, delta_time: f32) -> u32 {
        let steps = self.clock.advance(delta_time);
        for _ in 0..steps {
            self.world.update();
        }
        steps
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        renderer::render_platformer(&self.world, surface);
    }

    pub fn world(&self) -> &Platformer {
        &self.world
    }
}
