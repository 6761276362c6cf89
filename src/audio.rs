//! Sound effect requests
//!
//! Decoding and playback belong to the host; this module decides which
//! sound a game event makes and how loud, then hands the asset path to an
//! [`AudioSink`].

use crate::assets::sounds;
use crate::settings::AudioSettings;
use crate::sim::{AsteroidTier, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Laser,
    /// Large asteroid broken
    ExplosionLarge,
    /// Medium asteroid broken
    ExplosionMedium,
    /// Small asteroid broken
    HitSmall,
    /// Tiny asteroid destroyed
    HitTiny,
}

impl SoundEffect {
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundEffect::Laser => sounds::LASER,
            SoundEffect::ExplosionLarge => sounds::EXPLOSION_LARGE,
            SoundEffect::ExplosionMedium => sounds::EXPLOSION_MEDIUM,
            SoundEffect::HitSmall => sounds::HIT_SMALL,
            SoundEffect::HitTiny => sounds::HIT_TINY,
        }
    }

    /// Sound for a simulation event, if it makes one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Fired { .. } => Some(SoundEffect::Laser),
            GameEvent::AsteroidDestroyed { tier, .. } => Some(match tier {
                AsteroidTier::Large => SoundEffect::ExplosionLarge,
                AsteroidTier::Medium => SoundEffect::ExplosionMedium,
                AsteroidTier::Small => SoundEffect::HitSmall,
                AsteroidTier::Tiny => SoundEffect::HitTiny,
            }),
            GameEvent::ShipHit { .. } | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Host playback: fire-and-forget
pub trait AudioSink {
    fn play(&mut self, path: &'static str, volume: f32);
}

/// Sink for headless runs: logs instead of playing
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, path: &'static str, volume: f32) {
        log::debug!("play {} @ {:.2}", path, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogSink))
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self::from_settings(&AudioSettings::default(), sink)
    }

    pub fn from_settings(settings: &AudioSettings, sink: Box<dyn AudioSink>) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: settings.muted,
            played: 0,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Number of sounds handed to the sink
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect.asset_path(), vol);
        self.played += 1;
    }

    /// Play whatever sounds a batch of events calls for
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(&'static str, f32)>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, path: &'static str, volume: f32) {
            self.0.borrow_mut().push((path, volume));
        }
    }

    #[test]
    fn test_event_sounds() {
        let fired = GameEvent::Fired { pos: Vec2::ZERO };
        assert_eq!(SoundEffect::for_event(&fired), Some(SoundEffect::Laser));

        let broke = GameEvent::AsteroidDestroyed {
            tier: AsteroidTier::Medium,
            pos: Vec2::ZERO,
        };
        assert_eq!(SoundEffect::for_event(&broke), Some(SoundEffect::ExplosionMedium));

        let hit = GameEvent::ShipHit { lives_left: 2 };
        assert_eq!(SoundEffect::for_event(&hit), None);
    }

    #[test]
    fn test_volume_and_mute() {
        let recorder = Recorder::default();
        let settings = AudioSettings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            muted: false,
        };
        let mut audio = AudioManager::from_settings(&settings, Box::new(recorder.clone()));

        audio.play(SoundEffect::Laser);
        assert_eq!(recorder.0.borrow().as_slice(), &[(sounds::LASER, 0.25)]);

        audio.set_muted(true);
        audio.play(SoundEffect::HitTiny);
        assert_eq!(recorder.0.borrow().len(), 1);
        assert_eq!(audio.played(), 1);
    }

    #[test]
    fn test_play_events_skips_silent() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.play_events(&[
            GameEvent::Fired { pos: Vec2::ZERO },
            GameEvent::ShipHit { lives_left: 1 },
            GameEvent::AsteroidDestroyed {
                tier: AsteroidTier::Large,
                pos: Vec2::ZERO,
            },
        ]);
        let played: Vec<_> = recorder.0.borrow().iter().map(|(p, _)| *p).collect();
        assert_eq!(played, vec![sounds::LASER, sounds::EXPLOSION_LARGE]);
    }
}
